use crate::models::enums::{Direction, RiskCategory};

use super::reference::ScoringReference;
use super::types::{Contribution, FeatureKey, FeatureVector, RiskEstimator, RiskResult, TriageError};

/// Category thresholds on the ensemble score.
pub mod risk_thresholds {
    /// Below this: low. At this value: medium.
    pub const MEDIUM: f64 = 0.40;

    /// Below this: medium. At this value: high.
    pub const HIGH: f64 = 0.70;
}

/// Clamp bounds for the cross-model agreement confidence.
pub mod confidence_bounds {
    pub const FLOOR: f64 = 0.30;
    pub const CEILING: f64 = 0.95;
}

/// Contributions retained after ranking.
const MAX_CONTRIBUTIONS: usize = 5;

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

// ---------------------------------------------------------------------------
// Linear arm
// ---------------------------------------------------------------------------

/// Weighted z-score model against the population priors. The per-feature
/// signed products double as the explanation impacts.
pub struct LinearArm<'a> {
    reference: &'a ScoringReference,
}

impl<'a> LinearArm<'a> {
    pub fn new(reference: &'a ScoringReference) -> Self {
        Self { reference }
    }

    /// Probability plus the per-feature impacts behind it, in the fixed
    /// feature evaluation order.
    pub fn probability_with_contributions(
        &self,
        features: &FeatureVector,
    ) -> Result<(f64, Vec<Contribution>), TriageError> {
        let mut score = self.reference.intercept;
        let mut contributions = Vec::with_capacity(FeatureKey::ALL.len());

        for (key, raw) in features.entries() {
            let normal = self.reference.normal_for(key).ok_or_else(|| {
                TriageError::MalformedInput {
                    field: key.as_str().into(),
                    reason: "no population normal in scoring reference".into(),
                }
            })?;
            let weight = self.reference.weight_for(key).ok_or_else(|| {
                TriageError::MalformedInput {
                    field: key.as_str().into(),
                    reason: "no weight in scoring reference".into(),
                }
            })?;

            let z = (raw - normal.mean) / normal.std;
            if !z.is_finite() {
                return Err(TriageError::NumericDomain {
                    context: format!("z-score for {}", key.as_str()),
                    value: z,
                });
            }

            let impact = weight * z;
            score += impact;

            contributions.push(Contribution {
                feature: key,
                label: key.label().to_string(),
                impact,
                direction: if impact >= 0.0 {
                    Direction::Increase
                } else {
                    Direction::Decrease
                },
                rationale: rationale_for(key).to_string(),
            });
        }

        let probability = sigmoid(score);
        if !probability.is_finite() {
            return Err(TriageError::NumericDomain {
                context: "linear arm probability".into(),
                value: probability,
            });
        }

        Ok((probability, contributions))
    }
}

impl RiskEstimator for LinearArm<'_> {
    fn estimate(&self, features: &FeatureVector) -> Result<f64, TriageError> {
        self.probability_with_contributions(features)
            .map(|(probability, _)| probability)
    }
}

/// Only three features carry explanation text; the rest stay empty.
fn rationale_for(key: FeatureKey) -> &'static str {
    match key {
        FeatureKey::Hemoglobin => "Lower haemoglobin raises anemia-related risk.",
        FeatureKey::IronIntake => "Regular IFA consumption protects from anemia.",
        FeatureKey::AncVisits => "More ANC visits reduce preventable risk.",
        _ => "",
    }
}

// ---------------------------------------------------------------------------
// Rule-vote arm
// ---------------------------------------------------------------------------

/// Additive weighted-vote approximation of a tree ensemble. Every rule
/// weight counts toward the denominator; satisfied rules add theirs to
/// the numerator, so the result is a fixed-weight vote fraction.
pub struct RuleVoteArm<'a> {
    reference: &'a ScoringReference,
}

impl<'a> RuleVoteArm<'a> {
    pub fn new(reference: &'a ScoringReference) -> Self {
        Self { reference }
    }
}

impl RiskEstimator for RuleVoteArm<'_> {
    fn estimate(&self, features: &FeatureVector) -> Result<f64, TriageError> {
        let mut vote_sum = 0.0;
        let mut vote_count = 0.0;

        for rule in &self.reference.rules {
            vote_count += rule.weight;
            if (rule.check)(features) {
                vote_sum += rule.weight;
            }
        }

        let probability = (vote_sum / vote_count.max(1.0)).clamp(0.0, 1.0);
        if !probability.is_finite() {
            return Err(TriageError::NumericDomain {
                context: "rule vote probability".into(),
                value: probability,
            });
        }

        Ok(probability)
    }
}

// ---------------------------------------------------------------------------
// Combination
// ---------------------------------------------------------------------------

/// Discretize an ensemble score. Exactly 0.40 is medium, exactly 0.70 is high.
pub fn category_for_score(score: f64) -> RiskCategory {
    if score < risk_thresholds::MEDIUM {
        RiskCategory::Low
    } else if score < risk_thresholds::HIGH {
        RiskCategory::Medium
    } else {
        RiskCategory::High
    }
}

/// Average the two arm probabilities into the ensemble score, category
/// and agreement confidence.
fn combine(linear: f64, rule: f64) -> (f64, RiskCategory, f64) {
    let ensemble = ((linear + rule) / 2.0).clamp(0.0, 1.0);
    let confidence = (1.0 - (linear - rule).abs())
        .clamp(confidence_bounds::FLOOR, confidence_bounds::CEILING);
    (ensemble, category_for_score(ensemble), confidence)
}

/// Score a feature vector against the reference tables. Contributions
/// come from the linear arm only, ranked by descending absolute impact
/// and truncated to five; ties keep the fixed feature order.
pub fn score(
    features: &FeatureVector,
    reference: &ScoringReference,
) -> Result<RiskResult, TriageError> {
    let linear_arm = LinearArm::new(reference);
    let rule_arm = RuleVoteArm::new(reference);

    let (logistic, mut contributions) = linear_arm.probability_with_contributions(features)?;
    let rule_ensemble = rule_arm.estimate(features)?;

    let (ensemble_score, category, confidence) = combine(logistic, rule_ensemble);

    contributions.sort_by(|a, b| b.impact.abs().total_cmp(&a.impact.abs()));
    contributions.truncate(MAX_CONTRIBUTIONS);

    Ok(RiskResult {
        logistic,
        rule_ensemble,
        ensemble_score,
        category,
        confidence,
        contributions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A vector sitting exactly on the population means.
    fn mean_features() -> FeatureVector {
        FeatureVector {
            age: 26.0,
            bmi: 22.5,
            hemoglobin: 11.2,
            bp_systolic: 115.0,
            bp_diastolic: 74.0,
            blood_sugar: 94.0,
            anc_visits: 3.2,
            iron_intake: 0.6,
            previous_complications: 0.18,
        }
    }

    struct FixedArm(f64);

    impl RiskEstimator for FixedArm {
        fn estimate(&self, _features: &FeatureVector) -> Result<f64, TriageError> {
            Ok(self.0)
        }
    }

    // ── Category thresholds ────────────────────────────────────────────

    #[test]
    fn category_boundaries() {
        assert_eq!(category_for_score(0.39), RiskCategory::Low);
        assert_eq!(category_for_score(0.40), RiskCategory::Medium);
        assert_eq!(category_for_score(0.69), RiskCategory::Medium);
        assert_eq!(category_for_score(0.70), RiskCategory::High);
    }

    #[test]
    fn category_extremes() {
        assert_eq!(category_for_score(0.0), RiskCategory::Low);
        assert_eq!(category_for_score(1.0), RiskCategory::High);
    }

    // ── Combination against mock arms ──────────────────────────────────

    #[test]
    fn combine_boundary_scores_via_mock_arms() {
        let features = mean_features();

        let linear = FixedArm(0.40).estimate(&features).unwrap();
        let rule = FixedArm(0.40).estimate(&features).unwrap();
        let (ensemble, category, _) = combine(linear, rule);
        assert_eq!(ensemble, 0.40);
        assert_eq!(category, RiskCategory::Medium);

        let linear = FixedArm(0.70).estimate(&features).unwrap();
        let rule = FixedArm(0.70).estimate(&features).unwrap();
        let (ensemble, category, _) = combine(linear, rule);
        assert_eq!(ensemble, 0.70);
        assert_eq!(category, RiskCategory::High);
    }

    #[test]
    fn confidence_floors_on_full_disagreement() {
        let (_, _, confidence) = combine(1.0, 0.0);
        assert_eq!(confidence, confidence_bounds::FLOOR);
    }

    #[test]
    fn confidence_caps_on_perfect_agreement() {
        let (_, _, confidence) = combine(0.5, 0.5);
        assert_eq!(confidence, confidence_bounds::CEILING);
    }

    #[test]
    fn confidence_tracks_agreement_between_bounds() {
        let (_, _, confidence) = combine(0.6, 0.4);
        assert!((confidence - 0.8).abs() < 1e-12);
    }

    // ── Linear arm ─────────────────────────────────────────────────────

    #[test]
    fn linear_arm_at_population_means_is_intercept_sigmoid() {
        let reference = ScoringReference::clinical();
        let arm = LinearArm::new(&reference);
        let (probability, contributions) =
            arm.probability_with_contributions(&mean_features()).unwrap();

        // All z-scores are zero, so only the intercept survives.
        assert!((probability - sigmoid(-0.35)).abs() < 1e-12);
        assert!(contributions.iter().all(|c| c.impact == 0.0));
        assert!((probability - 0.413382).abs() < 1e-6);
    }

    #[test]
    fn linear_arm_impact_is_weight_times_z() {
        let reference = ScoringReference::clinical();
        let arm = LinearArm::new(&reference);

        let mut features = mean_features();
        features.hemoglobin = 10.0; // z = -1.0 exactly

        let (_, contributions) = arm.probability_with_contributions(&features).unwrap();
        let hb = contributions
            .iter()
            .find(|c| c.feature == FeatureKey::Hemoglobin)
            .unwrap();
        assert!((hb.impact - 0.88).abs() < 1e-12);
        assert_eq!(hb.direction, Direction::Increase);
    }

    #[test]
    fn rationale_only_on_three_features() {
        let reference = ScoringReference::clinical();
        let arm = LinearArm::new(&reference);
        let (_, contributions) =
            arm.probability_with_contributions(&mean_features()).unwrap();

        for contribution in &contributions {
            let expect_text = matches!(
                contribution.feature,
                FeatureKey::Hemoglobin | FeatureKey::IronIntake | FeatureKey::AncVisits
            );
            assert_eq!(
                !contribution.rationale.is_empty(),
                expect_text,
                "unexpected rationale state for {}",
                contribution.feature.as_str(),
            );
        }
    }

    #[test]
    fn zero_width_normal_surfaces_numeric_domain() {
        let mut reference = ScoringReference::clinical();
        for normal in &mut reference.normals {
            if normal.feature == FeatureKey::Age {
                normal.std = 0.0;
            }
        }
        let arm = LinearArm::new(&reference);
        let mut features = mean_features();
        features.age = 30.0;

        let err = arm.probability_with_contributions(&features).unwrap_err();
        assert!(matches!(err, TriageError::NumericDomain { .. }));
    }

    // ── Rule-vote arm ──────────────────────────────────────────────────

    #[test]
    fn rule_arm_no_rules_fired() {
        let reference = ScoringReference::clinical();
        let arm = RuleVoteArm::new(&reference);

        let mut features = mean_features();
        features.previous_complications = 0.0; // quiet the only firing rule

        let probability = arm.estimate(&features).unwrap();
        assert_eq!(probability, 0.0);
    }

    #[test]
    fn rule_arm_single_rule_fraction() {
        let reference = ScoringReference::clinical();
        let arm = RuleVoteArm::new(&reference);

        // Mean features fire only the previous-complications rule (0.18 > 0.1).
        let probability = arm.estimate(&mean_features()).unwrap();
        assert!((probability - 2.5 / 11.0).abs() < 1e-12);
    }

    #[test]
    fn rule_arm_all_rules_fired_clamps_to_one() {
        let reference = ScoringReference::clinical();
        let arm = RuleVoteArm::new(&reference);

        let features = FeatureVector {
            age: 17.0,
            bmi: 30.0,
            hemoglobin: 8.0,
            bp_systolic: 150.0,
            bp_diastolic: 95.0,
            blood_sugar: 160.0,
            anc_visits: 0.0,
            iron_intake: 0.0,
            previous_complications: 2.0,
        };
        let probability = arm.estimate(&features).unwrap();
        assert_eq!(probability, 1.0);
    }

    #[test]
    fn rule_arm_bp_rule_needs_strict_excess() {
        let reference = ScoringReference::clinical();
        let arm = RuleVoteArm::new(&reference);

        let mut features = mean_features();
        features.previous_complications = 0.0;
        features.bp_systolic = 135.0;
        features.bp_diastolic = 85.0;
        assert_eq!(arm.estimate(&features).unwrap(), 0.0);

        features.bp_diastolic = 85.5;
        assert!((arm.estimate(&features).unwrap() - 1.5 / 11.0).abs() < 1e-12);
    }

    // ── Full scorer ────────────────────────────────────────────────────

    #[test]
    fn contributions_ranked_and_truncated() {
        let reference = ScoringReference::clinical();
        let features = FeatureVector {
            age: 38.0,
            bmi: 29.5,
            hemoglobin: 8.5,
            bp_systolic: 142.0,
            bp_diastolic: 92.0,
            blood_sugar: 148.0,
            anc_visits: 1.0,
            iron_intake: 0.0,
            previous_complications: 1.6,
        };

        let result = score(&features, &reference).unwrap();
        assert_eq!(result.contributions.len(), 5);
        for pair in result.contributions.windows(2) {
            assert!(pair[0].impact.abs() >= pair[1].impact.abs());
        }
    }

    #[test]
    fn ensemble_score_is_arm_average() {
        let reference = ScoringReference::clinical();
        let features = mean_features();
        let result = score(&features, &reference).unwrap();

        let expected = (result.logistic + result.rule_ensemble) / 2.0;
        assert!((result.ensemble_score - expected).abs() < 1e-12);
    }
}
