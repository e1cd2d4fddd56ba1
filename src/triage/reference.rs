use serde::{Deserialize, Serialize};

use super::types::{FeatureKey, FeatureVector};

/// Population prior for one feature. Hand-curated domain data, not
/// fitted from this application's own records.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FeatureNormal {
    pub feature: FeatureKey,
    pub mean: f64,
    pub std: f64,
}

/// One weighted boolean vote in the rule ensemble arm. The weight is
/// always counted toward the denominator; the numerator only when the
/// check holds.
#[derive(Debug, Clone, Copy)]
pub struct ClinicalRule {
    pub name: &'static str,
    pub weight: f64,
    pub check: fn(&FeatureVector) -> bool,
}

/// Immutable scoring constants injected into the scorer. Changing any
/// value changes clinical behavior, so the tables are data to reproduce,
/// never to re-derive.
#[derive(Debug, Clone)]
pub struct ScoringReference {
    pub normals: Vec<FeatureNormal>,
    pub weights: Vec<(FeatureKey, f64)>,
    pub intercept: f64,
    pub rules: Vec<ClinicalRule>,
}

impl ScoringReference {
    /// The production tables.
    pub fn clinical() -> Self {
        Self {
            normals: vec![
                FeatureNormal { feature: FeatureKey::Age, mean: 26.0, std: 5.3 },
                FeatureNormal { feature: FeatureKey::Bmi, mean: 22.5, std: 3.1 },
                FeatureNormal { feature: FeatureKey::Hemoglobin, mean: 11.2, std: 1.2 },
                FeatureNormal { feature: FeatureKey::BpSystolic, mean: 115.0, std: 12.0 },
                FeatureNormal { feature: FeatureKey::BpDiastolic, mean: 74.0, std: 8.0 },
                FeatureNormal { feature: FeatureKey::BloodSugar, mean: 94.0, std: 15.0 },
                FeatureNormal { feature: FeatureKey::AncVisits, mean: 3.2, std: 1.1 },
                FeatureNormal { feature: FeatureKey::IronIntake, mean: 0.6, std: 0.35 },
                FeatureNormal { feature: FeatureKey::PreviousComplications, mean: 0.18, std: 0.4 },
            ],
            weights: vec![
                (FeatureKey::Age, 0.45),
                (FeatureKey::Bmi, 0.62),
                (FeatureKey::Hemoglobin, -0.88),
                (FeatureKey::BpSystolic, 0.54),
                (FeatureKey::BpDiastolic, 0.32),
                (FeatureKey::BloodSugar, 0.41),
                (FeatureKey::AncVisits, -0.58),
                (FeatureKey::IronIntake, -0.73),
                (FeatureKey::PreviousComplications, 0.95),
            ],
            intercept: -0.35,
            rules: vec![
                ClinicalRule {
                    name: "low hemoglobin",
                    weight: 2.0,
                    check: |f| f.hemoglobin < 10.0,
                },
                ClinicalRule {
                    name: "elevated blood pressure",
                    weight: 1.5,
                    check: |f| f.bp_systolic > 135.0 || f.bp_diastolic > 85.0,
                },
                ClinicalRule {
                    name: "bmi out of range",
                    weight: 1.0,
                    check: |f| f.bmi > 28.0 || f.bmi < 18.5,
                },
                ClinicalRule {
                    name: "elevated blood sugar",
                    weight: 1.0,
                    check: |f| f.blood_sugar > 130.0,
                },
                ClinicalRule {
                    name: "poor iron adherence",
                    weight: 1.0,
                    check: |f| f.iron_intake < 0.5,
                },
                ClinicalRule {
                    name: "previous complications",
                    weight: 2.5,
                    check: |f| f.previous_complications > 0.1,
                },
                ClinicalRule {
                    name: "insufficient anc visits",
                    weight: 1.0,
                    check: |f| f.anc_visits < 2.0,
                },
                ClinicalRule {
                    name: "maternal age extreme",
                    weight: 1.0,
                    check: |f| f.age > 34.0 || f.age < 19.0,
                },
            ],
        }
    }

    /// Look up the population prior for a feature.
    pub fn normal_for(&self, key: FeatureKey) -> Option<&FeatureNormal> {
        self.normals.iter().find(|n| n.feature == key)
    }

    /// Look up the linear-arm weight for a feature.
    pub fn weight_for(&self, key: FeatureKey) -> Option<f64> {
        self.weights
            .iter()
            .find(|(feature, _)| *feature == key)
            .map(|(_, weight)| *weight)
    }

    /// Sum of all rule weights (the constant vote denominator).
    pub fn rule_weight_total(&self) -> f64 {
        self.rules.iter().map(|r| r.weight).sum()
    }
}
