use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::enums::{Direction, RiskCategory};

// ---------------------------------------------------------------------------
// FeatureKey
// ---------------------------------------------------------------------------

/// Names one of the nine scalar slots of the feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKey {
    Age,
    Bmi,
    Hemoglobin,
    BpSystolic,
    BpDiastolic,
    BloodSugar,
    AncVisits,
    IronIntake,
    PreviousComplications,
}

impl FeatureKey {
    /// Fixed evaluation order. Contribution ties keep this order, which
    /// keeps repeated evaluations bit-identical.
    pub const ALL: [FeatureKey; 9] = [
        FeatureKey::Age,
        FeatureKey::Bmi,
        FeatureKey::Hemoglobin,
        FeatureKey::BpSystolic,
        FeatureKey::BpDiastolic,
        FeatureKey::BloodSugar,
        FeatureKey::AncVisits,
        FeatureKey::IronIntake,
        FeatureKey::PreviousComplications,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FeatureKey::Age => "age",
            FeatureKey::Bmi => "bmi",
            FeatureKey::Hemoglobin => "hemoglobin",
            FeatureKey::BpSystolic => "bp_systolic",
            FeatureKey::BpDiastolic => "bp_diastolic",
            FeatureKey::BloodSugar => "blood_sugar",
            FeatureKey::AncVisits => "anc_visits",
            FeatureKey::IronIntake => "iron_intake",
            FeatureKey::PreviousComplications => "previous_complications",
        }
    }

    /// Caregiver-facing label used in contribution explanations.
    pub fn label(self) -> &'static str {
        match self {
            FeatureKey::Age => "Maternal age",
            FeatureKey::Bmi => "Body mass index",
            FeatureKey::Hemoglobin => "Hemoglobin",
            FeatureKey::BpSystolic => "Systolic BP",
            FeatureKey::BpDiastolic => "Diastolic BP",
            FeatureKey::BloodSugar => "Blood sugar",
            FeatureKey::AncVisits => "ANC visits",
            FeatureKey::IronIntake => "Iron & folic intake",
            FeatureKey::PreviousComplications => "Previous complications",
        }
    }
}

// ---------------------------------------------------------------------------
// FeatureVector
// ---------------------------------------------------------------------------

/// The nine scalar features both estimator arms consume. Constructed by
/// the extractor and consumed within a single evaluation; it has no
/// independent lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub age: f64,
    pub bmi: f64,
    pub hemoglobin: f64,
    pub bp_systolic: f64,
    pub bp_diastolic: f64,
    pub blood_sugar: f64,
    pub anc_visits: f64,
    /// 0, 0.5 or 1, derived from IFA adherence.
    pub iron_intake: f64,
    /// Composite severity proxy for obstetric history, not a probability.
    pub previous_complications: f64,
}

impl FeatureVector {
    pub fn get(&self, key: FeatureKey) -> f64 {
        match key {
            FeatureKey::Age => self.age,
            FeatureKey::Bmi => self.bmi,
            FeatureKey::Hemoglobin => self.hemoglobin,
            FeatureKey::BpSystolic => self.bp_systolic,
            FeatureKey::BpDiastolic => self.bp_diastolic,
            FeatureKey::BloodSugar => self.blood_sugar,
            FeatureKey::AncVisits => self.anc_visits,
            FeatureKey::IronIntake => self.iron_intake,
            FeatureKey::PreviousComplications => self.previous_complications,
        }
    }

    /// Ordered (key, value) pairs in the fixed evaluation order.
    pub fn entries(&self) -> impl Iterator<Item = (FeatureKey, f64)> + '_ {
        FeatureKey::ALL.iter().map(move |&key| (key, self.get(key)))
    }
}

// ---------------------------------------------------------------------------
// Contribution & RiskResult
// ---------------------------------------------------------------------------

/// A single feature's signed influence on the linear arm's score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub feature: FeatureKey,
    pub label: String,
    pub impact: f64,
    pub direction: Direction,
    /// Empty for most features; only hemoglobin, iron intake and ANC
    /// visits carry explanation text.
    pub rationale: String,
}

/// The scorer's full output for one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    /// Probability from the weighted linear arm.
    pub logistic: f64,
    /// Probability from the rule-vote arm.
    pub rule_ensemble: f64,
    /// Average of the two arms, clamped to [0, 1].
    pub ensemble_score: f64,
    pub category: RiskCategory,
    /// Cross-model agreement in [0.30, 0.95], not calibrated certainty.
    pub confidence: f64,
    /// At most 5 entries, sorted by descending absolute impact.
    pub contributions: Vec<Contribution>,
}

// ---------------------------------------------------------------------------
// TriageError
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum TriageError {
    /// A field is unusable despite caller-side validation (defensive).
    #[error("Malformed input in {field}: {reason}")]
    MalformedInput { field: String, reason: String },

    /// A computed intermediate is NaN or infinite. The clinical constants
    /// cannot produce this, but the tables are data, not proven invariants.
    #[error("Non-finite value while computing {context}: {value}")]
    NumericDomain { context: String, value: f64 },
}

// ---------------------------------------------------------------------------
// RiskEstimator trait
// ---------------------------------------------------------------------------

/// One arm of the ensemble: a feature vector in, a probability out.
/// Lets the combination logic be exercised against mock arms.
pub trait RiskEstimator {
    fn estimate(&self, features: &FeatureVector) -> Result<f64, TriageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_order_is_stable() {
        let keys: Vec<&str> = FeatureKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "age",
                "bmi",
                "hemoglobin",
                "bp_systolic",
                "bp_diastolic",
                "blood_sugar",
                "anc_visits",
                "iron_intake",
                "previous_complications",
            ],
        );
    }

    #[test]
    fn entries_match_field_access() {
        let features = FeatureVector {
            age: 26.0,
            bmi: 22.5,
            hemoglobin: 11.2,
            bp_systolic: 115.0,
            bp_diastolic: 74.0,
            blood_sugar: 94.0,
            anc_visits: 3.2,
            iron_intake: 0.6,
            previous_complications: 0.18,
        };
        for (key, value) in features.entries() {
            assert_eq!(value, features.get(key));
        }
        assert_eq!(features.entries().count(), 9);
    }

    #[test]
    fn feature_key_serialization_round_trip() {
        for key in FeatureKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            let back: FeatureKey = serde_json::from_str(&json).unwrap();
            assert_eq!(back, key);
        }
    }

    #[test]
    fn every_feature_has_a_label() {
        for key in FeatureKey::ALL {
            assert!(!key.label().is_empty());
        }
    }
}
