use crate::models::enums::IronFolicIntake;
use crate::models::{ObstetricHistory, PregnancyRecord};

use super::types::{FeatureVector, TriageError};

/// Map IFA adherence onto the scalar both models consume.
fn iron_intake_score(intake: &IronFolicIntake) -> f64 {
    match intake {
        IronFolicIntake::Regular => 1.0,
        IronFolicIntake::Irregular => 0.5,
        IronFolicIntake::NotStarted => 0.0,
    }
}

/// Composite severity proxy for obstetric history. Any free-text
/// complication adds 1.0; the C-section term adds 1.0 when present and
/// 0.6 otherwise. Not a probability.
fn complication_score(obstetric: &ObstetricHistory) -> f64 {
    let complications_penalty = match &obstetric.previous_complications {
        Some(text) if !text.is_empty() => 1.0,
        _ => 0.0,
    };
    let c_section_penalty = if obstetric.previous_c_section { 1.0 } else { 0.6 };
    complications_penalty + c_section_penalty
}

/// Map a caller-validated record into the nine-feature vector. Pure and
/// total on validated input; a non-finite numeric is surfaced as
/// `MalformedInput` rather than silently defaulted.
pub fn extract(record: &PregnancyRecord) -> Result<FeatureVector, TriageError> {
    let features = FeatureVector {
        age: record.personal.age,
        bmi: record.health.bmi,
        hemoglobin: record.health.hemoglobin,
        bp_systolic: record.health.bp_systolic,
        bp_diastolic: record.health.bp_diastolic,
        blood_sugar: record.health.blood_sugar,
        anc_visits: record.current.anc_visits,
        iron_intake: iron_intake_score(&record.current.iron_folic_intake),
        previous_complications: complication_score(&record.obstetric),
    };

    for (key, value) in features.entries() {
        if !value.is_finite() {
            return Err(TriageError::MalformedInput {
                field: key.as_str().into(),
                reason: format!("non-finite value {value}"),
            });
        }
    }

    Ok(features)
}
