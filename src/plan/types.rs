use serde::{Deserialize, Serialize};

use crate::models::enums::RiskCategory;

/// A category-driven bundle of care actions for one evaluated record.
/// Fully determined by the risk category plus the raw hemoglobin,
/// blood-pressure and IFA-adherence fields used for templating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionPlan {
    pub risk_category: RiskCategory,
    pub summary: String,
    pub priority_actions: Vec<String>,
    pub anc_schedule: Vec<String>,
    pub nutrition: Vec<String>,
    pub medications: Vec<String>,
    pub follow_up: Vec<String>,
    pub counselling: Vec<String>,
    /// Hindi narration for audio playback.
    pub tts: String,
}
