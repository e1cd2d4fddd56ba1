use crate::models::PregnancyRecord;
use crate::plan::{build_action_plan, ActionPlan};

use super::features::extract;
use super::reference::ScoringReference;
use super::scorer::score;
use super::types::{RiskResult, TriageError};

/// Orchestrates the extract → score pipeline and plan generation for the
/// calling layer. Owns the reference tables; the functions it delegates
/// to stay pure and never log.
pub struct RiskEngine {
    reference: ScoringReference,
}

impl RiskEngine {
    pub fn new(reference: ScoringReference) -> Self {
        Self { reference }
    }

    /// Evaluate a caller-validated record into a risk result.
    pub fn evaluate_risk(&self, record: &PregnancyRecord) -> Result<RiskResult, TriageError> {
        let features = extract(record)?;
        let result = score(&features, &self.reference)?;

        tracing::debug!(
            logistic = result.logistic,
            rule_ensemble = result.rule_ensemble,
            ensemble_score = result.ensemble_score,
            category = result.category.as_str(),
            confidence = result.confidence,
            "risk evaluation complete"
        );

        Ok(result)
    }

    /// Build the category-driven care plan for an evaluated record.
    pub fn build_action_plan(&self, risk: &RiskResult, record: &PregnancyRecord) -> ActionPlan {
        let plan = build_action_plan(risk, record);

        tracing::debug!(
            category = plan.risk_category.as_str(),
            priority_actions = plan.priority_actions.len(),
            "action plan built"
        );

        plan
    }
}

impl Default for RiskEngine {
    /// An engine over the production clinical tables.
    fn default() -> Self {
        Self::new(ScoringReference::clinical())
    }
}
