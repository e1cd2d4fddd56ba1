use crate::models::enums::RiskCategory;
use crate::models::PregnancyRecord;
use crate::triage::RiskResult;

use super::templates::PlanTemplates;
use super::types::ActionPlan;

/// Ensemble score as a whole percentage for the summary line.
fn format_score(score: f64) -> i64 {
    (score * 100.0).round() as i64
}

/// Assemble the care plan for an evaluated record. Template selection
/// keys solely on the risk category; the score and vitals only appear
/// interpolated into the summary.
pub fn build_action_plan(risk: &RiskResult, record: &PregnancyRecord) -> ActionPlan {
    let summary = PlanTemplates::summary(
        format_score(risk.ensemble_score),
        &risk.category.as_str().to_uppercase(),
        record.health.hemoglobin,
        record.health.bp_systolic,
        record.health.bp_diastolic,
    );
    let nutrition = PlanTemplates::nutrition(&record.current.iron_folic_intake);
    let medications = PlanTemplates::base_medications();
    let follow_up = PlanTemplates::base_follow_up();

    match risk.category {
        RiskCategory::High => ActionPlan {
            risk_category: RiskCategory::High,
            summary,
            priority_actions: PlanTemplates::high_priority_actions(),
            anc_schedule: PlanTemplates::high_anc_schedule(),
            nutrition,
            medications: medications
                .into_iter()
                .chain([PlanTemplates::high_extra_medication()])
                .collect(),
            follow_up: follow_up
                .into_iter()
                .chain(PlanTemplates::high_extra_follow_up())
                .collect(),
            counselling: PlanTemplates::high_counselling(),
            tts: PlanTemplates::high_tts(),
        },
        RiskCategory::Medium => ActionPlan {
            risk_category: RiskCategory::Medium,
            summary,
            priority_actions: PlanTemplates::medium_priority_actions(),
            anc_schedule: PlanTemplates::medium_anc_schedule(),
            nutrition,
            medications,
            follow_up: follow_up
                .into_iter()
                .chain(PlanTemplates::medium_extra_follow_up())
                .collect(),
            counselling: PlanTemplates::medium_counselling(),
            tts: PlanTemplates::medium_tts(),
        },
        RiskCategory::Low => ActionPlan {
            risk_category: RiskCategory::Low,
            summary,
            priority_actions: PlanTemplates::low_priority_actions(),
            anc_schedule: PlanTemplates::low_anc_schedule(),
            nutrition,
            medications,
            follow_up,
            counselling: PlanTemplates::low_counselling(),
            tts: PlanTemplates::low_tts(),
        },
    }
}
