//! Maternal-health risk triage core.
//!
//! Caregivers enter a validated pregnancy record; the core returns a
//! risk probability, a low/medium/high category, an agreement-based
//! confidence, ranked explanatory factors, and a category-driven
//! care-action plan. Everything is a pure in-process computation: no
//! network, no storage, no clock reads, and bit-identical output for
//! identical input, so an offline device and a server agree on every
//! assessment. Persistence, transport and presentation belong to the
//! embedding application.

pub mod config;
pub mod models;
pub mod plan; // Care-action plan generation
pub mod triage; // Feature extraction + two-arm ensemble scoring

use tracing_subscriber::EnvFilter;

pub use models::PregnancyRecord;
pub use plan::{build_action_plan, ActionPlan};
pub use triage::{RiskEngine, RiskResult, ScoringReference, TriageError};

/// Evaluate a record with the production clinical tables.
pub fn evaluate_risk(record: &PregnancyRecord) -> Result<RiskResult, TriageError> {
    RiskEngine::default().evaluate_risk(record)
}

/// Initialize tracing with the crate's default filter, honoring
/// `RUST_LOG` when set. For host applications that have no subscriber
/// of their own; the core itself only emits events.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
