//! Care-action plans — category-driven bundles of recommended actions.
//!
//! Consumes the scorer's result and emits six fixed section lists
//! (priority actions, ANC schedule, nutrition, medications, follow-up,
//! counselling) plus an interpolated summary and a Hindi narration
//! string for audio playback. Selection keys on the risk category alone;
//! the one per-record branch is the IFA-adherence nutrition line.

mod builder;
mod templates;
mod types;

pub use builder::*;
pub use templates::*;
pub use types::*;

// ── Tests ──────────────────────────────────────────────────────────────────
