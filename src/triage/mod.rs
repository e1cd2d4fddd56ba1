//! Risk triage — feature extraction and the two-arm ensemble scorer.
//!
//! Maps a caller-validated `PregnancyRecord` into nine scalar features,
//! runs a weighted linear model and a rule-vote model over them, and
//! averages the two into an ensemble score, a low/medium/high category,
//! an agreement confidence, and ranked per-feature explanations. Pure,
//! synchronous and deterministic: identical input produces bit-identical
//! output, so an offline device and a server reach the same answer.

mod engine;
mod features;
mod reference;
mod scorer;
mod types;

pub use engine::*;
pub use features::*;
pub use reference::*;
pub use scorer::*;
pub use types::*;

// ── Tests ──────────────────────────────────────────────────────────────────
