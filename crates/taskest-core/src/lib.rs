#![deny(unsafe_code)]

//! taskest core estimation engine.
//!
//! Turns a free-form, mixed-language description of engineering work into a
//! structured effort estimate. The pipeline is strictly leaf-first:
//!
//! ```text
//! raw text → segment → per task [difficulty, domain, modifiers, qa?] → estimate → report
//! ```
//!
//! Every classifier is a pure function of the task string. All keyword tables
//! are process-wide constants; nothing here performs I/O.

/// Difficulty tiers and the difficulty classifier.
pub mod difficulty;
/// Domain tags, effort multipliers, and the domain classifier.
pub mod domain;
/// Estimation orchestrator: profiles, buffers, per-task items, and totals.
pub mod estimate;
/// Secondary multiplicative modifiers (first-time work, platform scope).
pub mod modifiers;
/// QA activity detection and test-case estimation.
pub mod qa;
/// Human-readable Markdown report renderer.
pub mod report;
/// Ordered first-match keyword dispatch shared by the classifiers.
pub mod rules;
/// Splitting raw input into task strings.
pub mod segment;

pub use difficulty::{Difficulty, DifficultyAssessment};
pub use domain::{Domain, DomainAssessment};
pub use estimate::{
    BufferConfig, EstimateItem, EstimateOptions, EstimationResult, Profile, Totals, estimate,
};
pub use modifiers::ModifierSet;
pub use qa::{QaCategory, QaModifiers, QaRecord};
pub use report::render_markdown;
pub use segment::split_tasks;
