//! Estimation orchestrator.
//!
//! Runs every classifier over each task string, turns the judgments into
//! hours, and aggregates them under a buffer policy.
//!
//! ## Buffer rules
//!
//! - Per item, `shown_hours` is core hours plus (QA hours when QA is included
//!   in the total). With per-task buffering on, that sum is multiplied by the
//!   **core** buffer, QA part included.
//! - Totals always apply the core buffer to the summed core hours and the QA
//!   buffer to the summed QA hours, once, regardless of per-task buffering.
//!
//! The two are computed independently: summing buffered `shown_hours` does
//! not in general reproduce the grand total.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::difficulty::{self, Difficulty};
use crate::domain::{self, Domain};
use crate::modifiers::ModifierSet;
use crate::qa::{QaRecord, round2};
use crate::segment::split_tasks;

/// Global scaling preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    General,
    Conservative,
    Fast,
}

impl Profile {
    pub const NAMES: [&'static str; 3] = ["general", "conservative", "fast"];

    pub fn multiplier(self) -> f64 {
        match self {
            Profile::General => 1.0,
            Profile::Conservative => 1.3,
            Profile::Fast => 0.7,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Profile::General => "general",
            Profile::Conservative => "conservative",
            Profile::Fast => "fast",
        }
    }

    /// Look up a profile by name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "general" => Some(Profile::General),
            "conservative" => Some(Profile::Conservative),
            "fast" => Some(Profile::Fast),
            _ => None,
        }
    }

    /// Look up a profile by name, falling back to the neutral
    /// [`Profile::General`] (multiplier 1.0) for unknown names.
    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            warn!(profile = name, "Unknown profile, using neutral multiplier 1.0");
            Profile::General
        })
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved buffer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BufferConfig {
    /// Safety factor for core work.
    pub core_buffer: f64,
    /// Safety factor for QA work at the total level.
    pub qa_buffer: f64,
    /// Also apply the core buffer to each item's shown hours.
    pub buffer_per_task: bool,
}

impl BufferConfig {
    /// Resolve a buffer configuration; `qa_buffer` defaults to `core_buffer`.
    pub fn new(core_buffer: f64, qa_buffer: Option<f64>, buffer_per_task: bool) -> Self {
        Self {
            core_buffer,
            qa_buffer: qa_buffer.unwrap_or(core_buffer),
            buffer_per_task,
        }
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self::new(1.0, None, false)
    }
}

/// Per-run configuration for [`estimate`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EstimateOptions {
    pub profile: Profile,
    /// Run QA detection on every task.
    pub with_qa: bool,
    /// Add QA hours to shown hours and the grand total.
    pub qa_include: bool,
    pub buffers: BufferConfig,
}

impl EstimateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_qa(mut self, with_qa: bool) -> Self {
        self.with_qa = with_qa;
        self
    }

    pub fn qa_include(mut self, qa_include: bool) -> Self {
        self.qa_include = qa_include;
        self
    }

    pub fn buffers(mut self, buffers: BufferConfig) -> Self {
        self.buffers = buffers;
        self
    }
}

/// Estimate for a single task string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateItem {
    pub task: String,
    pub difficulty: Difficulty,
    pub difficulty_reason: String,
    pub domain: Domain,
    pub domain_reason: String,
    pub base_hours: f64,
    /// Domain multiplier.
    pub multiplier: f64,
    pub modifiers: ModifierSet,
    /// After profile, before buffer.
    pub core_hours: f64,
    /// After profile, before buffer. Zero when no QA record.
    pub qa_hours: f64,
    /// Display value; buffered only with per-task buffering.
    pub shown_hours: f64,
    pub qa: Option<QaRecord>,
}

/// Aggregate hours, buffered once and rounded to two decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub core_hours: f64,
    pub qa_hours: f64,
    pub grand_total_hours: f64,
}

impl Totals {
    /// Sum `(core, qa)` hour pairs and apply each buffer exactly once.
    ///
    /// The grand total only includes QA hours when `include_qa` is set.
    pub fn aggregate<I>(hours: I, buffers: &BufferConfig, include_qa: bool) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (core_sum, qa_sum) = hours
            .into_iter()
            .fold((0.0, 0.0), |(c, q), (core, qa)| (c + core, q + qa));

        let core_total = core_sum * buffers.core_buffer;
        let qa_total = qa_sum * buffers.qa_buffer;
        let grand = if include_qa {
            core_total + qa_total
        } else {
            core_total
        };

        Self {
            core_hours: round2(core_total),
            qa_hours: round2(qa_total),
            grand_total_hours: round2(grand),
        }
    }
}

/// Whole-input estimation output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimationResult {
    pub input: String,
    pub profile: Profile,
    pub with_qa: bool,
    pub qa_included_in_total: bool,
    pub buffers: BufferConfig,
    pub items: Vec<EstimateItem>,
    pub totals: Totals,
}

impl EstimationResult {
    /// Pretty-printed JSON. Non-ASCII text is emitted verbatim.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Estimate every task in `text`.
///
/// Never fails: empty or unrecognisable input yields an empty item list and
/// zero totals.
pub fn estimate(text: &str, options: &EstimateOptions) -> EstimationResult {
    let items: Vec<EstimateItem> = split_tasks(text)
        .into_iter()
        .map(|task| estimate_task(task, options))
        .collect();

    // Totals are built from the rounded per-item values.
    let totals = Totals::aggregate(
        items.iter().map(|item| (item.core_hours, item.qa_hours)),
        &options.buffers,
        options.qa_include,
    );

    debug!(
        tasks = items.len(),
        profile = %options.profile,
        core_hours = totals.core_hours,
        qa_hours = totals.qa_hours,
        grand_total_hours = totals.grand_total_hours,
        "Estimate complete"
    );

    EstimationResult {
        input: text.to_string(),
        profile: options.profile,
        with_qa: options.with_qa,
        qa_included_in_total: options.qa_include,
        buffers: options.buffers,
        items,
        totals,
    }
}

fn estimate_task(task: String, options: &EstimateOptions) -> EstimateItem {
    let profile_multiplier = options.profile.multiplier();

    let difficulty = difficulty::classify(&task);
    let domain = domain::classify(&task);
    let modifiers = ModifierSet::for_task(&task);

    let base_hours = difficulty.difficulty.base_hours();
    let core = base_hours * domain.multiplier * modifiers.product() * profile_multiplier;

    let (qa, qa_hours) = if options.with_qa {
        match QaRecord::assess(&task, profile_multiplier) {
            Some((record, hours)) => (Some(record), hours),
            None => (None, 0.0),
        }
    } else {
        (None, 0.0)
    };

    let mut shown = core + if options.qa_include { qa_hours } else { 0.0 };
    if options.buffers.buffer_per_task {
        // Core buffer covers the QA share too at the item level.
        shown *= options.buffers.core_buffer;
    }

    debug!(
        task = %task,
        difficulty = %difficulty.difficulty,
        difficulty_reason = difficulty.reason,
        domain = %domain.domain,
        domain_reason = %domain.reason,
        core_hours = core,
        qa = qa.as_ref().map(|r| r.category.as_str()),
        "Classified task"
    );

    EstimateItem {
        task,
        difficulty: difficulty.difficulty,
        difficulty_reason: difficulty.reason.to_string(),
        domain: domain.domain,
        domain_reason: domain.reason,
        base_hours,
        multiplier: domain.multiplier,
        modifiers,
        core_hours: round2(core),
        qa_hours: round2(qa_hours),
        shown_hours: round2(shown),
        qa,
    }
}
