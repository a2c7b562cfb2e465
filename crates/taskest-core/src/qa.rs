//! QA detector.
//!
//! Recognizes a testing activity embedded in a task string, picks a QA
//! category, and estimates the number of test cases and their duration.
//!
//! Categories are checked in declaration order against the lowercased task
//! (unit, integration, performance, security, accessibility, Lighthouse).
//! Secondary flags (flaky tests, test data, environment setup) are recorded
//! on the [`QaRecord`] for reporting only and never enter the hour math.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::rules::{KeywordRule, contains_any, first_match};

/// Detected QA activity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QaCategory {
    #[serde(rename = "qa_unit")]
    Unit,
    #[serde(rename = "qa_integration")]
    Integration,
    #[serde(rename = "qa_perf")]
    Perf,
    #[serde(rename = "qa_security")]
    Security,
    #[serde(rename = "qa_a11y")]
    A11y,
    #[serde(rename = "qa_lighthouse")]
    Lighthouse,
}

impl QaCategory {
    /// Minutes of effort per test case.
    pub fn case_minutes(self) -> u32 {
        match self {
            QaCategory::Unit => 15,
            QaCategory::Integration => 30,
            QaCategory::Perf => 45,
            QaCategory::Security => 45,
            QaCategory::A11y => 20,
            QaCategory::Lighthouse => 10,
        }
    }

    /// Starting point for the case-count estimate.
    pub fn base_cases(self) -> u32 {
        match self {
            QaCategory::Unit => 6,
            QaCategory::Integration => 4,
            QaCategory::Perf => 2,
            QaCategory::Security => 2,
            QaCategory::A11y => 3,
            QaCategory::Lighthouse => 1,
        }
    }

    /// Deliverables recommended for this kind of QA work.
    pub fn artifacts(self) -> &'static [&'static str] {
        match self {
            QaCategory::Unit => &["テスト設計(単体)", "モック/スタブ", "テストデータ", "カバレッジ閾値"],
            QaCategory::Integration => &[
                "E2E設計",
                "環境/認証シナリオ",
                "データ準備",
                "安定化(待機/リトライ)",
            ],
            QaCategory::Perf => &["シナリオ設計", "目標SLO", "基準線計測", "結果レポート"],
            QaCategory::Security => &["ルール/プロファイル", "例外管理", "レポート", "修正方針"],
            QaCategory::A11y => &["判定基準(WCAG)", "自動/手動併用", "対象画面一覧"],
            QaCategory::Lighthouse => &["LHCI設定", "閾値/バジェット", "レポ保存"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QaCategory::Unit => "qa_unit",
            QaCategory::Integration => "qa_integration",
            QaCategory::Perf => "qa_perf",
            QaCategory::Security => "qa_security",
            QaCategory::A11y => "qa_a11y",
            QaCategory::Lighthouse => "qa_lighthouse",
        }
    }
}

impl std::fmt::Display for QaCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

static CATEGORIES: [KeywordRule<QaCategory>; 6] = [
    KeywordRule::new(
        QaCategory::Unit,
        &[
            "unit", "単体", "pytest", "unittest", "jest", "mocha", "assert", "mock", "stub",
            "fixture",
        ],
    ),
    KeywordRule::new(
        QaCategory::Integration,
        &[
            "integration",
            "統合",
            "e2e",
            "playwright",
            "selenium",
            "cypress",
            "browser",
            "クロスブラウザ",
        ],
    ),
    KeywordRule::new(
        QaCategory::Perf,
        &["k6", "locust", "load", "性能", "スループット", "レイテンシ", "負荷"],
    ),
    KeywordRule::new(
        QaCategory::Security,
        &["codeql", "owasp", "zap", "sast", "dast", "脆弱", "依存監査", "audit"],
    ),
    KeywordRule::new(
        QaCategory::A11y,
        &["アクセシビリティ", "a11y", "axe", "pa11y", "screen reader", "wcag"],
    ),
    KeywordRule::new(
        QaCategory::Lighthouse,
        &["lighthouse", "lhci", "performance", "pwa", "seo", "best practices"],
    ),
];

/// Boundary / exception-condition keywords, matched against the original string.
const BOUNDARY_HINTS: &[&str] = &["境界", "edge", "異常", "例外"];
const BOUNDARY_EXTRA_CASES: u32 = 2;

/// Task strings longer than this many characters get one extra case.
const LONG_TASK_CHARS: usize = 60;

const FLAKY_HINTS: &[&str] = &["flaky", "不安定", "断続的", "sporadic", "タイミング", "待機", "race"];
const TEST_DATA_HINTS: &[&str] = &["テストデータ", "seed", "fixture", "サンプルデータ", "ダミー"];
const ENV_SETUP_HINTS: &[&str] = &["環境構築", "test env", "sandbox", "container", "docker compose"];

/// Informational multipliers attached to a QA record.
///
/// Only flags that fired are present; absent flags are omitted from
/// serialized output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QaModifiers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flaky: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_data: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env_setup: Option<f64>,
}

impl QaModifiers {
    pub fn for_task(task: &str) -> Self {
        let lowered = task.to_lowercase();
        let flag = |hints: &[&str], factor: f64| contains_any(hints, &lowered).then_some(factor);
        Self {
            flaky: flag(FLAKY_HINTS, 1.2),
            test_data: flag(TEST_DATA_HINTS, 1.1),
            env_setup: flag(ENV_SETUP_HINTS, 1.15),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.flaky.is_none() && self.test_data.is_none() && self.env_setup.is_none()
    }
}

/// Detect the QA category of a task, if any.
pub fn detect(task: &str) -> Option<QaCategory> {
    let lowered = task.to_lowercase();
    first_match(&CATEGORIES, &lowered).map(|(&category, keyword)| {
        trace!(%category, keyword, "QA category detected");
        category
    })
}

/// Estimate the number of test cases for `task` in `category`.
pub fn case_estimate(category: QaCategory, task: &str) -> u32 {
    let mut cases = category.base_cases();
    if contains_any(BOUNDARY_HINTS, task) {
        cases += BOUNDARY_EXTRA_CASES;
    }
    if task.chars().count() > LONG_TASK_CHARS {
        cases += 1;
    }
    // Unsigned: the estimate can never go negative.
    cases
}

/// QA assessment attached to an estimate item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaRecord {
    #[serde(rename = "type")]
    pub category: QaCategory,
    pub artifacts: Vec<String>,
    pub case_minutes: u32,
    pub modifiers: QaModifiers,
    pub cases_estimate: u32,
    /// Case hours after the profile multiplier, before any buffer, rounded
    /// to two decimals.
    pub case_hours: f64,
}

impl QaRecord {
    /// Build a QA record for `task`, or `None` if no QA activity is detected.
    ///
    /// Returns the record together with the unrounded, profile-scaled case
    /// hours used for aggregation.
    pub fn assess(task: &str, profile_multiplier: f64) -> Option<(Self, f64)> {
        let category = detect(task)?;
        let cases = case_estimate(category, task);
        let raw_hours = f64::from(cases) * (f64::from(category.case_minutes()) / 60.0);
        let scaled = raw_hours * profile_multiplier;

        let record = Self {
            category,
            artifacts: category.artifacts().iter().map(|a| a.to_string()).collect(),
            case_minutes: category.case_minutes(),
            modifiers: QaModifiers::for_task(task),
            cases_estimate: cases,
            case_hours: round2(scaled),
        };
        Some((record, scaled))
    }
}

/// Round to two decimal places, sending exact ties to the even digit.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
