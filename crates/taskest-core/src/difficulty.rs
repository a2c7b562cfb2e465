//! Difficulty classifier.
//!
//! Three keyword tiers are checked in fixed priority order (hard, medium,
//! easy). The first tier with a hit decides. When no tier matches, long
//! task strings default to medium and short ones to easy.
//!
//! Keywords mix scripts, so matching runs against the original string and
//! is case-sensitive.

use serde::{Deserialize, Serialize};

use crate::rules::{KeywordRule, first_match};

/// Ordinal difficulty level, bound to a fixed base-hour constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Base effort in hours before any multiplier.
    pub fn base_hours(self) -> f64 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 3.0,
            Difficulty::Hard => 8.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task strings longer than this many characters fall back to medium.
pub const LENGTH_THRESHOLD: usize = 40;

/// Keyword tiers in priority order. The outcome carries the reason code.
static TIERS: [KeywordRule<(Difficulty, &str)>; 3] = [
    KeywordRule::new(
        (Difficulty::Hard, "hard:keywords"),
        &[
            "大規模",
            "移行",
            "破壊的",
            "migration",
            "major",
            "complex",
            "根本",
            "全面",
            "from scratch",
        ],
    ),
    KeywordRule::new(
        (Difficulty::Medium, "medium:keywords"),
        &[
            "設計",
            "integration",
            "統合",
            "リファクタ",
            "refactor",
            "テスト",
            "組み込み",
            "埋め込み",
            "調整",
        ],
    ),
    KeywordRule::new(
        (Difficulty::Easy, "easy:keywords"),
        &[
            "導入",
            "設定",
            "追加",
            "文書",
            "ドキュメント",
            "バッジ",
            "軽微",
            "修正",
            "config",
            "install",
            "setup",
        ],
    ),
];

/// A difficulty together with the reason code that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyAssessment {
    pub difficulty: Difficulty,
    /// One of `hard:keywords`, `medium:keywords`, `easy:keywords`,
    /// `length>40`, or `default`.
    pub reason: &'static str,
}

/// Classify a task string.
pub fn classify(task: &str) -> DifficultyAssessment {
    if let Some((&(difficulty, reason), _)) = first_match(&TIERS, task) {
        return DifficultyAssessment { difficulty, reason };
    }

    if task.chars().count() > LENGTH_THRESHOLD {
        DifficultyAssessment {
            difficulty: Difficulty::Medium,
            reason: "length>40",
        }
    } else {
        DifficultyAssessment {
            difficulty: Difficulty::Easy,
            reason: "default",
        }
    }
}
