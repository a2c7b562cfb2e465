//! Secondary multiplicative modifiers.

use serde::{Deserialize, Serialize};

use crate::rules::contains_any;

/// Tokens indicating work never done before on this project.
/// Matched against the original string.
const FIRST_TIME_HINTS: &[&str] = &["初導入", "first", "初回", "はじめて", "未導入"];

/// Platform names, matched against the lowercased string.
const PLATFORMS: &[&str] = &["windows", "linux", "macos", "android", "ios"];

const FIRST_TIME_FACTOR: f64 = 1.2;
const PER_EXTRA_PLATFORM: f64 = 0.1;

/// Per-task modifier factors, each ≥ 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModifierSet {
    /// 1.2 for first-time work, otherwise 1.0.
    pub first_time: f64,
    /// 1.0 plus 0.1 for every platform beyond the first.
    pub platforms: f64,
}

impl ModifierSet {
    /// Compute both modifiers for a task string.
    pub fn for_task(task: &str) -> Self {
        Self {
            first_time: first_time(task),
            platforms: platforms(task),
        }
    }

    /// Combined factor.
    pub fn product(&self) -> f64 {
        self.first_time * self.platforms
    }
}

/// First-time-work factor.
pub fn first_time(task: &str) -> f64 {
    if contains_any(FIRST_TIME_HINTS, task) {
        FIRST_TIME_FACTOR
    } else {
        1.0
    }
}

/// Multi-platform factor. A single platform carries no premium.
pub fn platforms(task: &str) -> f64 {
    let lowered = task.to_lowercase();
    let hits = PLATFORMS.iter().filter(|p| lowered.contains(*p)).count();
    1.0 + PER_EXTRA_PLATFORM * hits.saturating_sub(1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_first_time() {
        assert_eq!(first_time("CodeQLを初導入"), 1.2);
        assert_eq!(first_time("first release"), 1.2);
        assert_eq!(first_time("lintを追加"), 1.0);
        // Case-sensitive
        assert_eq!(first_time("First release"), 1.0);
    }

    #[test]
    fn test_platform_counts() {
        assert_eq!(platforms("no platform"), 1.0);
        assert_eq!(platforms("Windows only"), 1.0);
        assert!(approx(platforms("WindowsとLinuxで実施"), 1.1));
        assert!(approx(platforms("windows, linux, macos, android"), 1.3));
    }

    #[test]
    fn test_platform_substring_overlap() {
        // "ios" is not inside any of the other names, but does hit inside words
        assert_eq!(platforms("studios"), 1.0);
        assert!(approx(platforms("macos studios"), 1.1));
    }

    #[test]
    fn test_repeated_platform_counts_once() {
        assert_eq!(platforms("linux linux linux"), 1.0);
    }

    #[test]
    fn test_product() {
        let m = ModifierSet::for_task("初回 windows linux");
        assert_eq!(m.first_time, 1.2);
        assert!(approx(m.platforms, 1.1));
        assert!(approx(m.product(), 1.32));
    }
}
