//! Ordered keyword dispatch.
//!
//! A rule set is a slice of [`KeywordRule`]s, each pairing an outcome with a
//! list of literal keywords. [`first_match`] walks the slice in declaration
//! order and returns the outcome of the first rule whose keywords hit. There
//! is no scoring and no sorting: position in the slice is the priority.
//!
//! Matching is plain substring containment. Callers decide whether to pass
//! the original task string or a lowercased copy.

/// A single `(keywords, outcome)` pair.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<T> {
    /// Value returned when this rule fires.
    pub outcome: T,
    /// Literal keywords; any one contained in the text fires the rule.
    pub keywords: &'static [&'static str],
}

impl<T> KeywordRule<T> {
    /// Create a rule.
    pub const fn new(outcome: T, keywords: &'static [&'static str]) -> Self {
        Self { outcome, keywords }
    }

    /// Return the first keyword (in list order) contained in `text`.
    pub fn first_hit(&self, text: &str) -> Option<&'static str> {
        self.keywords.iter().copied().find(|kw| text.contains(kw))
    }
}

/// Evaluate `rules` in order against `text`.
///
/// Returns the outcome of the first rule with any keyword hit together with
/// the keyword that fired, or `None` if nothing matched.
pub fn first_match<'r, T>(rules: &'r [KeywordRule<T>], text: &str) -> Option<(&'r T, &'static str)> {
    rules
        .iter()
        .find_map(|rule| rule.first_hit(text).map(|kw| (&rule.outcome, kw)))
}

/// Whether `text` contains any of `keywords`.
pub fn contains_any(keywords: &[&str], text: &str) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: [KeywordRule<&str>; 3] = [
        KeywordRule::new("first", &["alpha", "beta"]),
        KeywordRule::new("second", &["beta", "gamma"]),
        KeywordRule::new("third", &["delta"]),
    ];

    #[test]
    fn test_first_rule_wins_on_overlap() {
        // "beta" is in both the first and second rule
        assert_eq!(first_match(&RULES, "beta release"), Some((&"first", "beta")));
    }

    #[test]
    fn test_later_rule_fires_when_earlier_miss() {
        assert_eq!(first_match(&RULES, "gamma ray"), Some((&"second", "gamma")));
        assert_eq!(first_match(&RULES, "delta"), Some((&"third", "delta")));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(first_match(&RULES, "epsilon"), None);
        assert_eq!(first_match::<&str>(&[], "alpha"), None);
    }

    #[test]
    fn test_first_hit_respects_keyword_order() {
        // Both keywords present; the one listed first is cited
        let rule = KeywordRule::new((), &["beta", "alpha"]);
        assert_eq!(rule.first_hit("alpha and beta"), Some("beta"));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(first_match(&RULES, "ALPHA"), None);
    }

    #[test]
    fn test_contains_any() {
        assert!(contains_any(&["境界", "edge"], "境界値を確認"));
        assert!(!contains_any(&["境界", "edge"], "nothing here"));
        assert!(!contains_any(&[], "anything"));
    }
}
