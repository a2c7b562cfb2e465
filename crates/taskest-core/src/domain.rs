//! Domain classifier.
//!
//! Domains are checked in declaration order against the lowercased task
//! string; the first domain with any keyword hit wins. A task matching
//! several domains always lands in the one declared first, never the most
//! specific one. Unmatched tasks default to [`Domain::Frontend`].

use serde::{Deserialize, Serialize};

use crate::rules::{KeywordRule, first_match};

/// Work domain, bound to a fixed effort multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Frontend,
    Backend,
    Infra,
    RustGui,
    Security,
}

impl Domain {
    /// Effort multiplier applied to the base hours.
    pub fn multiplier(self) -> f64 {
        match self {
            Domain::Frontend => 1.0,
            Domain::Backend => 1.2,
            Domain::Infra => 1.5,
            Domain::RustGui => 1.7,
            Domain::Security => 1.8,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Frontend => "frontend",
            Domain::Backend => "backend",
            Domain::Infra => "infra",
            Domain::RustGui => "rust_gui",
            Domain::Security => "security",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

static DOMAINS: [KeywordRule<Domain>; 5] = [
    KeywordRule::new(
        Domain::Frontend,
        &["ui", "react", "vue", "next", "vite", "pwa", "css", "lighthouse"],
    ),
    KeywordRule::new(
        Domain::Backend,
        &[
            "api", "fastapi", "django", "flask", "express", "go ", "golang", "db", "database",
        ],
    ),
    KeywordRule::new(
        Domain::Infra,
        &[
            "ci",
            "cd",
            "actions",
            "docker",
            "kubernetes",
            "deploy",
            "pipeline",
            "lint",
            "test",
        ],
    ),
    KeywordRule::new(
        Domain::RustGui,
        &["rust", "tauri", "gtk", "webkitgtk", "cargo"],
    ),
    KeywordRule::new(
        Domain::Security,
        &[
            "セキュリティ",
            "security",
            "cve",
            "codeql",
            "audit",
            "oauth",
            "認証",
            "認可",
            "脆弱",
        ],
    ),
];

/// A domain with its multiplier and the keyword that selected it.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainAssessment {
    pub domain: Domain,
    pub multiplier: f64,
    /// `kw:<keyword>` or `default`.
    pub reason: String,
}

/// Classify a task string.
pub fn classify(task: &str) -> DomainAssessment {
    let lowered = task.to_lowercase();
    match first_match(&DOMAINS, &lowered) {
        Some((&domain, keyword)) => DomainAssessment {
            domain,
            multiplier: domain.multiplier(),
            reason: format!("kw:{keyword}"),
        },
        None => DomainAssessment {
            domain: Domain::Frontend,
            multiplier: Domain::Frontend.multiplier(),
            reason: "default".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_frontend() {
        let a = classify("設定を追加");
        assert_eq!(a.domain, Domain::Frontend);
        assert_eq!(a.multiplier, 1.0);
        assert_eq!(a.reason, "default");
    }

    #[test]
    fn test_backend_keyword_is_case_insensitive() {
        let a = classify("大規模なAPIの移行をWindowsとLinuxで実施");
        assert_eq!(a.domain, Domain::Backend);
        assert_eq!(a.multiplier, 1.2);
        assert_eq!(a.reason, "kw:api");
    }

    #[test]
    fn test_frontend_declared_before_security() {
        // "react" (frontend) and "oauth" (security) both present
        let a = classify("OAuth login page in React");
        assert_eq!(a.domain, Domain::Frontend);
        assert_eq!(a.reason, "kw:react");
    }

    #[test]
    fn test_security_only() {
        let a = classify("依存の脆弱性を確認");
        assert_eq!(a.domain, Domain::Security);
        assert_eq!(a.multiplier, 1.8);
        assert_eq!(a.reason, "kw:脆弱");
    }

    #[test]
    fn test_infra_and_rust_gui() {
        assert_eq!(classify("Dockerイメージ作成").domain, Domain::Infra);
        assert_eq!(classify("Tauri アプリ").domain, Domain::RustGui);
        assert_eq!(classify("Tauri アプリ").multiplier, 1.7);
    }

    #[test]
    fn test_substring_match_inside_words() {
        // "building" contains "ui"; literal substring matching, no tokenization
        let a = classify("building");
        assert_eq!(a.domain, Domain::Frontend);
        assert_eq!(a.reason, "kw:ui");
    }

    #[test]
    fn test_first_keyword_in_list_is_cited() {
        // "fastapi" contains "api", which is listed first
        assert_eq!(classify("fastapi").reason, "kw:api");
    }

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(serde_json::to_string(&Domain::RustGui).unwrap(), "\"rust_gui\"");
    }
}
