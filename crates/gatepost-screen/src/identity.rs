use std::fmt;

use gatepost_core::models::{Finding, IdentityField, IdentityRecord};

/// Matcher for one protected individual's identifying facts.
///
/// Built once from an `IdentityRecord` at engine construction and immutable
/// afterwards. Holds normalized (lowercased, trimmed) copies in process
/// memory only; everything is dropped with the engine.
#[derive(Clone)]
pub struct IdentityMatcher {
    /// Lowercased full name.
    name: Option<String>,
    /// Individual name tokens, populated only when token matching is enabled.
    name_tokens: Vec<String>,
    /// Lowercased handle with any leading `@` or `u/` decoration stripped.
    handle: Option<String>,
    location: Option<String>,
    employer: Option<String>,
}

impl IdentityMatcher {
    pub fn new(record: &IdentityRecord, match_name_tokens: bool) -> Self {
        let name = normalize(&record.name);
        // Tokens are compared against alphanumeric-split words, so they must
        // be stripped of punctuation themselves ("Q." from "Jane Q. Doe").
        let name_tokens = if match_name_tokens {
            name.as_deref()
                .map(|n| {
                    n.split(|c: char| !c.is_alphanumeric())
                        .filter(|t| !t.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default()
        } else {
            Vec::new()
        };
        let handle = normalize(&record.handle).map(|h| {
            h.trim_start_matches('@')
                .trim_start_matches("u/")
                .to_string()
        });

        Self {
            name,
            name_tokens,
            handle: handle.filter(|h| !h.is_empty()),
            location: normalize(&record.location),
            employer: normalize(&record.employer),
        }
    }

    /// Scan content for each populated field. At most one finding per field;
    /// unset fields never produce findings.
    pub fn scan(&self, content: &str) -> Vec<Finding> {
        let lower = content.to_lowercase();
        let mut findings = Vec::new();

        if let Some(name) = &self.name {
            let full_hit = lower.contains(name.as_str());
            let token_hit = self.name_tokens.iter().any(|t| contains_word(&lower, t));
            if full_hit || token_hit {
                findings.push(Finding::identity(IdentityField::Name));
            }
        }
        // Bare-handle substring match covers `handle`, `@handle`, and
        // `u/handle` forms.
        if let Some(handle) = &self.handle {
            if lower.contains(handle.as_str()) {
                findings.push(Finding::identity(IdentityField::Handle));
            }
        }
        if let Some(location) = &self.location {
            if lower.contains(location.as_str()) {
                findings.push(Finding::identity(IdentityField::Location));
            }
        }
        if let Some(employer) = &self.employer {
            if lower.contains(employer.as_str()) {
                findings.push(Finding::identity(IdentityField::Employer));
            }
        }

        findings
    }
}

impl fmt::Debug for IdentityMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Matcher state is PII; show only which fields are armed.
        f.debug_struct("IdentityMatcher")
            .field("name", &self.name.is_some())
            .field("name_tokens", &self.name_tokens.len())
            .field("handle", &self.handle.is_some())
            .field("location", &self.location.is_some())
            .field("employer", &self.employer.is_some())
            .finish()
    }
}

fn normalize(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

/// Word-bounded containment on already-lowercased text.
fn contains_word(haystack: &str, word: &str) -> bool {
    haystack
        .split(|c: char| !c.is_alphanumeric())
        .any(|w| w == word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, handle: &str) -> IdentityRecord {
        IdentityRecord {
            name: Some(name.to_string()),
            handle: Some(handle.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn full_name_matches_case_insensitively() {
        let matcher = IdentityMatcher::new(&record("Jane Q. Doe", ""), false);
        assert_eq!(matcher.scan("hello from JANE Q. DOE today").len(), 1);
        assert!(matcher.scan("no names here").is_empty());
    }

    #[test]
    fn name_tokens_only_match_when_enabled() {
        let rec = record("Jane Doe", "");
        let off = IdentityMatcher::new(&rec, false);
        let on = IdentityMatcher::new(&rec, true);
        assert!(off.scan("ask jane about it").is_empty());
        assert_eq!(on.scan("ask jane about it").len(), 1);
    }

    #[test]
    fn token_matching_is_word_bounded() {
        let matcher = IdentityMatcher::new(&record("Bob Smith", ""), true);
        assert!(matcher.scan("the bobbin and the smithy").is_empty());
        assert_eq!(matcher.scan("bob posted again").len(), 1);
    }

    #[test]
    fn punctuated_name_tokens_still_match() {
        let matcher = IdentityMatcher::new(&record("Jane Q. Doe", ""), true);
        assert_eq!(matcher.scan("the initial q appears here").len(), 1);
        assert_eq!(matcher.scan("paging doe at the desk").len(), 1);
        assert!(matcher.scan("quiet afternoon, nothing doing").is_empty());
    }

    #[test]
    fn handle_matches_with_and_without_decoration() {
        let matcher = IdentityMatcher::new(&record("", "@JaneDoe42"), false);
        for text in ["cc @janedoe42", "cc u/janedoe42", "cc janedoe42"] {
            assert_eq!(matcher.scan(text).len(), 1, "failed on: {text}");
        }
    }

    #[test]
    fn unset_fields_produce_no_findings() {
        let matcher = IdentityMatcher::new(&IdentityRecord::default(), true);
        assert!(matcher.scan("Jane Doe at Acme Corp in Springfield").is_empty());
    }

    #[test]
    fn debug_output_carries_no_values() {
        let matcher = IdentityMatcher::new(&record("Jane Doe", "@janedoe"), true);
        let rendered = format!("{matcher:?}");
        assert!(!rendered.to_lowercase().contains("jane"));
    }
}
