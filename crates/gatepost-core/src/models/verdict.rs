use std::fmt;

use serde::{Deserialize, Serialize};

use super::category::PatternCategory;

/// An identity-record field that matched in scanned content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityField {
    Name,
    Handle,
    Location,
    Employer,
}

impl IdentityField {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentityField::Name => "name",
            IdentityField::Handle => "handle",
            IdentityField::Location => "location",
            IdentityField::Employer => "employer",
        }
    }
}

impl fmt::Display for IdentityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a finding matched against: a static pattern category, an identity
/// field, or a caller-supplied custom pattern (by index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    Pattern(PatternCategory),
    Identity(IdentityField),
    Custom(usize),
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindingKind::Pattern(cat) => f.write_str(cat.as_str()),
            FindingKind::Identity(field) => f.write_str(field.as_str()),
            FindingKind::Custom(index) => write!(f, "custom-{index}"),
        }
    }
}

/// One detected PII instance.
///
/// Carries the kind that matched and a human-readable reason. The matched
/// substring itself is PII and is never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub reason: String,
}

impl Finding {
    pub fn pattern(category: PatternCategory, reason: impl Into<String>) -> Self {
        Self {
            kind: FindingKind::Pattern(category),
            reason: reason.into(),
        }
    }

    pub fn identity(field: IdentityField) -> Self {
        Self {
            kind: FindingKind::Identity(field),
            reason: format!("content mentions the protected {field}"),
        }
    }

    pub fn custom(index: usize) -> Self {
        Self {
            kind: FindingKind::Custom(index),
            reason: format!("content matches custom pattern #{index}"),
        }
    }
}

/// The complete result of one content check. A value returned per call;
/// the engine keeps no history of prior verdicts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanVerdict {
    pub blocked: bool,
    pub findings: Vec<Finding>,
}

impl ScanVerdict {
    /// A clear verdict with no findings.
    pub fn clear() -> Self {
        Self {
            blocked: false,
            findings: Vec::new(),
        }
    }

    /// Blocked exactly when at least one finding of any kind is present.
    pub fn from_findings(findings: Vec<Finding>) -> Self {
        Self {
            blocked: !findings.is_empty(),
            findings,
        }
    }

    /// The kinds that triggered, for user-facing messages. Never contains
    /// matched text.
    pub fn labels(&self) -> Vec<String> {
        self.findings.iter().map(|f| f.kind.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_blocked_tracks_findings() {
        assert!(!ScanVerdict::from_findings(Vec::new()).blocked);
        let verdict = ScanVerdict::from_findings(vec![Finding::pattern(
            PatternCategory::Email,
            "content contains an email address",
        )]);
        assert!(verdict.blocked);
        assert_eq!(verdict.labels(), vec!["email"]);
    }

    #[test]
    fn identity_finding_reason_names_the_field_only() {
        let finding = Finding::identity(IdentityField::Employer);
        assert_eq!(finding.reason, "content mentions the protected employer");
    }
}
