use std::sync::LazyLock;

use gatepost_core::models::PatternCategory;
use regex::Regex;

/// One entry in the static pattern bank.
pub struct StaticPattern {
    pub category: PatternCategory,
    pub regex: &'static LazyLock<Option<Regex>>,
    /// Human-readable reason carried on findings. Describes the kind of PII
    /// only; the matched value is never quoted.
    pub reason: &'static str,
}

macro_rules! bank_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Email ──────────────────────────────────────────────────────────────────
bank_pattern!(
    RE_EMAIL,
    r"[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}"
);

// ── Phone (candidate digit spans; digit count validated in scan) ──────────
bank_pattern!(RE_PHONE, r"\(?\+?\d[\d\s().\-]{4,18}\d");

// ── National ID (SSN shape: 3-2-4 with optional separators) ───────────────
bank_pattern!(RE_NATIONAL_ID, r"\b\d{3}[-.\s]?\d{2}[-.\s]?\d{4}\b");

// ── Credit card (13-19 digits after stripping; Luhn checked in scan) ──────
bank_pattern!(RE_CREDIT_CARD, r"\b\d[\d\s\-]{11,21}\d\b");

// ── IPv4 (each octet 0-255) ────────────────────────────────────────────────
bank_pattern!(
    RE_IPV4,
    r"\b(?:(?:25[0-5]|2[0-4]\d|[01]?\d\d?)\.){3}(?:25[0-5]|2[0-4]\d|[01]?\d\d?)\b"
);

// ── Street address (number + words + suffix token) ────────────────────────
bank_pattern!(
    RE_STREET_ADDRESS,
    r"(?i)\b\d{1,5}\s+(?:[a-z]+\s+){1,4}(?:st|street|ave|avenue|blvd|boulevard|dr|drive|ln|lane|rd|road|ct|court|pl|place|way)\b"
);

// ── Date of birth (MM/DD/YYYY or MM-DD-YYYY) ──────────────────────────────
bank_pattern!(
    RE_DATE_OF_BIRTH,
    r"\b(?:0?[1-9]|1[0-2])[/\-](?:0?[1-9]|[12]\d|3[01])[/\-](?:19|20)\d{2}\b"
);

/// The full pattern bank in scan order. A fixed, auditable table: one row per
/// category, each independently toggleable.
pub fn all_patterns() -> Vec<StaticPattern> {
    vec![
        StaticPattern {
            category: PatternCategory::Email,
            regex: &RE_EMAIL,
            reason: "content contains an email address",
        },
        StaticPattern {
            category: PatternCategory::NationalId,
            regex: &RE_NATIONAL_ID,
            reason: "content contains a national-ID-shaped number",
        },
        StaticPattern {
            category: PatternCategory::CreditCard,
            regex: &RE_CREDIT_CARD,
            reason: "content contains a credit-card-like number",
        },
        StaticPattern {
            category: PatternCategory::IpAddress,
            regex: &RE_IPV4,
            reason: "content contains an IP address",
        },
        StaticPattern {
            category: PatternCategory::Phone,
            regex: &RE_PHONE,
            reason: "content contains a phone-like number",
        },
        StaticPattern {
            category: PatternCategory::StreetAddress,
            regex: &RE_STREET_ADDRESS,
            reason: "content contains a street address",
        },
        StaticPattern {
            category: PatternCategory::DateOfBirth,
            regex: &RE_DATE_OF_BIRTH,
            reason: "content contains a date-of-birth-shaped date",
        },
    ]
}
