pub mod bank;

pub use bank::{all_patterns, StaticPattern};

use gatepost_core::config::ScreenConfig;
use gatepost_core::models::{Finding, PatternCategory};

/// Run every enabled static pattern against `text`, producing at most one
/// finding per category. Overlapping matches from different categories are
/// all reported; nothing about the matched span is carried on a finding.
pub fn scan(text: &str, config: &ScreenConfig) -> Vec<Finding> {
    let mut findings = Vec::new();

    for pat in all_patterns() {
        if !config.category_enabled(pat.category) {
            continue;
        }
        let Some(re) = pat.regex.as_ref() else {
            continue;
        };
        let hit = re
            .find_iter(text)
            .any(|m| accept(pat.category, m.as_str(), config));
        if hit {
            findings.push(Finding::pattern(pat.category, pat.reason));
        }
    }

    findings
}

/// Category-specific validation on top of the regex candidate.
///
/// Phone spans must hold 7-15 digits once separators are stripped, so short
/// ordinary numbers (prices, counts) never block. Credit-card spans must
/// hold 13-19 digits and, unless `luhn_check` is off, a valid Luhn checksum.
fn accept(category: PatternCategory, candidate: &str, config: &ScreenConfig) -> bool {
    match category {
        PatternCategory::Phone => {
            let digits = candidate.chars().filter(|c| c.is_ascii_digit()).count();
            (7..=15).contains(&digits)
        }
        PatternCategory::CreditCard => {
            let digits: String = candidate.chars().filter(|c| c.is_ascii_digit()).collect();
            if !(13..=19).contains(&digits.len()) {
                return false;
            }
            !config.luhn_check || luhn_valid(&digits)
        }
        _ => true,
    }
}

/// Luhn checksum over an all-digit string.
pub fn luhn_valid(digits: &str) -> bool {
    let digits: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.is_empty() {
        return false;
    }
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luhn_accepts_known_good_numbers() {
        assert!(luhn_valid("4111111111111111"));
        assert!(luhn_valid("5500005555555559"));
        assert!(luhn_valid("378282246310005"));
    }

    #[test]
    fn luhn_rejects_off_by_one() {
        assert!(!luhn_valid("4111111111111112"));
        assert!(!luhn_valid(""));
    }

    #[test]
    fn short_digit_runs_are_not_phones() {
        let config = ScreenConfig::default();
        let findings = scan("The total is 123456 this month", &config);
        assert!(findings.is_empty(), "got: {findings:?}");
    }

    #[test]
    fn seven_digit_run_is_a_phone() {
        let config = ScreenConfig::default();
        let findings = scan("dial 555-0123 ext nothing, full: 5551234", &config);
        assert!(findings
            .iter()
            .any(|f| f.kind == gatepost_core::models::FindingKind::Pattern(PatternCategory::Phone)));
    }

    #[test]
    fn non_luhn_digit_run_blocks_only_without_checksum() {
        let strict = ScreenConfig::default();
        let lax = ScreenConfig {
            luhn_check: false,
            // Raw digit runs also look like phones and national IDs; isolate
            // the credit-card rule.
            disabled_categories: vec![PatternCategory::Phone, PatternCategory::NationalId],
            ..Default::default()
        };
        let text = "ref 1234 5678 9012 3456 end";
        let card_hit = |findings: &[Finding]| {
            findings.iter().any(|f| {
                f.kind
                    == gatepost_core::models::FindingKind::Pattern(PatternCategory::CreditCard)
            })
        };
        assert!(!card_hit(&scan(text, &strict)));
        assert!(card_hit(&scan(text, &lax)));
    }
}
