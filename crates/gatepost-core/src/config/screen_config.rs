use serde::{Deserialize, Serialize};

use crate::models::PatternCategory;

/// Screening engine configuration, fixed at engine construction.
///
/// Unknown keys fail deserialization; a misspelled setting must never
/// silently leave the intended one at its default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScreenConfig {
    /// Pass-through override: when set the engine always returns a clear
    /// verdict. Callers must surface an explicit warning at the point of use.
    pub disable_all: bool,
    /// Categories removed from the static pattern bank for this engine.
    pub disabled_categories: Vec<PatternCategory>,
    /// Match individual name tokens, not just the full name. Catches
    /// first-name-only mentions at a higher false-positive cost for common
    /// names.
    pub match_name_tokens: bool,
    /// Require a valid Luhn checksum before a digit run counts as a credit
    /// card. Off means raw 13-19 digit runs block.
    pub luhn_check: bool,
    /// Extra caller-supplied regexes, compiled case-insensitively at engine
    /// construction. An invalid pattern is a construction error.
    pub custom_patterns: Vec<String>,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            disable_all: false,
            disabled_categories: Vec::new(),
            match_name_tokens: false,
            luhn_check: true,
            custom_patterns: Vec::new(),
        }
    }
}

impl ScreenConfig {
    /// Whether a category participates in scanning under this configuration.
    pub fn category_enabled(&self, category: PatternCategory) -> bool {
        !self.disable_all && !self.disabled_categories.contains(&category)
    }

    /// Convenience for tests and callers that disable one category.
    pub fn without_category(category: PatternCategory) -> Self {
        Self {
            disabled_categories: vec![category],
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_every_category() {
        let config = ScreenConfig::default();
        for cat in PatternCategory::ALL {
            assert!(config.category_enabled(cat));
        }
    }

    #[test]
    fn disable_all_overrides_per_category_state() {
        let config = ScreenConfig {
            disable_all: true,
            ..Default::default()
        };
        for cat in PatternCategory::ALL {
            assert!(!config.category_enabled(cat));
        }
    }

    #[test]
    fn per_category_disable_is_independent() {
        let config = ScreenConfig::without_category(PatternCategory::Phone);
        assert!(!config.category_enabled(PatternCategory::Phone));
        assert!(config.category_enabled(PatternCategory::Email));
    }
}
