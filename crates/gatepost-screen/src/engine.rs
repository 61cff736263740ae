use std::fmt;

use gatepost_core::config::ScreenConfig;
use gatepost_core::errors::{ConfigError, GatepostResult};
use gatepost_core::models::{Finding, IdentityRecord, ScanVerdict};
use gatepost_core::traits::IScreener;
use regex::Regex;

use crate::identity::IdentityMatcher;
use crate::patterns;

/// The PII screening engine: static pattern bank + identity matcher.
///
/// Holds only immutable configuration after construction, so one instance is
/// safe to share across threads. `check` performs no I/O, keeps no history,
/// and is deterministic for a fixed configuration.
pub struct ScreenEngine {
    config: ScreenConfig,
    identity: Option<IdentityMatcher>,
    custom: Vec<Regex>,
}

impl fmt::Debug for ScreenEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Custom patterns may encode identity facts; show counts only.
        f.debug_struct("ScreenEngine")
            .field("disable_all", &self.config.disable_all)
            .field("disabled_categories", &self.config.disabled_categories)
            .field("identity", &self.identity)
            .field("custom_patterns", &self.custom.len())
            .finish()
    }
}

impl ScreenEngine {
    /// Build an engine from a configuration and an optional identity record.
    ///
    /// All configuration faults surface here, never at scan time: an enabled
    /// builtin pattern that failed to compile, or an invalid custom pattern.
    pub fn new(config: ScreenConfig, identity: Option<IdentityRecord>) -> GatepostResult<Self> {
        for pat in patterns::all_patterns() {
            if config.category_enabled(pat.category) && pat.regex.is_none() {
                return Err(ConfigError::PatternCompile {
                    category: pat.category.as_str().to_string(),
                }
                .into());
            }
        }

        let mut custom = Vec::with_capacity(config.custom_patterns.len());
        for (index, raw) in config.custom_patterns.iter().enumerate() {
            let re = Regex::new(&format!("(?i){raw}")).map_err(|e| {
                ConfigError::InvalidCustomPattern {
                    index,
                    reason: e.to_string(),
                }
            })?;
            custom.push(re);
        }

        let identity = identity
            .filter(|r| !r.is_empty())
            .map(|r| IdentityMatcher::new(&r, config.match_name_tokens));

        Ok(Self {
            config,
            identity,
            custom,
        })
    }

    /// Engine with all-default configuration and no identity record.
    pub fn with_defaults() -> GatepostResult<Self> {
        Self::new(ScreenConfig::default(), None)
    }

    /// Whether the pass-through override is active. Callers must surface a
    /// warning before submitting unchecked content.
    pub fn is_disabled(&self) -> bool {
        self.config.disable_all
    }

    /// Scan one piece of outbound content.
    ///
    /// Collects every finding from the enabled static detectors, the
    /// populated identity fields, and the custom patterns; blocked exactly
    /// when at least one finding exists. With the pass-through override
    /// active the verdict is always clear.
    pub fn check(&self, content: &str) -> ScanVerdict {
        if self.config.disable_all {
            return ScanVerdict::clear();
        }

        let mut findings = patterns::scan(content, &self.config);

        if let Some(matcher) = &self.identity {
            findings.extend(matcher.scan(content));
        }

        for (index, re) in self.custom.iter().enumerate() {
            if re.is_match(content) {
                findings.push(Finding::custom(index));
            }
        }

        ScanVerdict::from_findings(findings)
    }
}

impl IScreener for ScreenEngine {
    fn check(&self, content: &str) -> ScanVerdict {
        ScreenEngine::check(self, content)
    }
}
