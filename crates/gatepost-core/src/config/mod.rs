mod screen_config;

pub use screen_config::ScreenConfig;

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::errors::{ConfigError, GatepostResult};
use crate::models::IdentityRecord;

/// Top-level configuration document.
///
/// Loaded from a TOML file with an optional `[identity]` table and a
/// `[screen]` table. Absent identity keys leave the corresponding matcher
/// disabled.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GatepostConfig {
    pub identity: Option<IdentityRecord>,
    pub screen: ScreenConfig,
}

impl GatepostConfig {
    /// Load and parse a config file. Malformed documents (including
    /// unrecognized pattern-category names) fail here, at construction time.
    pub fn load(path: &Path) -> GatepostResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = toml::from_str(&raw).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::models::PatternCategory;

    fn write_config(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_identity_and_screen_tables() {
        let file = write_config(
            r#"
[identity]
name = "Jane Q. Doe"
employer = "Acme Corp"

[screen]
disabled_categories = ["phone"]
match_name_tokens = true
"#,
        );
        let config = GatepostConfig::load(file.path()).unwrap();
        let identity = config.identity.unwrap();
        assert_eq!(identity.name.as_deref(), Some("Jane Q. Doe"));
        assert!(identity.handle.is_none());
        assert_eq!(
            config.screen.disabled_categories,
            vec![PatternCategory::Phone]
        );
        assert!(config.screen.match_name_tokens);
        assert!(config.screen.luhn_check);
    }

    #[test]
    fn unknown_category_name_fails_at_load() {
        let file = write_config("[screen]\ndisabled_categories = [\"fax-number\"]\n");
        let err = GatepostConfig::load(file.path()).unwrap_err();
        assert!(matches!(
            &err,
            crate::errors::GatepostError::Config(ConfigError::Parse { .. })
        ));
        let message = err.to_string();
        assert!(
            message.contains("unknown pattern category: fax-number"),
            "got: {message}"
        );
    }

    #[test]
    fn misspelled_screen_key_fails_at_load() {
        let file = write_config("[screen]\nmatch_name_token = true\n");
        let err = GatepostConfig::load(file.path()).unwrap_err();
        assert!(matches!(
            err,
            crate::errors::GatepostError::Config(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = GatepostConfig::load(Path::new("/nonexistent/gatepost.toml")).unwrap_err();
        assert!(matches!(
            err,
            crate::errors::GatepostError::Config(ConfigError::Io { .. })
        ));
    }
}
