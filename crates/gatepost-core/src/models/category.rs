use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::ConfigError;

/// A class of static PII pattern in the screening bank.
///
/// The set of enabled categories is fixed at engine construction. Parsing an
/// unrecognized name fails with `ConfigError::UnknownCategory` rather than
/// being silently ignored; deserialization routes through `FromStr` so config
/// documents get the same error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternCategory {
    Email,
    Phone,
    NationalId,
    CreditCard,
    IpAddress,
    StreetAddress,
    DateOfBirth,
}

impl PatternCategory {
    pub const ALL: [PatternCategory; 7] = [
        PatternCategory::Email,
        PatternCategory::Phone,
        PatternCategory::NationalId,
        PatternCategory::CreditCard,
        PatternCategory::IpAddress,
        PatternCategory::StreetAddress,
        PatternCategory::DateOfBirth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PatternCategory::Email => "email",
            PatternCategory::Phone => "phone",
            PatternCategory::NationalId => "national-id",
            PatternCategory::CreditCard => "credit-card",
            PatternCategory::IpAddress => "ip-address",
            PatternCategory::StreetAddress => "street-address",
            PatternCategory::DateOfBirth => "date-of-birth",
        }
    }
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PatternCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

impl FromStr for PatternCategory {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| ConfigError::UnknownCategory {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_round_trips_through_from_str() {
        for cat in PatternCategory::ALL {
            assert_eq!(cat.as_str().parse::<PatternCategory>().unwrap(), cat);
        }
    }

    #[test]
    fn unknown_category_name_is_rejected() {
        let err = "fax-number".parse::<PatternCategory>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownCategory { name } if name == "fax-number"));
    }

    #[test]
    fn deserialization_reports_the_unknown_name() {
        let cat: PatternCategory = serde_json::from_str("\"national-id\"").unwrap();
        assert_eq!(cat, PatternCategory::NationalId);

        let err = serde_json::from_str::<PatternCategory>("\"fax-number\"").unwrap_err();
        assert!(
            err.to_string().contains("unknown pattern category: fax-number"),
            "got: {err}"
        );
    }
}
