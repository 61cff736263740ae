use std::fmt;

use serde::Deserialize;

/// Caller-supplied facts about the individual the screener must protect
/// beyond the generic pattern bank.
///
/// Held in process memory for the engine's lifetime only: never serialized
/// back out, never logged (the `Debug` impl redacts values), never mutated
/// after construction.
#[derive(Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdentityRecord {
    pub name: Option<String>,
    pub handle: Option<String>,
    pub location: Option<String>,
    pub employer: Option<String>,
}

impl IdentityRecord {
    /// True when no field is populated; an empty record produces no findings.
    pub fn is_empty(&self) -> bool {
        let populated = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        !populated(&self.name)
            && !populated(&self.handle)
            && !populated(&self.location)
            && !populated(&self.employer)
    }
}

impl fmt::Debug for IdentityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field values are PII; show only which ones are set.
        f.debug_struct("IdentityRecord")
            .field("name", &self.name.as_ref().map(|_| "[set]"))
            .field("handle", &self.handle.as_ref().map(|_| "[set]"))
            .field("location", &self.location.as_ref().map(|_| "[set]"))
            .field("employer", &self.employer.as_ref().map(|_| "[set]"))
            .finish()
    }
}
