//! Test fixture loader for gatepost golden datasets.
//!
//! Provides typed deserialization of the fixture JSON files and helpers for
//! loading them in tests across crates. All sample values in the fixtures
//! are synthetic.

use std::path::PathBuf;

use serde::de::DeserializeOwned;

/// Root directory of the fixtures folder, resolved relative to this crate.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}
