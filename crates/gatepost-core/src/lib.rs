//! # gatepost-core
//!
//! Foundation crate for the gatepost posting gate.
//! Defines the shared types, traits, errors, and configuration surface.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{GatepostConfig, ScreenConfig};
pub use errors::{GatepostError, GatepostResult};
pub use models::{Finding, FindingKind, IdentityField, IdentityRecord, PatternCategory, ScanVerdict};
