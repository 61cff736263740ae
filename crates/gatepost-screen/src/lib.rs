//! # gatepost-screen
//!
//! Local, zero-network PII screening. Every piece of user-authored text is
//! scanned before it leaves the process; the result is allow or block, never
//! redaction. Nothing scanned and no finding is retained, logged, or cached —
//! the engine holds only immutable configuration.

pub mod engine;
pub mod identity;
pub mod patterns;

pub use engine::ScreenEngine;
