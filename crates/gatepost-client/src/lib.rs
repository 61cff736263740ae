//! # gatepost-client
//!
//! Thin, synchronous HTTP client for the remote posting service. No retry
//! logic and no screening of its own: callers are expected to run every
//! user-authored string through `gatepost-screen` before handing it here.

pub mod http;
pub mod protocol;

pub use http::{ApiClient, DEFAULT_BASE_URL};
