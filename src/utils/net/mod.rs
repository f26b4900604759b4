//! Network utilities
//!
//! Shared outbound HTTP clients for the provider integrations.

pub mod http;

pub use http::*;
