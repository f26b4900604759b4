//! Utility modules for the Lingua gateway
//!
//! - **auth**: password hashing
//! - **data**: request field validation
//! - **error**: error taxonomy and HTTP mapping
//! - **net**: shared outbound HTTP clients

pub mod auth;
pub mod data;
pub mod error;
pub mod net;

/// Truncate a string to at most `max_chars` characters without splitting a code point
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
