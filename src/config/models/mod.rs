//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

#![allow(missing_docs)]

pub mod auth;
pub mod gateway;
pub mod provider;
pub mod rate_limit;
pub mod server;
pub mod storage;

// Re-export all configuration types
pub use auth::*;
pub use gateway::*;
pub use provider::*;
pub use rate_limit::*;
pub use server::*;
pub use storage::*;

use crate::utils::error::{GatewayError, Result};
use std::str::FromStr;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_jwt_expiration() -> u64 {
    86400 // 24 hours
}

pub fn default_rate_limit_requests() -> u32 {
    100
}

pub fn default_rate_limit_window() -> u64 {
    60
}

pub fn default_cors_methods() -> Vec<String> {
    ["GET", "POST", "PUT", "DELETE"]
        .iter()
        .map(|m| m.to_string())
        .collect()
}

pub fn default_cors_headers() -> Vec<String> {
    ["Origin", "Content-Type", "Accept", "Authorization"]
        .iter()
        .map(|h| h.to_string())
        .collect()
}

pub fn default_cors_max_age() -> u32 {
    3600
}

pub fn default_true() -> bool {
    true
}

/// Read a non-empty, trimmed environment variable
pub(crate) fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read and parse an environment variable, failing on malformed values
pub(crate) fn env_parse<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env_var(name) {
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|e| GatewayError::Config(format!("Invalid value for {}: {}", name, e))),
        None => Ok(None),
    }
}

/// Split a comma separated environment variable into trimmed entries
pub(crate) fn env_list(name: &str) -> Option<Vec<String>> {
    env_var(name).map(|raw| {
        raw.split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    })
}
