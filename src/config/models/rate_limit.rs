//! Rate limiting configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Fixed-window request rate limiting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Requests allowed per window per client
    #[serde(default = "default_rate_limit_requests")]
    pub requests: u32,
    /// Window length in seconds
    #[serde(default = "default_rate_limit_window")]
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            requests: default_rate_limit_requests(),
            window_secs: default_rate_limit_window(),
        }
    }
}

impl RateLimitConfig {
    /// Apply `RATE_LIMIT_ENABLED`, `RATE_LIMIT_REQUESTS` and `RATE_LIMIT_WINDOW_SECS`
    pub fn apply_env(&mut self) -> Result<()> {
        if let Some(enabled) = env_parse("RATE_LIMIT_ENABLED")? {
            self.enabled = enabled;
        }
        if let Some(requests) = env_parse("RATE_LIMIT_REQUESTS")? {
            self.requests = requests;
        }
        if let Some(window) = env_parse("RATE_LIMIT_WINDOW_SECS")? {
            self.window_secs = window;
        }
        Ok(())
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.enabled && (self.requests == 0 || self.window_secs == 0) {
            return Err("Rate limit requests and window must be greater than 0".to_string());
        }
        Ok(())
    }
}
