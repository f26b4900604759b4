//! JWT utility functions

use super::types::{Claims, JwtHandler};
use crate::utils::error::{GatewayError, Result};
use std::time::{SystemTime, UNIX_EPOCH};

impl JwtHandler {
    /// Current UNIX time in seconds
    pub(super) fn now() -> Result<u64> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .map_err(|e| GatewayError::internal(format!("System time error: {}", e)))
    }

    /// Extract token from an Authorization header value
    pub fn extract_token_from_header(header_value: &str) -> Option<&str> {
        header_value
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    /// Get token expiration time in seconds
    pub fn expiration(&self) -> u64 {
        self.expiration
    }

    /// Get time until token expires
    pub fn time_until_expiry(&self, claims: &Claims) -> Option<u64> {
        let now = Self::now().ok()?;
        claims.exp.checked_sub(now).filter(|remaining| *remaining > 0)
    }
}
