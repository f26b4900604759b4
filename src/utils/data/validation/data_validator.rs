//! Data validation utilities

use crate::utils::error::{GatewayError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

static EMAIL_REGEX: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").ok()
});

/// Data validation utilities
pub struct DataValidator;

impl DataValidator {
    /// Validate a display name: 2 to 100 characters after trimming
    pub fn validate_name(name: &str) -> Result<()> {
        let length = name.trim().chars().count();

        if length < 2 {
            return Err(GatewayError::Validation(
                "Name must be at least 2 characters".to_string(),
            ));
        }

        if length > 100 {
            return Err(GatewayError::Validation(
                "Name cannot exceed 100 characters".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate email address format
    pub fn validate_email(email: &str) -> Result<()> {
        if email.trim().is_empty() {
            return Err(GatewayError::Validation("Email is required".to_string()));
        }

        let email_regex = EMAIL_REGEX
            .as_ref()
            .ok_or_else(|| GatewayError::Internal("Email validator unavailable".to_string()))?;

        if !email_regex.is_match(email.trim()) {
            return Err(GatewayError::Validation("Invalid email format".to_string()));
        }

        Ok(())
    }

    /// Validate a signup password
    pub fn validate_password(password: &str) -> Result<()> {
        if password.chars().count() < 6 {
            return Err(GatewayError::Validation(
                "Password must be at least 6 characters".to_string(),
            ));
        }

        if password.len() > 128 {
            return Err(GatewayError::Validation(
                "Password cannot exceed 128 characters".to_string(),
            ));
        }

        Ok(())
    }

    /// Require a non-blank string field
    pub fn validate_required(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(GatewayError::Validation(format!("{} is required", field)));
        }
        Ok(())
    }

    /// Validate a feedback rating
    pub fn validate_rating(rating: i32) -> Result<()> {
        if !(1..=5).contains(&rating) {
            return Err(GatewayError::Validation(
                "Rating must be between 1 and 5".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse a record identifier, reporting `message` when malformed
    pub fn parse_id(raw: &str, message: &str) -> Result<Uuid> {
        Uuid::parse_str(raw.trim()).map_err(|_| GatewayError::Validation(message.to_string()))
    }
}
