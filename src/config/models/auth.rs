//! Authentication configuration

use super::*;
use rand::distributions::Alphanumeric;
use rand::{Rng, thread_rng};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// JWT signing secret
    #[serde(default = "generate_secure_jwt_secret")]
    pub jwt_secret: String,
    /// JWT expiration in seconds
    #[serde(default = "default_jwt_expiration")]
    pub jwt_expiration: u64,
    /// Emails that receive the admin role at signup
    #[serde(default)]
    pub admin_emails: Vec<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: generate_secure_jwt_secret(),
            jwt_expiration: default_jwt_expiration(),
            admin_emails: vec![],
        }
    }
}

impl AuthConfig {
    /// Apply `JWT_SECRET`, `JWT_EXPIRATION` and `ADMIN_EMAILS`
    pub fn apply_env(&mut self) -> Result<()> {
        match env_var("JWT_SECRET") {
            Some(secret) => self.jwt_secret = secret,
            None => debug!("JWT_SECRET is not set, keeping the configured secret"),
        }
        if let Some(expiration) = env_parse("JWT_EXPIRATION")? {
            self.jwt_expiration = expiration;
        }
        if let Some(emails) = env_list("ADMIN_EMAILS") {
            self.admin_emails = emails;
        }
        Ok(())
    }

    /// Whether a signup with this email is granted the admin role
    pub fn is_admin_email(&self, email: &str) -> bool {
        self.admin_emails
            .iter()
            .any(|admin| admin.eq_ignore_ascii_case(email.trim()))
    }

    /// Validate authentication configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.jwt_secret.len() < 32 {
            return Err("JWT secret must be at least 32 characters long for security".to_string());
        }

        if self.jwt_secret == "your-secret-key" || self.jwt_secret == "change-me" {
            return Err("JWT secret must not use default values. Please generate a secure random secret.".to_string());
        }

        if self.jwt_expiration < 300 {
            return Err("JWT expiration should be at least 5 minutes (300 seconds)".to_string());
        }

        if self.jwt_expiration > 86400 * 30 {
            return Err(
                "JWT expiration should not exceed 30 days for security reasons".to_string(),
            );
        }

        Ok(())
    }
}

/// Generate a secure random JWT secret
pub fn generate_secure_jwt_secret() -> String {
    warn!("No JWT secret configured, generated a random one; issued tokens will not survive a restart");
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}
