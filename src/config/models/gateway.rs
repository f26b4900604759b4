//! Main gateway configuration

#![allow(missing_docs)]

use super::*;
use serde::{Deserialize, Serialize};

/// Main gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GatewayConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Translation providers
    #[serde(default)]
    pub translation: TranslationConfig,
    /// Speech synthesis backends
    #[serde(default)]
    pub speech: SpeechConfig,
    /// Chat-completion provider
    #[serde(default)]
    pub assistant: AssistantConfig,
    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
}

impl GatewayConfig {
    /// Build configuration from defaults and environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Overlay recognized environment variables onto this configuration
    pub fn apply_env(&mut self) -> Result<()> {
        self.server.apply_env()?;
        self.auth.apply_env()?;
        self.storage.database.apply_env()?;
        self.translation.apply_env()?;
        self.speech.apply_env()?;
        self.assistant.apply_env()?;
        self.rate_limit.apply_env()?;
        Ok(())
    }
}
