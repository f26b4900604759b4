//! Application state shared across HTTP handlers
//!
//! This module provides the AppState struct and its implementations.

use crate::auth::JwtHandler;
use crate::config::Config;
use crate::core::assistant::AssistantBridge;
use crate::core::speech::SpeechSelector;
use crate::core::translation::TranslationChain;
use crate::server::middleware::RateLimiter;
use crate::storage::Database;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::info;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc so every worker shares one instance.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Persistence gateway
    pub database: Arc<Database>,
    /// Token issuer and verifier
    pub jwt: Arc<JwtHandler>,
    /// Translation provider chain
    pub translator: Arc<TranslationChain>,
    /// Speech synthesis selector
    pub speech: Arc<SpeechSelector>,
    /// Medical-information assistant
    pub assistant: Arc<AssistantBridge>,
    /// Request rate limiter
    pub rate_limiter: Arc<RateLimiter>,
}

impl AppState {
    /// Assemble state from already-built components
    pub fn new(
        config: Config,
        database: Database,
        translator: TranslationChain,
        speech: SpeechSelector,
        assistant: AssistantBridge,
    ) -> Self {
        let jwt = JwtHandler::new(config.auth());
        let rate_limiter = RateLimiter::from_config(config.rate_limit());

        Self {
            config: Arc::new(config),
            database: Arc::new(database),
            jwt: Arc::new(jwt),
            translator: Arc::new(translator),
            speech: Arc::new(speech),
            assistant: Arc::new(assistant),
            rate_limiter: Arc::new(rate_limiter),
        }
    }

    /// Connect the database, run migrations and build every provider from config
    pub async fn from_config(config: Config) -> Result<Self> {
        let database = Database::new(&config.storage().database).await?;
        database.migrate().await?;

        let translator = TranslationChain::from_config(&config.gateway.translation);
        let speech = SpeechSelector::from_config(&config.gateway.speech);
        let assistant = AssistantBridge::from_config(&config.gateway.assistant);

        info!(
            "Application state ready ({} translation providers, {:?} database)",
            translator.len(),
            database.backend_type()
        );

        Ok(Self::new(config, database, translator, speech, assistant))
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
