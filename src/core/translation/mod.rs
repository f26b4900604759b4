//! Translation provider chain
//!
//! Providers are tried in order and the first non-empty translation wins.
//! MyMemory is keyless and handles Nigerian languages well, so it leads;
//! LibreTranslate and its public mirrors follow.

mod chain;
mod libretranslate;
mod mymemory;

pub use chain::TranslationChain;
pub use libretranslate::LibreTranslateTranslator;
pub use mymemory::MyMemoryTranslator;

use async_trait::async_trait;
use thiserror::Error;

/// Text to translate between two language tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
        }
    }
}

/// Translation failures
#[derive(Debug, Error)]
pub enum TranslationError {
    /// A provider answered with an error or could not be reached
    #[error("{provider}: {message}")]
    Provider { provider: String, message: String },

    /// A provider answered successfully but without text
    #[error("{provider} returned an empty translation")]
    Empty { provider: String },

    /// Every provider in the chain failed
    #[error("{0}")]
    Unavailable(String),
}

impl TranslationError {
    pub(crate) fn provider(provider: &str, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.to_string(),
            message: message.into(),
        }
    }
}

/// A single translation backend
#[async_trait]
pub trait Translator: Send + Sync {
    /// Short provider name used in logs and errors
    fn name(&self) -> &str;

    /// Translate `request.text`, returning a non-empty string on success
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslationError>;
}
