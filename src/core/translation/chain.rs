//! Ordered fallback across translators

use super::{
    LibreTranslateTranslator, MyMemoryTranslator, TranslationError, TranslationRequest, Translator,
};
use crate::config::TranslationConfig;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Tries each translator in turn
#[derive(Clone)]
pub struct TranslationChain {
    translators: Vec<Arc<dyn Translator>>,
}

impl std::fmt::Debug for TranslationChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.translators.iter().map(|t| t.name()).collect();
        f.debug_struct("TranslationChain")
            .field("translators", &names)
            .finish()
    }
}

impl TranslationChain {
    /// Build a chain from explicit translators
    pub fn new(translators: Vec<Arc<dyn Translator>>) -> Self {
        Self { translators }
    }

    /// MyMemory first, then LibreTranslate
    pub fn from_config(config: &TranslationConfig) -> Self {
        let chain = Self::new(vec![
            Arc::new(MyMemoryTranslator::new(config)),
            Arc::new(LibreTranslateTranslator::new(config)),
        ]);
        info!("Translation chain initialized: {:?}", chain);
        chain
    }

    /// Number of translators in the chain
    pub fn len(&self) -> usize {
        self.translators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translators.is_empty()
    }

    /// Translate with the first provider that returns non-empty text
    pub async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslationError> {
        let mut last_error = None;

        for translator in &self.translators {
            match translator.translate(request).await {
                Ok(text) if !text.trim().is_empty() => {
                    debug!(provider = translator.name(), "Translation succeeded");
                    return Ok(text);
                }
                Ok(_) => {
                    warn!(provider = translator.name(), "Empty translation, trying next provider");
                    last_error = Some(TranslationError::Empty {
                        provider: translator.name().to_string(),
                    });
                }
                Err(e) => {
                    warn!(provider = translator.name(), "Translation provider failed: {}", e);
                    last_error = Some(e);
                }
            }
        }

        Err(match last_error {
            Some(e) => TranslationError::Unavailable(format!("all translation services failed: {}", e)),
            None => TranslationError::Unavailable("no translation providers configured".to_string()),
        })
    }
}
