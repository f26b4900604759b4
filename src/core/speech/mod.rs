//! Speech synthesis
//!
//! Language tag normalization, the synthesizer backends and the selector
//! that picks one per request.

mod elevenlabs;
mod espeak;
mod huggingface;
mod selector;

pub use elevenlabs::ElevenLabsSynthesizer;
pub use espeak::EspeakSynthesizer;
pub use huggingface::HuggingFaceSynthesizer;
pub use selector::SpeechSelector;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use thiserror::Error;

/// Synthesized audio and its MIME type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Audio {
    pub bytes: Bytes,
    pub content_type: String,
}

/// Speech synthesis failures
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// Backend-reported failure, already formatted
    #[error("{0}")]
    Backend(String),

    /// A remote backend answered with a non-success status
    #[error("{provider} {status}: {body}")]
    Status {
        provider: &'static str,
        status: u16,
        body: String,
    },

    /// Required credential missing
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    #[error("unsupported language for Hugging Face TTS: {0}")]
    UnsupportedLanguage(String),

    #[error("no ElevenLabs voice configured for language: {0}")]
    NoVoice(String),
}

/// A text-to-speech backend
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    fn name(&self) -> &str;

    /// Synthesize `text` in the normalized language tag `lang`
    async fn synthesize(&self, text: &str, lang: &str) -> Result<Audio, SynthesisError>;
}

/// Canonicalize a language tag: `yo` becomes `yo-NG`, `fr_ca` becomes `fr-CA`
pub fn normalize_language(tag: &str) -> String {
    let lower = tag.trim().replace('_', "-").to_lowercase();
    match lower.as_str() {
        "yo" | "yo-ng" => "yo-NG".to_string(),
        "ig" | "ig-ng" => "ig-NG".to_string(),
        "ha" | "ha-ng" => "ha-NG".to_string(),
        "en" | "en-ng" => "en-NG".to_string(),
        _ => match lower.split_once('-') {
            Some((lang, region)) => format!("{}-{}", lang, region.to_uppercase()),
            None => lower,
        },
    }
}

/// Lowercased language subtag, `yo-NG` gives `yo`
pub fn base_language(tag: &str) -> String {
    let lower = tag.trim().to_lowercase();
    match lower.split_once('-') {
        Some((base, _)) if !base.is_empty() => base.to_string(),
        _ => lower,
    }
}

/// Response content type, or `default` when the header is absent or blank
pub(crate) fn content_type_or(headers: &HeaderMap, default: &str) -> String {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|ct| !ct.is_empty())
        .unwrap_or(default)
        .to_string()
}
