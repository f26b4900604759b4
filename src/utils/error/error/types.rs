//! Gateway error types

use crate::core::assistant::AssistantError;
use crate::core::speech::SynthesisError;
use crate::core::translation::TranslationError;
use thiserror::Error;

/// Result type alias for the Gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the Gateway
///
/// Client-facing variants display their message verbatim so the error
/// envelope carries exactly the text the handler chose.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JWT errors
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// HTTP server lifecycle errors
    #[error("Server error: {0}")]
    Server(String),

    /// Crypto errors
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Authentication errors
    #[error("{0}")]
    Auth(String),

    /// Authorization errors
    #[error("{0}")]
    Forbidden(String),

    /// Validation errors
    #[error("{0}")]
    Validation(String),

    /// Malformed request errors
    #[error("{0}")]
    BadRequest(String),

    /// Not found errors
    #[error("{0}")]
    NotFound(String),

    /// Conflict errors
    #[error("{0}")]
    Conflict(String),

    /// Rate limiting errors
    #[error("{0}")]
    RateLimit(String),

    /// Translation provider chain exhausted
    #[error("Translation failed: {0}")]
    Translation(#[from] TranslationError),

    /// Speech synthesis backend failed
    #[error("TTS failed: {0}")]
    Synthesis(#[from] SynthesisError),

    /// Chat-completion provider failed
    #[error("AI service error: {0}")]
    Assistant(#[from] AssistantError),

    /// Internal server errors with a client-safe message
    #[error("{0}")]
    Internal(String),
}
