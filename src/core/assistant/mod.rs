//! Conversational assistant
//!
//! Wraps a chat-completion provider with the medical-information persona
//! and the emergency keyword scan applied to every reply.

mod bridge;
mod groq;
mod prompt;

pub use bridge::AssistantBridge;
pub use groq::GroqClient;
pub use prompt::{EMERGENCY_DISCLAIMER, build_messages, contains_emergency_keyword, system_prompt};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role of a chat-completion message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// A message sent to the completion provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Assistant failures
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("groq API error: {0}")]
    Provider(String),

    #[error("no response from Groq")]
    EmptyResponse,

    #[error("GROQ_API_KEY is not set")]
    NotConfigured,
}

/// Chat-completion provider
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Return the text of the first completion choice
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, AssistantError>;
}
