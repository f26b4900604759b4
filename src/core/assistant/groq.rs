//! Groq chat completions (OpenAI-compatible)

use super::{AssistantError, ChatCompletion, ChatMessage};
use crate::config::AssistantConfig;
use crate::utils::net::{get_client_with_timeout, preview_body};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Groq client, built once and shared
#[derive(Clone)]
pub struct GroqClient {
    client: Arc<Client>,
    api_key: Option<String>,
    api_base: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl std::fmt::Debug for GroqClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqClient")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl GroqClient {
    pub fn new(config: &AssistantConfig) -> Self {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string);
        if api_key.is_none() {
            warn!("GROQ_API_KEY is not set; chat requests will fail");
        }

        Self {
            client: get_client_with_timeout(Duration::from_secs(config.timeout)),
            api_key,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatCompletion for GroqClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, AssistantError> {
        let api_key = self.api_key.as_deref().ok_or(AssistantError::NotConfigured)?;
        let url = format!("{}/chat/completions", self.api_base);
        debug!("Groq completion: model={} messages={}", self.model, messages.len());

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&CompletionRequest {
                model: &self.model,
                messages,
                temperature: self.temperature,
                max_tokens: self.max_tokens,
            })
            .send()
            .await
            .map_err(|e| AssistantError::Provider(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AssistantError::Provider(e.to_string()))?;

        if !status.is_success() {
            return Err(AssistantError::Provider(format!(
                "{}: {}",
                status.as_u16(),
                preview_body(&body)
            )));
        }

        let parsed: CompletionResponse = serde_json::from_str(&body)
            .map_err(|e| AssistantError::Provider(format!("invalid response: {}", e)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(AssistantError::EmptyResponse)
    }
}
