//! Hugging Face inference API (MMS-TTS models)

use super::{Audio, SpeechSynthesizer, SynthesisError, content_type_or};
use crate::config::HuggingFaceConfig;
use crate::utils::net::{get_client_with_timeout, preview_body};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

const PROVIDER: &str = "huggingface";
const DEFAULT_CONTENT_TYPE: &str = "audio/wav";

/// Baseline Yoruba model tried when a custom Yoruba model fails
pub const YORUBA_FALLBACK_MODEL: &str = "facebook/mms-tts-yor";
const FALLBACK_ATTEMPTS: u32 = 2;

/// Hugging Face TTS client with retry and a Yoruba fallback model
#[derive(Debug, Clone)]
pub struct HuggingFaceSynthesizer {
    client: Arc<Client>,
    config: HuggingFaceConfig,
}

/// Outcome of a single inference call
enum Attempt {
    Audio(Audio),
    Status { status: u16, body: Bytes },
    Transport(reqwest::Error),
}

fn is_yoruba(lang: &str) -> bool {
    matches!(lang, "yo" | "yo-ng" | "yor" | "yoruba")
}

impl HuggingFaceSynthesizer {
    pub fn new(config: &HuggingFaceConfig) -> Self {
        Self {
            client: get_client_with_timeout(Duration::from_secs(config.timeout)),
            config: config.clone(),
        }
    }

    /// Model serving a language, if any
    pub fn model_for(&self, lang: &str) -> Option<&str> {
        match lang.trim().to_lowercase().as_str() {
            "yo" | "yo-ng" | "yor" | "yoruba" => Some(&self.config.yoruba_model),
            "ig" | "ig-ng" | "ibo" | "igbo" => Some(&self.config.igbo_model),
            "ha" | "ha-ng" | "hau" | "hausa" => Some(&self.config.hausa_model),
            _ => None,
        }
    }

    async fn call(&self, token: &str, model: &str, text: &str) -> Attempt {
        let url = format!(
            "{}/models/{}",
            self.config.api_base.trim_end_matches('/'),
            model
        );

        let response = match self
            .client
            .post(&url)
            .bearer_auth(token)
            .header("Accept", DEFAULT_CONTENT_TYPE)
            .json(&json!({ "inputs": text, "options": { "wait_for_model": true } }))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return Attempt::Transport(e),
        };

        let status = response.status();
        let content_type = content_type_or(response.headers(), DEFAULT_CONTENT_TYPE);
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => return Attempt::Transport(e),
        };
        debug!(
            "Hugging Face response: model={} status={} ct={} len={}",
            model,
            status.as_u16(),
            content_type,
            body.len()
        );

        if status.is_success() {
            Attempt::Audio(Audio {
                bytes: body,
                content_type,
            })
        } else {
            Attempt::Status {
                status: status.as_u16(),
                body,
            }
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for HuggingFaceSynthesizer {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn synthesize(&self, text: &str, lang: &str) -> Result<Audio, SynthesisError> {
        let token = self
            .config
            .api_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(SynthesisError::NotConfigured("HF_API_TOKEN"))?;

        let model = self
            .model_for(lang)
            .ok_or_else(|| SynthesisError::UnsupportedLanguage(lang.to_string()))?;
        let lang = lang.trim().to_lowercase();
        info!("TTS: lang={} model={}", lang, model);

        let max_attempts = self.config.max_attempts.max(1);
        let mut last_status: Option<(u16, Bytes)> = None;

        for attempt in 0..max_attempts {
            let is_last = attempt + 1 == max_attempts;
            let backoff = Duration::from_millis(self.config.retry_delay_ms * u64::from(attempt + 1));

            match self.call(token, model, text).await {
                Attempt::Audio(audio) => return Ok(audio),
                Attempt::Transport(e) => {
                    if is_last {
                        return Err(SynthesisError::Backend(format!("call Hugging Face: {}", e)));
                    }
                    warn!("TTS request error (attempt {}): {}", attempt + 1, e);
                    tokio::time::sleep(backoff).await;
                }
                Attempt::Status { status, body } => {
                    let transient = (500..600).contains(&status);
                    last_status = Some((status, body));
                    if !transient {
                        break;
                    }
                    if !is_last {
                        tokio::time::sleep(backoff).await;
                    }
                }
            }
        }

        if is_yoruba(&lang) && model != YORUBA_FALLBACK_MODEL {
            info!("TTS fallback: lang={} fallback_model={}", lang, YORUBA_FALLBACK_MODEL);
            for attempt in 0..FALLBACK_ATTEMPTS {
                match self.call(token, YORUBA_FALLBACK_MODEL, text).await {
                    Attempt::Audio(audio) => return Ok(audio),
                    Attempt::Transport(e) => {
                        warn!("TTS fallback request error (attempt {}): {}", attempt + 1, e);
                        tokio::time::sleep(Duration::from_millis(self.config.fallback_delay_ms)).await;
                    }
                    Attempt::Status { status, body } => last_status = Some((status, body)),
                }
            }
        }

        Err(match last_status {
            Some((status, body)) => SynthesisError::Status {
                provider: PROVIDER,
                status,
                body: preview_body(&String::from_utf8_lossy(&body)),
            },
            None => SynthesisError::Backend("huggingface: no response".to_string()),
        })
    }
}
