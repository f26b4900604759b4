//! ElevenLabs text-to-speech

use super::{Audio, SpeechSynthesizer, SynthesisError, base_language, content_type_or};
use crate::config::ElevenLabsConfig;
use crate::utils::net::{get_client_with_timeout, preview_body};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

const PROVIDER: &str = "elevenlabs";
const DEFAULT_CONTENT_TYPE: &str = "audio/mpeg";

/// ElevenLabs client with per-language voices
#[derive(Debug, Clone)]
pub struct ElevenLabsSynthesizer {
    client: Arc<Client>,
    config: ElevenLabsConfig,
}

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
}

impl ElevenLabsSynthesizer {
    pub fn new(config: &ElevenLabsConfig) -> Self {
        Self {
            client: get_client_with_timeout(Duration::from_secs(config.timeout)),
            config: config.clone(),
        }
    }

    fn default_voice(&self) -> Option<&str> {
        self.config
            .voice_id_default
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    /// Voice for a language tag, falling back to the default voice
    pub fn voice_for(&self, lang: &str) -> Option<&str> {
        let specific = match base_language(lang).as_str() {
            "yo" => self.config.voice_id_yo.as_deref(),
            "ig" => self.config.voice_id_ig.as_deref(),
            "ha" => self.config.voice_id_ha.as_deref(),
            _ => None,
        };

        specific
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .or_else(|| self.default_voice())
    }

    async fn call(
        &self,
        api_key: &str,
        voice: &str,
        text: &str,
    ) -> Result<(StatusCode, String, Bytes), SynthesisError> {
        let url = format!(
            "{}/v1/text-to-speech/{}",
            self.config.api_base.trim_end_matches('/'),
            voice
        );

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", api_key)
            .header("Accept", DEFAULT_CONTENT_TYPE)
            .json(&SpeechRequest {
                text,
                model_id: &self.config.model_id,
            })
            .send()
            .await
            .map_err(|e| {
                warn!("ElevenLabs request error: {}", e);
                SynthesisError::Backend(format!("call ElevenLabs: {}", e))
            })?;

        let status = response.status();
        let content_type = content_type_or(response.headers(), DEFAULT_CONTENT_TYPE);
        let bytes = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::Backend(format!("read ElevenLabs response: {}", e)))?;

        Ok((status, content_type, bytes))
    }

    fn status_error(status: StatusCode, body: &[u8]) -> SynthesisError {
        let preview = preview_body(&String::from_utf8_lossy(body));
        warn!("ElevenLabs error: status={} body={}", status.as_u16(), preview);
        SynthesisError::Status {
            provider: PROVIDER,
            status: status.as_u16(),
            body: preview,
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsSynthesizer {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn synthesize(&self, text: &str, lang: &str) -> Result<Audio, SynthesisError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(SynthesisError::NotConfigured("ELEVENLABS_API_KEY"))?;

        let voice = self
            .voice_for(lang)
            .ok_or_else(|| SynthesisError::NoVoice(lang.to_string()))?;
        debug!("ElevenLabs synthesis: lang={} voice={}", lang, voice);

        let (status, content_type, body) = self.call(api_key, voice, text).await?;
        if status.is_success() {
            return Ok(Audio {
                bytes: body,
                content_type,
            });
        }

        let retry_with_default = matches!(
            status,
            StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND | StatusCode::UNPROCESSABLE_ENTITY
        );
        if let Some(default_voice) = self.default_voice().filter(|d| retry_with_default && *d != voice) {
            warn!(
                "ElevenLabs: retrying with default voice due to status={} for voice={}",
                status.as_u16(),
                voice
            );
            let (status, content_type, body) = self.call(api_key, default_voice, text).await?;
            if status.is_success() {
                return Ok(Audio {
                    bytes: body,
                    content_type,
                });
            }
            return Err(Self::status_error(status, &body));
        }

        Err(Self::status_error(status, &body))
    }
}
