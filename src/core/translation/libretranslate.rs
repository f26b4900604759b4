//! LibreTranslate with public mirror fallback

use super::{TranslationError, TranslationRequest, Translator};
use crate::config::TranslationConfig;
use crate::utils::net::{get_client_with_timeout, preview_body};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

const PROVIDER: &str = "libretranslate";

/// LibreTranslate client that walks a list of endpoints
#[derive(Debug, Clone)]
pub struct LibreTranslateTranslator {
    client: Arc<Client>,
    endpoints: Vec<String>,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct LibreTranslateRequest<'a> {
    q: &'a str,
    source: String,
    target: String,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LibreTranslateResponse {
    #[serde(default)]
    translated_text: String,
}

impl LibreTranslateTranslator {
    pub fn new(config: &TranslationConfig) -> Self {
        Self {
            client: get_client_with_timeout(Duration::from_secs(config.timeout)),
            endpoints: config.libretranslate_endpoints(),
            api_key: config
                .libretranslate_api_key
                .clone()
                .filter(|k| !k.trim().is_empty()),
        }
    }

    /// Endpoints in the order they are tried
    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    async fn try_endpoint(
        &self,
        url: &str,
        body: &LibreTranslateRequest<'_>,
    ) -> Result<String, String> {
        let response = self
            .client
            .post(url)
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        let text = response.text().await.map_err(|e| e.to_string())?;

        if status != reqwest::StatusCode::OK {
            return Err(format!("{} from {}: {}", status.as_u16(), url, preview_body(&text)));
        }

        let parsed: LibreTranslateResponse = serde_json::from_str(&text).map_err(|e| {
            format!("invalid JSON from {}: {}; body: {}", url, e, preview_body(&text))
        })?;

        if parsed.translated_text.trim().is_empty() {
            return Err(format!("empty translation from {}", url));
        }
        Ok(parsed.translated_text)
    }
}

#[async_trait]
impl Translator for LibreTranslateTranslator {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslationError> {
        let body = LibreTranslateRequest {
            q: &request.text,
            source: request.source_lang.trim().to_lowercase(),
            target: request.target_lang.trim().to_lowercase(),
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let mut last_error = String::from("no endpoints configured");
        for url in &self.endpoints {
            match self.try_endpoint(url, &body).await {
                Ok(text) => {
                    debug!("LibreTranslate succeeded via {}", url);
                    return Ok(text);
                }
                Err(e) => {
                    warn!("LibreTranslate endpoint failed: {}", e);
                    last_error = e;
                }
            }
        }

        Err(TranslationError::provider(PROVIDER, last_error))
    }
}
