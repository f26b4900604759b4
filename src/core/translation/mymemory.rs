//! MyMemory translation API

use super::{TranslationError, TranslationRequest, Translator};
use crate::config::TranslationConfig;
use crate::utils::net::{get_client_with_timeout, preview_body};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const PROVIDER: &str = "mymemory";

/// Keyless MyMemory client
#[derive(Debug, Clone)]
pub struct MyMemoryTranslator {
    client: Arc<Client>,
    api_base: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyMemoryResponse {
    #[serde(default)]
    response_data: Option<MyMemoryData>,
    /// Sometimes a number, sometimes a numeric string
    #[serde(default)]
    response_status: serde_json::Value,
    #[serde(default)]
    response_details: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyMemoryData {
    #[serde(default)]
    translated_text: String,
}

impl MyMemoryResponse {
    fn status(&self) -> Option<u64> {
        match &self.response_status {
            serde_json::Value::Number(n) => n.as_u64(),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl MyMemoryTranslator {
    pub fn new(config: &TranslationConfig) -> Self {
        Self {
            client: get_client_with_timeout(Duration::from_secs(config.timeout)),
            api_base: config.mymemory_api_base.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Translator for MyMemoryTranslator {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslationError> {
        let url = format!("{}/get", self.api_base);
        let langpair = format!("{}|{}", request.source_lang, request.target_lang);
        debug!("MyMemory request: langpair={}", langpair);

        let response = self
            .client
            .get(&url)
            .query(&[("q", request.text.as_str()), ("langpair", langpair.as_str())])
            .send()
            .await
            .map_err(|e| TranslationError::provider(PROVIDER, e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TranslationError::provider(PROVIDER, e.to_string()))?;

        if !status.is_success() {
            return Err(TranslationError::provider(
                PROVIDER,
                format!("{}: {}", status.as_u16(), preview_body(&body)),
            ));
        }

        let parsed: MyMemoryResponse = serde_json::from_str(&body).map_err(|e| {
            TranslationError::provider(
                PROVIDER,
                format!("invalid JSON: {}; body: {}", e, preview_body(&body)),
            )
        })?;

        let text = parsed
            .response_data
            .as_ref()
            .map(|d| d.translated_text.as_str())
            .unwrap_or_default();

        if parsed.status() == Some(200) && !text.is_empty() {
            return Ok(text.to_string());
        }

        match parsed.response_details.filter(|d| !d.is_empty()) {
            Some(details) => Err(TranslationError::provider(PROVIDER, details)),
            None => Err(TranslationError::Empty {
                provider: PROVIDER.to_string(),
            }),
        }
    }
}
