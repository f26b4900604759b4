//! Assistant bridge used by the chat handler

use super::{
    AssistantError, ChatCompletion, ChatMessage, ChatRole, EMERGENCY_DISCLAIMER, GroqClient,
    build_messages, contains_emergency_keyword,
};
use crate::config::AssistantConfig;
use crate::core::models::Message;
use std::sync::Arc;
use tracing::{debug, warn};

/// Sends a conversation to the completion provider and post-processes the reply
#[derive(Clone)]
pub struct AssistantBridge {
    client: Arc<dyn ChatCompletion>,
}

impl std::fmt::Debug for AssistantBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssistantBridge").finish_non_exhaustive()
    }
}

impl AssistantBridge {
    pub fn new(client: Arc<dyn ChatCompletion>) -> Self {
        Self { client }
    }

    pub fn from_config(config: &AssistantConfig) -> Self {
        Self::new(Arc::new(GroqClient::new(config)))
    }

    /// Reply to `user_text` given the stored `history`
    ///
    /// The emergency disclaimer is prepended when `user_text` mentions an
    /// emergency symptom.
    pub async fn respond(
        &self,
        history: &[Message],
        user_text: &str,
        lang: &str,
    ) -> Result<String, AssistantError> {
        let mut messages = build_messages(lang, history);
        messages.push(ChatMessage::new(ChatRole::User, user_text));
        debug!("Assistant request with {} messages", messages.len());

        let reply = self.client.complete(&messages).await?;

        if contains_emergency_keyword(user_text) {
            warn!("Emergency keyword detected, prepending disclaimer");
            return Ok(format!("{}{}", EMERGENCY_DISCLAIMER, reply));
        }
        Ok(reply)
    }
}
