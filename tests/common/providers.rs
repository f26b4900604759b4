//! Provider doubles
//!
//! Deterministic stand-ins for the translation, speech and chat-completion
//! backends so HTTP flows can run without network access.

use async_trait::async_trait;
use bytes::Bytes;
use lingua_gateway::core::assistant::{AssistantError, ChatCompletion, ChatMessage};
use lingua_gateway::core::speech::{Audio, SpeechSynthesizer, SynthesisError};
use lingua_gateway::core::translation::{TranslationError, TranslationRequest, Translator};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Translator that always answers with the same text, or always fails
#[derive(Debug)]
pub struct ScriptedTranslator {
    name: &'static str,
    reply: Option<String>,
    calls: AtomicUsize,
}

impl ScriptedTranslator {
    pub fn ok(reply: &str) -> Self {
        Self {
            name: "scripted",
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(name: &'static str) -> Self {
        Self {
            name,
            reply: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for ScriptedTranslator {
    fn name(&self) -> &str {
        self.name
    }

    async fn translate(&self, _request: &TranslationRequest) -> Result<String, TranslationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => Err(TranslationError::Provider {
                provider: self.name.to_string(),
                message: "503: unavailable".to_string(),
            }),
        }
    }
}

/// Completion client that records every prompt it receives
#[derive(Debug, Default)]
pub struct ScriptedCompletion {
    reply: String,
    fail: bool,
    prompts: Mutex<Vec<Vec<ChatMessage>>>,
}

impl ScriptedCompletion {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// Prompts received so far, oldest first
    pub fn prompts(&self) -> Vec<Vec<ChatMessage>> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatCompletion for ScriptedCompletion {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, AssistantError> {
        self.prompts.lock().unwrap().push(messages.to_vec());
        if self.fail {
            return Err(AssistantError::Provider("500 - upstream exploded".to_string()));
        }
        Ok(self.reply.clone())
    }
}

/// Synthesizer returning a fixed WAV payload
#[derive(Debug, Default)]
pub struct FixedSynthesizer {
    fail: bool,
}

impl FixedSynthesizer {
    pub const BYTES: &'static [u8] = b"RIFF\x24\x00\x00\x00WAVEfmt ";

    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl SpeechSynthesizer for FixedSynthesizer {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn synthesize(&self, _text: &str, _lang: &str) -> Result<Audio, SynthesisError> {
        if self.fail {
            return Err(SynthesisError::Backend("synthesizer offline".to_string()));
        }
        Ok(Audio {
            bytes: Bytes::from_static(Self::BYTES),
            content_type: "audio/wav".to_string(),
        })
    }
}
