//! Persona prompt and emergency detection

use super::{ChatMessage, ChatRole};
use crate::core::models::{Message, MessageRole};

/// Prepended to replies when the user describes an emergency
pub const EMERGENCY_DISCLAIMER: &str = "Emergency warning: Your symptoms may be serious. Please seek immediate medical attention or contact local emergency services immediately.\n\n";

const EMERGENCY_KEYWORDS: &[&str] = &[
    "chest pain",
    "difficulty breathing",
    "shortness of breath",
    "severe bleeding",
    "unconscious",
    "fainting",
    "stroke",
    "heart attack",
    "suicidal",
    "overdose",
];

/// System prompt instructing the model to answer in `lang`
pub fn system_prompt(lang: &str) -> String {
    format!(
        "You are a helpful assistant. Primary role: provide general medical information about symptoms, \
         possible causes, and general advice. Do not provide diagnosis or treatment. Always include \
         appropriate caution. You can also answer language-related questions (translations, grammar, \
         usage, examples) when asked. Respond in {}.",
        lang
    )
}

/// System prompt followed by the conversation history in order
pub fn build_messages(lang: &str, history: &[Message]) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(ChatMessage::new(ChatRole::System, system_prompt(lang)));
    messages.extend(history.iter().map(|m| {
        let role = match m.role {
            MessageRole::User => ChatRole::User,
            MessageRole::Assistant => ChatRole::Assistant,
        };
        ChatMessage::new(role, m.content.clone())
    }));
    messages
}

/// Case-insensitive scan for emergency symptoms
pub fn contains_emergency_keyword(text: &str) -> bool {
    let lower = text.to_lowercase();
    EMERGENCY_KEYWORDS.iter().any(|k| lower.contains(k))
}
