//! E2E tests for the translation chain and the assistant
//!
//! Run with: cargo test -- --ignored

#[cfg(test)]
mod tests {
    use crate::skip_without_env;
    use lingua_gateway::config::{AssistantConfig, TranslationConfig};
    use lingua_gateway::core::assistant::{AssistantBridge, EMERGENCY_DISCLAIMER};
    use lingua_gateway::core::translation::{TranslationChain, TranslationRequest};

    /// The keyless chain translates English into Yoruba
    #[tokio::test]
    #[ignore]
    async fn test_translation_chain_live() {
        let chain = TranslationChain::from_config(&TranslationConfig::default());
        let request = TranslationRequest::new("Good morning", "en", "yo");

        let text = chain.translate(&request).await.expect("translation failed");
        assert!(!text.trim().is_empty());
        println!("en -> yo: {}", text);
    }

    /// Groq answers and the emergency disclaimer is applied locally
    #[tokio::test]
    #[ignore]
    async fn test_assistant_live() {
        skip_without_env!("GROQ_API_KEY");

        let config = AssistantConfig {
            api_key: std::env::var("GROQ_API_KEY").ok(),
            max_tokens: 64,
            ..Default::default()
        };
        let bridge = AssistantBridge::from_config(&config);

        let reply = bridge
            .respond(&[], "I have chest pain when climbing stairs", "en")
            .await
            .expect("assistant call failed");
        assert!(reply.starts_with(EMERGENCY_DISCLAIMER));
        assert!(reply.len() > EMERGENCY_DISCLAIMER.len());
    }
}
