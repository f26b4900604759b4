//! Backend precedence for speech requests

use super::{
    Audio, ElevenLabsSynthesizer, EspeakSynthesizer, HuggingFaceSynthesizer, SpeechSynthesizer,
    SynthesisError, base_language, normalize_language,
};
use crate::config::SpeechConfig;
use std::sync::Arc;
use tracing::info;

/// Picks a synthesizer per language
///
/// Precedence: eSpeak when forced, then ElevenLabs for Yoruba, Igbo and
/// Hausa when a key is present, then Hugging Face for everything else.
/// Cloud TTS would sit between eSpeak and ElevenLabs but is not wired.
#[derive(Clone)]
pub struct SpeechSelector {
    use_espeak: bool,
    espeak: Arc<dyn SpeechSynthesizer>,
    elevenlabs: Option<Arc<dyn SpeechSynthesizer>>,
    huggingface: Arc<dyn SpeechSynthesizer>,
}

impl std::fmt::Debug for SpeechSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechSelector")
            .field("use_espeak", &self.use_espeak)
            .field("elevenlabs", &self.elevenlabs.is_some())
            .finish()
    }
}

impl SpeechSelector {
    pub fn new(
        use_espeak: bool,
        espeak: Arc<dyn SpeechSynthesizer>,
        elevenlabs: Option<Arc<dyn SpeechSynthesizer>>,
        huggingface: Arc<dyn SpeechSynthesizer>,
    ) -> Self {
        Self {
            use_espeak,
            espeak,
            elevenlabs,
            huggingface,
        }
    }

    pub fn from_config(config: &SpeechConfig) -> Self {
        let elevenlabs: Option<Arc<dyn SpeechSynthesizer>> = if config.elevenlabs.is_enabled() {
            Some(Arc::new(ElevenLabsSynthesizer::new(&config.elevenlabs)))
        } else {
            None
        };

        let selector = Self::new(
            config.use_espeak,
            Arc::new(EspeakSynthesizer::new(&config.espeak)),
            elevenlabs,
            Arc::new(HuggingFaceSynthesizer::new(&config.huggingface)),
        );
        info!("Speech selector initialized: {:?}", selector);
        selector
    }

    /// Backend for a normalized language tag
    pub fn select(&self, lang: &str) -> &Arc<dyn SpeechSynthesizer> {
        if self.use_espeak {
            return &self.espeak;
        }

        if let Some(elevenlabs) = &self.elevenlabs {
            if matches!(base_language(lang).as_str(), "yo" | "ig" | "ha") {
                return elevenlabs;
            }
        }

        &self.huggingface
    }

    /// Normalize `lang`, pick a backend and synthesize
    pub async fn synthesize(&self, text: &str, lang: &str) -> Result<Audio, SynthesisError> {
        let lang = normalize_language(lang);
        let backend = self.select(&lang);
        info!("TTS handler: provider={} lang={}", backend.name(), lang);
        backend.synthesize(text, &lang).await
    }
}
