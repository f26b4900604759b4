//! External provider configuration
//!
//! Translation, speech synthesis and chat-completion backends.

use super::*;
use serde::{Deserialize, Serialize};

pub const MYMEMORY_API_BASE: &str = "https://api.mymemory.translated.net";
pub const ELEVENLABS_API_BASE: &str = "https://api.elevenlabs.io";
pub const HUGGINGFACE_API_BASE: &str = "https://api-inference.huggingface.co";
pub const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Translation provider chain configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// MyMemory API base URL
    #[serde(default = "default_mymemory_base")]
    pub mymemory_api_base: String,
    /// Preferred LibreTranslate endpoint, tried before the public mirrors
    #[serde(default)]
    pub libretranslate_url: Option<String>,
    /// LibreTranslate API key
    #[serde(default)]
    pub libretranslate_api_key: Option<String>,
    /// Public LibreTranslate mirrors in priority order
    #[serde(default = "default_libretranslate_mirrors")]
    pub libretranslate_mirrors: Vec<String>,
    /// Request timeout in seconds
    #[serde(default = "default_translation_timeout")]
    pub timeout: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            mymemory_api_base: default_mymemory_base(),
            libretranslate_url: None,
            libretranslate_api_key: None,
            libretranslate_mirrors: default_libretranslate_mirrors(),
            timeout: default_translation_timeout(),
        }
    }
}

impl TranslationConfig {
    pub fn apply_env(&mut self) -> Result<()> {
        if let Some(base) = env_var("MYMEMORY_API_BASE") {
            self.mymemory_api_base = base;
        }
        if let Some(url) = env_var("LIBRETRANSLATE_URL") {
            self.libretranslate_url = Some(url);
        }
        if let Some(key) = env_var("LIBRETRANSLATE_API_KEY") {
            self.libretranslate_api_key = Some(key);
        }
        Ok(())
    }

    /// LibreTranslate endpoints in the order they are attempted
    pub fn libretranslate_endpoints(&self) -> Vec<String> {
        let mut endpoints = Vec::with_capacity(self.libretranslate_mirrors.len() + 1);
        if let Some(url) = &self.libretranslate_url {
            endpoints.push(url.clone());
        }
        for mirror in &self.libretranslate_mirrors {
            if !endpoints.contains(mirror) {
                endpoints.push(mirror.clone());
            }
        }
        endpoints
    }
}

fn default_mymemory_base() -> String {
    MYMEMORY_API_BASE.to_string()
}

fn default_libretranslate_mirrors() -> Vec<String> {
    vec![
        "https://libretranslate.com/translate".to_string(),
        "https://translate.argosopentech.com/translate".to_string(),
        "https://libretranslate.de/translate".to_string(),
    ]
}

fn default_translation_timeout() -> u64 {
    20
}

/// Speech synthesis configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SpeechConfig {
    /// Route every request to the local eSpeak NG engine
    #[serde(default)]
    pub use_espeak: bool,
    #[serde(default)]
    pub espeak: EspeakConfig,
    #[serde(default)]
    pub elevenlabs: ElevenLabsConfig,
    #[serde(default)]
    pub huggingface: HuggingFaceConfig,
}

impl SpeechConfig {
    pub fn apply_env(&mut self) -> Result<()> {
        if let Some(flag) = env_var("USE_ESPEAK") {
            self.use_espeak = flag.eq_ignore_ascii_case("true");
        }
        if let Some(binary) = env_var("ESPEAK_BINARY") {
            self.espeak.binary = binary;
        }
        self.elevenlabs.apply_env();
        self.huggingface.apply_env();
        Ok(())
    }
}

/// Local eSpeak NG engine settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EspeakConfig {
    #[serde(default = "default_espeak_binary")]
    pub binary: String,
    /// Words per minute
    #[serde(default = "default_espeak_speed")]
    pub speed: u32,
    #[serde(default = "default_espeak_pitch")]
    pub pitch: u32,
    #[serde(default = "default_espeak_amplitude")]
    pub amplitude: u32,
}

impl Default for EspeakConfig {
    fn default() -> Self {
        Self {
            binary: default_espeak_binary(),
            speed: default_espeak_speed(),
            pitch: default_espeak_pitch(),
            amplitude: default_espeak_amplitude(),
        }
    }
}

fn default_espeak_binary() -> String {
    "espeak-ng".to_string()
}

fn default_espeak_speed() -> u32 {
    160
}

fn default_espeak_pitch() -> u32 {
    50
}

fn default_espeak_amplitude() -> u32 {
    100
}

/// ElevenLabs text-to-speech settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElevenLabsConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_elevenlabs_base")]
    pub api_base: String,
    #[serde(default = "default_elevenlabs_model")]
    pub model_id: String,
    #[serde(default)]
    pub voice_id_default: Option<String>,
    #[serde(default)]
    pub voice_id_yo: Option<String>,
    #[serde(default)]
    pub voice_id_ig: Option<String>,
    #[serde(default)]
    pub voice_id_ha: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_speech_timeout")]
    pub timeout: u64,
}

impl Default for ElevenLabsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: default_elevenlabs_base(),
            model_id: default_elevenlabs_model(),
            voice_id_default: None,
            voice_id_yo: None,
            voice_id_ig: None,
            voice_id_ha: None,
            timeout: default_speech_timeout(),
        }
    }
}

impl ElevenLabsConfig {
    fn apply_env(&mut self) {
        if let Some(key) = env_var("ELEVENLABS_API_KEY") {
            self.api_key = Some(key);
        }
        if let Some(base) = env_var("ELEVENLABS_API_BASE") {
            self.api_base = base;
        }
        if let Some(model) = env_var("ELEVENLABS_MODEL_ID") {
            self.model_id = model;
        }
        for (var, slot) in [
            ("ELEVENLABS_VOICE_ID_DEFAULT", &mut self.voice_id_default),
            ("ELEVENLABS_VOICE_ID_YO", &mut self.voice_id_yo),
            ("ELEVENLABS_VOICE_ID_IG", &mut self.voice_id_ig),
            ("ELEVENLABS_VOICE_ID_HA", &mut self.voice_id_ha),
        ] {
            if let Some(voice) = env_var(var) {
                *slot = Some(voice);
            }
        }
    }

    /// Whether an API key is configured
    pub fn is_enabled(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

fn default_elevenlabs_base() -> String {
    ELEVENLABS_API_BASE.to_string()
}

fn default_elevenlabs_model() -> String {
    "eleven_flash_v2_5".to_string()
}

fn default_speech_timeout() -> u64 {
    60
}

/// Hugging Face inference settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HuggingFaceConfig {
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default = "default_huggingface_base")]
    pub api_base: String,
    #[serde(default = "default_yoruba_model")]
    pub yoruba_model: String,
    #[serde(default = "default_igbo_model")]
    pub igbo_model: String,
    #[serde(default = "default_hausa_model")]
    pub hausa_model: String,
    /// Request timeout in seconds
    #[serde(default = "default_speech_timeout")]
    pub timeout: u64,
    /// Attempts against the primary model
    #[serde(default = "default_huggingface_attempts")]
    pub max_attempts: u32,
    /// Linear backoff unit in milliseconds
    #[serde(default = "default_huggingface_retry_delay")]
    pub retry_delay_ms: u64,
    /// Delay between Yoruba fallback attempts in milliseconds
    #[serde(default = "default_huggingface_fallback_delay")]
    pub fallback_delay_ms: u64,
}

impl Default for HuggingFaceConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            api_base: default_huggingface_base(),
            yoruba_model: default_yoruba_model(),
            igbo_model: default_igbo_model(),
            hausa_model: default_hausa_model(),
            timeout: default_speech_timeout(),
            max_attempts: default_huggingface_attempts(),
            retry_delay_ms: default_huggingface_retry_delay(),
            fallback_delay_ms: default_huggingface_fallback_delay(),
        }
    }
}

impl HuggingFaceConfig {
    fn apply_env(&mut self) {
        if let Some(token) = env_var("HF_API_TOKEN") {
            self.api_token = Some(token);
        }
        if let Some(base) = env_var("HF_API_BASE") {
            self.api_base = base;
        }
        if let Some(model) = env_var("TTS_YOR_MODEL") {
            self.yoruba_model = model;
        }
        if let Some(model) = env_var("TTS_IGB_MODEL") {
            self.igbo_model = model;
        }
        if let Some(model) = env_var("TTS_HAU_MODEL") {
            self.hausa_model = model;
        }
    }
}

fn default_huggingface_base() -> String {
    HUGGINGFACE_API_BASE.to_string()
}

fn default_yoruba_model() -> String {
    "Xenova/mms-tts-yor".to_string()
}

fn default_igbo_model() -> String {
    "facebook/mms-tts-ibo".to_string()
}

fn default_hausa_model() -> String {
    "facebook/mms-tts-hau".to_string()
}

fn default_huggingface_attempts() -> u32 {
    3
}

fn default_huggingface_retry_delay() -> u64 {
    2000
}

fn default_huggingface_fallback_delay() -> u64 {
    500
}

/// Chat-completion provider configuration (Groq, OpenAI-compatible)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_groq_base")]
    pub api_base: String,
    #[serde(default = "default_groq_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Request timeout in seconds
    #[serde(default = "default_speech_timeout")]
    pub timeout: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: default_groq_base(),
            model: default_groq_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout: default_speech_timeout(),
        }
    }
}

impl AssistantConfig {
    pub fn apply_env(&mut self) -> Result<()> {
        if let Some(key) = env_var("GROQ_API_KEY") {
            self.api_key = Some(key);
        }
        if let Some(base) = env_var("GROQ_API_BASE") {
            self.api_base = base;
        }
        if let Some(model) = env_var("GROQ_MODEL") {
            self.model = model;
        }
        Ok(())
    }
}

fn default_groq_base() -> String {
    GROQ_API_BASE.to_string()
}

fn default_groq_model() -> String {
    "llama-3.1-70b-versatile".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    1000
}
