//! Local eSpeak NG engine

use super::{Audio, SpeechSynthesizer, SynthesisError};
use crate::config::EspeakConfig;
use async_trait::async_trait;
use bytes::Bytes;
use tokio::process::Command;
use tracing::debug;

/// Runs `espeak-ng --stdout` and returns the WAV it writes
#[derive(Debug, Clone)]
pub struct EspeakSynthesizer {
    config: EspeakConfig,
}

impl EspeakSynthesizer {
    pub fn new(config: &EspeakConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// eSpeak voice for a normalized tag
    pub fn voice_for(lang: &str) -> &'static str {
        match lang {
            "yo-NG" => "yoruba",
            "ig-NG" => "igbo",
            "ha-NG" => "hausa",
            _ => "en",
        }
    }

    fn command(&self, text: &str, voice: &str) -> Command {
        let mut cmd = Command::new(&self.config.binary);
        cmd.arg("-s")
            .arg(self.config.speed.to_string())
            .arg("-p")
            .arg(self.config.pitch.to_string())
            .arg("-a")
            .arg(self.config.amplitude.to_string())
            .arg("-v")
            .arg(voice)
            .arg("--stdout")
            .arg(text)
            .kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl SpeechSynthesizer for EspeakSynthesizer {
    fn name(&self) -> &str {
        "espeak"
    }

    async fn synthesize(&self, text: &str, lang: &str) -> Result<Audio, SynthesisError> {
        let voice = Self::voice_for(lang);
        debug!("eSpeak synthesis: lang={} voice={}", lang, voice);

        let output = self
            .command(text, voice)
            .output()
            .await
            .map_err(|e| SynthesisError::Backend(format!("espeak-ng failed: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SynthesisError::Backend(format!(
                "espeak-ng failed: {} - {}",
                stderr.trim(),
                output.status
            )));
        }

        Ok(Audio {
            bytes: Bytes::from(output.stdout),
            content_type: "audio/wav".to_string(),
        })
    }
}
