use super::clip::AudioClip;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

/// Timing for one recognized word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordTiming {
    pub word: String,
    pub start_time: String,
    pub end_time: String,
}

/// What a speech-to-text provider returns for one clip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionResult {
    pub transcript: String,
    pub confidence: f64,
    pub words: Vec<WordTiming>,
}

/// Speech-to-text provider
///
/// Implementations:
/// - `SimulatedTranscriber`: fixed result after a configurable delay
#[async_trait::async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe one uploaded clip
    async fn transcribe(&self, clip: &AudioClip) -> Result<TranscriptionResult>;

    /// Provider name for logging
    fn name(&self) -> &str;
}

/// Stands in for a cloud recognizer: waits, then returns a canned transcript
pub struct SimulatedTranscriber {
    delay: Duration,
}

impl SimulatedTranscriber {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedTranscriber {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

#[async_trait::async_trait]
impl Transcriber for SimulatedTranscriber {
    async fn transcribe(&self, clip: &AudioClip) -> Result<TranscriptionResult> {
        info!("Processing audio clip, size: {}", clip.len());

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let words = [
            ("This", "0s", "0.3s"),
            ("is", "0.3s", "0.5s"),
            ("a", "0.5s", "0.6s"),
            ("simulated", "0.6s", "1.2s"),
            ("transcript", "1.2s", "1.8s"),
        ]
        .into_iter()
        .map(|(word, start, end)| WordTiming {
            word: word.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
        })
        .collect();

        Ok(TranscriptionResult {
            transcript: "This is a simulated transcript from the server".to_string(),
            confidence: 0.95,
            words,
        })
    }

    fn name(&self) -> &str {
        "simulated"
    }
}
