use crate::session::TranscriptEvent;
use serde::{Deserialize, Serialize};

/// Transcript message published to NATS for each appended transcript
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptMessage {
    pub session_id: String,
    pub transcript_id: String,
    pub text: String,
    pub partial: bool,
    pub timestamp: String,  // RFC3339 timestamp
    pub confidence: f64,
}

impl From<&TranscriptEvent> for TranscriptMessage {
    fn from(event: &TranscriptEvent) -> Self {
        Self {
            session_id: event.session_id.clone(),
            transcript_id: event.transcript.id.clone(),
            text: event.transcript.text.clone(),
            partial: !event.transcript.is_final,
            timestamp: event.transcript.timestamp.to_rfc3339(),
            confidence: event.transcript.confidence,
        }
    }
}
