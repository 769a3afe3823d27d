use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named container of transcripts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Unique session identifier (e.g., "session_1729150000000_k3j9x0a1b")
    pub id: String,

    /// When the session was created
    pub created_at: DateTime<Utc>,

    /// Transcripts in the order they were appended
    pub transcripts: Vec<Transcript>,
}

/// One recognized utterance belonging to a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transcript {
    pub id: String,

    /// Recognized text
    pub text: String,

    /// Confidence score, nominally 0.0 to 1.0 (stored as given)
    pub confidence: f64,

    /// When this transcript was appended
    pub timestamp: DateTime<Utc>,

    /// Whether this is a final result (always true for appended transcripts)
    pub is_final: bool,
}

/// Emitted on the store's event feed for every appended transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptEvent {
    pub session_id: String,
    pub transcript: Transcript,
}
