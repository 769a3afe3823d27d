use super::error::QueryError;
use super::id::new_id;
use super::model::{Session, Transcript, TranscriptEvent};
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info};

const DEFAULT_EVENT_CAPACITY: usize = 256;

#[derive(Default)]
struct Inner {
    sessions: HashMap<String, Session>,
    /// Session ids in creation order
    order: Vec<String>,
}

/// In-memory owner of all sessions and their transcripts
///
/// A single lock covers the map and every transcript list, so concurrent
/// appends to one session are applied in the order they acquire it. Readers
/// get cloned snapshots.
pub struct SessionStore {
    inner: RwLock<Inner>,
    events: broadcast::Sender<TranscriptEvent>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_event_capacity(DEFAULT_EVENT_CAPACITY)
    }

    /// Create a store whose transcript feed buffers `capacity` events per subscriber
    pub fn with_event_capacity(capacity: usize) -> Self {
        let (events, _) = broadcast::channel(capacity.max(1));
        Self {
            inner: RwLock::new(Inner::default()),
            events,
        }
    }

    /// Create an empty session and return a snapshot of it
    pub async fn create_session(&self) -> Session {
        let mut inner = self.inner.write().await;

        let mut id = new_id("session");
        while inner.sessions.contains_key(&id) {
            id = new_id("session");
        }

        let session = Session {
            id: id.clone(),
            created_at: Utc::now(),
            transcripts: Vec::new(),
        };

        inner.sessions.insert(id.clone(), session.clone());
        inner.order.push(id);

        info!("Created session {}", session.id);
        session
    }

    pub async fn get_session(&self, id: &str) -> Option<Session> {
        let inner = self.inner.read().await;
        inner.sessions.get(id).cloned()
    }

    /// All live sessions in creation order
    pub async fn list_sessions(&self) -> Vec<Session> {
        let inner = self.inner.read().await;
        inner
            .order
            .iter()
            .filter_map(|id| inner.sessions.get(id))
            .cloned()
            .collect()
    }

    /// Remove a session and its transcripts. Returns whether anything was removed.
    pub async fn delete_session(&self, id: &str) -> bool {
        let mut inner = self.inner.write().await;

        if inner.sessions.remove(id).is_none() {
            debug!("Delete of unknown session {}", id);
            return false;
        }

        inner.order.retain(|existing| existing != id);
        info!("Deleted session {}", id);
        true
    }

    /// Append a final transcript to an existing session
    pub async fn append_transcript(
        &self,
        session_id: &str,
        text: impl Into<String>,
        confidence: f64,
    ) -> Result<Transcript, QueryError> {
        let transcript = {
            let mut inner = self.inner.write().await;

            let session = inner
                .sessions
                .get_mut(session_id)
                .ok_or_else(|| QueryError::SessionNotFound(session_id.to_string()))?;

            let transcript = Transcript {
                id: new_id("transcript"),
                text: text.into(),
                confidence,
                timestamp: Utc::now(),
                is_final: true,
            };

            session.transcripts.push(transcript.clone());

            // Sent under the write guard so feed order matches stored order.
            // No subscribers is fine.
            let _ = self.events.send(TranscriptEvent {
                session_id: session_id.to_string(),
                transcript: transcript.clone(),
            });

            transcript
        };

        info!(
            "Appended transcript {} to session {} (confidence={:.2})",
            transcript.id, session_id, transcript.confidence
        );

        Ok(transcript)
    }

    pub async fn session_count(&self) -> usize {
        self.inner.read().await.sessions.len()
    }

    /// Subscribe to transcripts appended after this call
    pub fn subscribe(&self) -> broadcast::Receiver<TranscriptEvent> {
        self.events.subscribe()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
