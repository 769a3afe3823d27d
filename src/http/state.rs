use crate::query::Dispatcher;
use crate::session::SessionStore;
use crate::transcription::{SimulatedTranscriber, Transcriber};
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// All sessions and transcripts
    pub store: Arc<SessionStore>,

    /// Query router over `store`
    pub dispatcher: Dispatcher,

    /// Speech-to-text provider for uploaded audio
    pub transcriber: Arc<dyn Transcriber>,
}

impl AppState {
    pub fn new(store: Arc<SessionStore>, transcriber: Arc<dyn Transcriber>) -> Self {
        Self {
            dispatcher: Dispatcher::new(Arc::clone(&store)),
            store,
            transcriber,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            Arc::new(SessionStore::new()),
            Arc::new(SimulatedTranscriber::default()),
        )
    }
}
