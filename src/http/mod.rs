//! HTTP API server
//!
//! This module exposes the session store over HTTP:
//! - POST /api/graphql - Run a query (createSession, addTranscript, session, sessions, deleteSession)
//! - GET /api/graphql - Schema description
//! - POST /api/speech-to-text - Transcribe an uploaded audio clip
//! - GET /api/sessions/:id/events - Server-sent transcript events
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
