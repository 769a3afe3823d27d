//! Session and transcript storage
//!
//! This module owns all session state:
//! - `Session` / `Transcript` records
//! - `SessionStore`, the in-memory store with create/get/list/delete/append
//! - Identifier generation for sessions and transcripts
//! - The transcript event feed consumed by SSE and NATS

mod error;
mod id;
mod model;
mod store;

pub use error::QueryError;
pub use id::new_id;
pub use model::{Session, Transcript, TranscriptEvent};
pub use store::SessionStore;
