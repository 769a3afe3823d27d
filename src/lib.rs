pub mod config;
pub mod http;
pub mod nats;
pub mod query;
pub mod session;
pub mod transcription;

pub use config::Config;
pub use http::{create_router, AppState};
pub use nats::{NatsClient, TranscriptMessage};
pub use query::{Dispatcher, Operation, QueryRequest, QueryResponse};
pub use session::{QueryError, Session, SessionStore, Transcript, TranscriptEvent};
pub use transcription::{AudioClip, SimulatedTranscriber, Transcriber, TranscriptionResult};
