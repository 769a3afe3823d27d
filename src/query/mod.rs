//! Query dispatch
//!
//! Requests arrive as `{query, variables}`. The root field of `query` selects
//! one `Operation`; its variables are decoded into typed arguments; the
//! `Dispatcher` runs it against the `SessionStore` and wraps the result in a
//! `QueryResponse` envelope.

mod dispatcher;
mod envelope;
mod operation;
mod schema;

pub use dispatcher::Dispatcher;
pub use envelope::{ErrorMessage, QueryResponse};
pub use operation::{root_field, AddTranscriptArgs, Operation, QueryRequest, SessionIdArgs};
pub use schema::SCHEMA;
