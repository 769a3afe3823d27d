use super::envelope::QueryResponse;
use super::operation::{Operation, QueryRequest};
use crate::session::{QueryError, SessionStore};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};

/// Routes decoded operations to the session store
#[derive(Clone)]
pub struct Dispatcher {
    store: Arc<SessionStore>,
}

impl Dispatcher {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }

    /// Execute a request. Every failure is folded into the error envelope.
    pub async fn dispatch(&self, request: &QueryRequest) -> QueryResponse {
        let operation = match Operation::decode(request) {
            Ok(operation) => operation,
            Err(e) => {
                warn!("Rejected query: {}", e);
                return e.into();
            }
        };

        let name = operation.name();
        debug!("Dispatching {}", name);

        match self.execute(operation).await {
            Ok(value) => QueryResponse::success(name, value),
            Err(e) => {
                warn!("{} failed: {}", name, e);
                e.into()
            }
        }
    }

    async fn execute(&self, operation: Operation) -> Result<Value, QueryError> {
        let value = match operation {
            Operation::CreateSession => json!(self.store.create_session().await),
            Operation::AddTranscript(args) => json!(
                self.store
                    .append_transcript(&args.session_id, args.text, args.confidence)
                    .await?
            ),
            Operation::GetSession(args) => json!(self.store.get_session(&args.id).await),
            Operation::ListSessions => json!(self.store.list_sessions().await),
            Operation::DeleteSession(args) => json!(self.store.delete_session(&args.id).await),
        };

        Ok(value)
    }
}
