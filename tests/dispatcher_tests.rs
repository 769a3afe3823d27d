// Integration tests for query dispatch
//
// These tests drive the dispatcher the way the HTTP endpoint does and check
// the envelopes it produces.

use loqa_sessions::{Dispatcher, QueryRequest, QueryResponse, SessionStore};
use serde_json::{json, Value};
use std::sync::Arc;

fn dispatcher() -> (Dispatcher, Arc<SessionStore>) {
    let store = Arc::new(SessionStore::new());
    (Dispatcher::new(Arc::clone(&store)), store)
}

async fn create_session(dispatcher: &Dispatcher) -> String {
    let response = dispatcher
        .dispatch(&QueryRequest::new("mutation { createSession { id createdAt } }"))
        .await;

    response.data("createSession").unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_create_session_envelope() {
    let (dispatcher, store) = dispatcher();

    let response = dispatcher
        .dispatch(&QueryRequest::new("mutation { createSession { id } }"))
        .await;

    let json = serde_json::to_value(&response).unwrap();
    assert!(json.get("errors").is_none());

    let session = &json["data"]["createSession"];
    let id = session["id"].as_str().unwrap();
    assert!(id.starts_with("session_"));
    assert!(session["createdAt"].is_string());
    assert_eq!(session["transcripts"], json!([]));
    assert!(store.get_session(id).await.is_some());
}

#[tokio::test]
async fn test_bare_operation_name_is_routed() {
    let (dispatcher, store) = dispatcher();

    let response = dispatcher.dispatch(&QueryRequest::new("createSession")).await;

    assert!(response.data("createSession").is_some());
    assert_eq!(store.session_count().await, 1);
}

#[tokio::test]
async fn test_unknown_query_is_not_supported() {
    let (dispatcher, _) = dispatcher();

    let response = dispatcher.dispatch(&QueryRequest::new("foo")).await;

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({ "errors": [{ "message": "Query not supported" }] })
    );
}

#[tokio::test]
async fn test_similar_operation_name_does_not_misroute() {
    let (dispatcher, store) = dispatcher();

    let response = dispatcher
        .dispatch(&QueryRequest::new("mutation { createSessionLegacy { id } }"))
        .await;

    assert_eq!(response.error_message(), Some("Query not supported"));
    assert_eq!(store.session_count().await, 0);
}

#[tokio::test]
async fn test_add_transcript() {
    let (dispatcher, store) = dispatcher();
    let session_id = create_session(&dispatcher).await;

    let request = QueryRequest::new(
        "mutation AddTranscript($sessionId: ID!, $text: String!, $confidence: Float!) {\n  addTranscript(sessionId: $sessionId, text: $text, confidence: $confidence) { id text }\n}",
    )
    .with_variables(json!({ "sessionId": session_id, "text": "hello", "confidence": 0.9 }));

    let response = dispatcher.dispatch(&request).await;
    let transcript = response.data("addTranscript").expect("success envelope");

    assert_eq!(transcript["text"], "hello");
    assert_eq!(transcript["confidence"], 0.9);
    assert_eq!(transcript["isFinal"], true);

    let session = store.get_session(&session_id).await.unwrap();
    assert_eq!(session.transcripts.len(), 1);
    assert_eq!(session.transcripts[0].text, "hello");
}

#[tokio::test]
async fn test_add_transcript_to_missing_session() {
    let (dispatcher, store) = dispatcher();

    let request = QueryRequest::new("mutation { addTranscript { id } }")
        .with_variables(json!({ "sessionId": "session_nope", "text": "hello", "confidence": 0.9 }));

    let response = dispatcher.dispatch(&request).await;

    assert_eq!(response, QueryResponse::failure("Session not found"));
    assert_eq!(store.session_count().await, 0);
}

#[tokio::test]
async fn test_add_transcript_with_missing_variables_is_malformed() {
    let (dispatcher, store) = dispatcher();
    let session_id = create_session(&dispatcher).await;

    let request = QueryRequest::new("mutation { addTranscript { id } }")
        .with_variables(json!({ "text": "hello", "confidence": 0.9 }));

    let response = dispatcher.dispatch(&request).await;

    let message = response.error_message().expect("error envelope");
    assert!(message.starts_with("Malformed request"), "got {}", message);
    assert!(message.contains("sessionId"), "got {}", message);
    assert!(store.get_session(&session_id).await.unwrap().transcripts.is_empty());
}

#[tokio::test]
async fn test_get_session_by_id() {
    let (dispatcher, _) = dispatcher();
    let session_id = create_session(&dispatcher).await;

    let request = QueryRequest::new("query GetSession($id: ID!) { session(id: $id) { id } }")
        .with_variables(json!({ "id": session_id }));

    let first = dispatcher.dispatch(&request).await;
    let second = dispatcher.dispatch(&request).await;

    assert_eq!(first.data("session").unwrap()["id"], json!(session_id));
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_get_missing_session_is_null() {
    let (dispatcher, _) = dispatcher();

    let request = QueryRequest::new("query { session(id: $id) { id } }")
        .with_variables(json!({ "id": "session_nope" }));

    let response = dispatcher.dispatch(&request).await;

    assert_eq!(response.data("session"), Some(&Value::Null));
}

#[tokio::test]
async fn test_list_sessions_in_creation_order() {
    let (dispatcher, _) = dispatcher();
    let a = create_session(&dispatcher).await;
    let b = create_session(&dispatcher).await;
    let c = create_session(&dispatcher).await;

    let delete = QueryRequest::new("mutation { deleteSession(id: $id) }")
        .with_variables(json!({ "id": b }));
    assert_eq!(
        dispatcher.dispatch(&delete).await.data("deleteSession"),
        Some(&json!(true))
    );
    assert_eq!(
        dispatcher.dispatch(&delete).await.data("deleteSession"),
        Some(&json!(false))
    );

    let response = dispatcher
        .dispatch(&QueryRequest::new("query { sessions { id } }"))
        .await;

    let ids: Vec<&str> = response
        .data("sessions")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();

    assert_eq!(ids, vec![a.as_str(), c.as_str()]);
}

#[tokio::test]
async fn test_null_variables_are_accepted_for_argument_free_operations() {
    let (dispatcher, _) = dispatcher();

    let request = QueryRequest::new("{ sessions { id } }").with_variables(Value::Null);
    let response = dispatcher.dispatch(&request).await;

    assert_eq!(response.data("sessions"), Some(&json!([])));
}
