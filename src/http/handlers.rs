use super::state::AppState;
use crate::query::{QueryRequest, QueryResponse, SCHEMA};
use crate::session::{QueryError, Transcript};
use crate::transcription::{AudioClip, TranscriptionResult};
use axum::{
    extract::{
        multipart::{Multipart, MultipartError, MultipartRejection},
        rejection::JsonRejection,
        Path, State,
    },
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Json, Response,
    },
};
use serde::Serialize;
use serde_json::json;
use tokio::sync::broadcast::error::RecvError;
use tracing::{error, info, warn};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SpeechToTextResponse {
    pub success: bool,
    pub data: SpeechToTextData,
}

#[derive(Debug, Serialize)]
pub struct SpeechToTextData {
    #[serde(flatten)]
    pub result: TranscriptionResult,

    /// Transcript appended to `sessionId`, when the upload named one
    #[serde(rename = "transcriptRecord", skip_serializing_if = "Option::is_none")]
    pub transcript_record: Option<Transcript>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/graphql
/// Run one query against the session store
pub async fn execute_query(
    State(state): State<AppState>,
    body: Result<Json<QueryRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(e) => {
            error!("Query error: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(QueryResponse::failure("Internal server error")),
            )
                .into_response();
        }
    };

    let response = state.dispatcher.dispatch(&request).await;
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /api/graphql
/// Describe the query endpoint
pub async fn describe_schema() -> impl IntoResponse {
    Json(json!({
        "message": "GraphQL endpoint - use POST with query and variables",
        "schema": SCHEMA,
    }))
}

/// POST /api/speech-to-text
/// Transcribe an uploaded `audio` part, optionally appending it to `sessionId`
pub async fn speech_to_text(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let upload = match multipart {
        Ok(multipart) => read_upload(multipart).await,
        Err(e) => {
            error!("Speech-to-text error: {}", e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to process audio");
        }
    };

    let (clip, session_id) = match upload {
        Ok((Some(clip), session_id)) => (clip, session_id),
        Ok((None, _)) => {
            return error_response(StatusCode::BAD_REQUEST, "No audio file provided");
        }
        Err(e) => {
            error!("Speech-to-text error: {}", e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to process audio");
        }
    };

    // Unknown session: reject before transcribing
    if let Some(id) = &session_id {
        if state.store.get_session(id).await.is_none() {
            return error_response(StatusCode::NOT_FOUND, format!("Session {} not found", id));
        }
    }

    let result = match state.transcriber.transcribe(&clip).await {
        Ok(result) => result,
        Err(e) => {
            error!("Transcriber {} failed: {:#}", state.transcriber.name(), e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to process audio");
        }
    };

    let transcript_record = match &session_id {
        Some(id) => match state
            .store
            .append_transcript(id, result.transcript.clone(), result.confidence)
            .await
        {
            Ok(transcript) => Some(transcript),
            Err(QueryError::SessionNotFound(_)) => {
                return error_response(StatusCode::NOT_FOUND, format!("Session {} not found", id));
            }
            Err(e) => {
                error!("Failed to append transcript: {}", e);
                return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to process audio");
            }
        },
        None => None,
    };

    (
        StatusCode::OK,
        Json(SpeechToTextResponse {
            success: true,
            data: SpeechToTextData {
                result,
                transcript_record,
            },
        }),
    )
        .into_response()
}

/// Pull the `audio` part and optional `sessionId` part out of the form
async fn read_upload(
    mut multipart: Multipart,
) -> Result<(Option<AudioClip>, Option<String>), MultipartError> {
    let mut clip = None;
    let mut session_id = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("audio") => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                clip = Some(AudioClip::new(bytes.to_vec(), file_name, content_type));
            }
            Some("sessionId") => {
                let text = field.text().await?;
                let text = text.trim();
                if !text.is_empty() {
                    session_id = Some(text.to_string());
                }
            }
            other => {
                warn!("Ignoring unexpected form field {:?}", other);
            }
        }
    }

    Ok((clip, session_id))
}

/// GET /api/sessions/:session_id/events
/// Stream `transcriptAdded` events for one session
pub async fn session_events(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    // Subscribe before the existence check so no append slips between them
    let events = state.store.subscribe();

    if state.store.get_session(&session_id).await.is_none() {
        return error_response(
            StatusCode::NOT_FOUND,
            format!("Session {} not found", session_id),
        );
    }

    info!("Opened transcript stream for session {}", session_id);

    let stream = futures::stream::unfold((events, session_id), |(mut events, session_id)| async move {
        loop {
            match events.recv().await {
                Ok(event) if event.session_id == session_id => {
                    let sse = Event::default()
                        .event("transcriptAdded")
                        .json_data(&event.transcript);
                    return Some((sse, (events, session_id)));
                }
                Ok(_) => continue,
                Err(RecvError::Lagged(skipped)) => {
                    warn!(
                        "Transcript stream for {} lagged, skipped {} events",
                        session_id, skipped
                    );
                }
                Err(RecvError::Closed) => return None,
            }
        }
    });

    Sse::new(stream)
        .keep_alive(KeepAlive::default())
        .into_response()
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
