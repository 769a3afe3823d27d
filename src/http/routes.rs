use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Query endpoint
        .route(
            "/api/graphql",
            get(handlers::describe_schema).post(handlers::execute_query),
        )
        // Audio upload
        .route("/api/speech-to-text", post(handlers::speech_to_text))
        // Live transcripts
        .route(
            "/api/sessions/:session_id/events",
            get(handlers::session_events),
        )
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
