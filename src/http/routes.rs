use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Session lifecycle
        .route("/sessions", post(handlers::create_session))
        .route(
            "/sessions/:session_id",
            get(handlers::get_session).delete(handlers::end_session),
        )
        .route("/sessions/:session_id/api-key", put(handlers::set_api_key))
        .route("/sessions/:session_id/reset", post(handlers::reset_session))
        // Transcript
        .route(
            "/sessions/:session_id/transcript",
            post(handlers::add_transcript),
        )
        .route(
            "/sessions/:session_id/transcript/export",
            get(handlers::export_transcript),
        )
        .route(
            "/sessions/:session_id/questions/export",
            get(handlers::export_questions),
        )
        // AI actions
        .route("/sessions/:session_id/ask", post(handlers::ask))
        .route("/sessions/:session_id/summary", post(handlers::summarize))
        .route(
            "/sessions/:session_id/conversation/export",
            get(handlers::export_conversation),
        )
        // The front end may be served from another origin
        .layer(CorsLayer::permissive())
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
