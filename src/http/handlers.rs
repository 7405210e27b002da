use super::error::ApiError;
use super::state::AppState;
use crate::ai::Complexity;
use crate::detect::DetectedQuestion;
use crate::error::AssistantError;
use crate::session::{
    export, Answer, ConversationTurn, SessionState, SessionStats, TranscriptAdded,
    TranscriptEntry,
};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

type ApiResult<T> = Result<T, ApiError>;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: String,
}

// Missing text fields default to empty so they fail validation as JSON errors.

#[derive(Debug, Deserialize)]
pub struct SetApiKeyRequest {
    #[serde(default)]
    pub api_key: String,
}

#[derive(Debug, Deserialize)]
pub struct AddTranscriptRequest {
    #[serde(default)]
    pub speaker: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,

    /// Force a model tier instead of classifying the question
    pub complexity: Option<Complexity>,
}

/// Everything the front end needs to redraw a session
#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub session_id: String,
    pub has_api_key: bool,
    pub transcript: Vec<TranscriptEntry>,
    pub conversation: Vec<ConversationTurn>,
    pub questions: Vec<DetectedQuestion>,
    pub stats: SessionStats,
}

impl SessionSnapshot {
    fn of(state: &SessionState) -> Self {
        Self {
            session_id: state.id().to_string(),
            has_api_key: state.has_api_key(),
            transcript: state.transcript().to_vec(),
            conversation: state.conversation().to_vec(),
            questions: state.questions().to_vec(),
            stats: SessionStats::collect(state),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /sessions
/// Start a new, empty session
pub async fn create_session(State(state): State<AppState>) -> impl IntoResponse {
    let session_id = format!("session-{}", uuid::Uuid::new_v4());

    {
        let mut sessions = state.sessions.write().await;
        sessions.insert(
            session_id.clone(),
            Arc::new(Mutex::new(SessionState::new(session_id.clone()))),
        );
    }

    info!("Created session {}", session_id);

    (
        StatusCode::CREATED,
        Json(SessionCreatedResponse { session_id }),
    )
}

/// GET /sessions/:session_id
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<SessionSnapshot>> {
    let session = state.session(&session_id).await?;
    let session = session.lock().await;
    Ok(Json(SessionSnapshot::of(&session)))
}

/// DELETE /sessions/:session_id
/// End a session and discard its state
pub async fn end_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<StatusCode> {
    let removed = {
        let mut sessions = state.sessions.write().await;
        sessions.remove(&session_id)
    };

    match removed {
        Some(_) => {
            info!("Ended session {}", session_id);
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(AssistantError::SessionNotFound(session_id).into()),
    }
}

/// PUT /sessions/:session_id/api-key
pub async fn set_api_key(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<SetApiKeyRequest>,
) -> ApiResult<StatusCode> {
    let session = state.session(&session_id).await?;
    session.lock().await.set_api_key(&req.api_key)?;

    info!("API key configured for session {}", session_id);
    Ok(StatusCode::NO_CONTENT)
}

/// POST /sessions/:session_id/transcript
/// Add a transcript line; may trigger auto-responses
pub async fn add_transcript(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<AddTranscriptRequest>,
) -> ApiResult<(StatusCode, Json<TranscriptAdded>)> {
    let session = state.session(&session_id).await?;
    let mut session = session.lock().await;

    let added = state
        .assistant
        .add_transcript(&mut session, &req.speaker, &req.content)
        .await?;

    info!(
        "Session {}: transcript entry #{} from {} ({} questions, {} auto-answers)",
        session_id,
        added.entry.sequence,
        added.entry.speaker,
        added.questions.len(),
        added.auto_answers.len()
    );

    Ok((StatusCode::CREATED, Json(added)))
}

/// POST /sessions/:session_id/ask
pub async fn ask(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(req): Json<AskRequest>,
) -> ApiResult<Json<Answer>> {
    let session = state.session(&session_id).await?;
    let mut session = session.lock().await;

    let answer = state
        .assistant
        .ask(&mut session, &req.question, req.complexity)
        .await?;

    Ok(Json(answer))
}

/// POST /sessions/:session_id/summary
pub async fn summarize(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<Answer>> {
    let session = state.session(&session_id).await?;
    let mut session = session.lock().await;

    let answer = state.assistant.summarize(&mut session).await?;

    Ok(Json(answer))
}

/// POST /sessions/:session_id/reset
/// Clear transcript, conversation and detected questions
pub async fn reset_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<SessionSnapshot>> {
    let session = state.session(&session_id).await?;
    let mut session = session.lock().await;

    session.reset();
    info!("Session {} reset", session_id);

    Ok(Json(SessionSnapshot::of(&session)))
}

/// GET /sessions/:session_id/transcript/export
pub async fn export_transcript(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let session = state.session(&session_id).await?;
    let body = export::transcript_text(session.lock().await.transcript());

    Ok(text_download("meeting_transcript", body))
}

/// GET /sessions/:session_id/conversation/export
pub async fn export_conversation(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let session = state.session(&session_id).await?;
    let body = export::conversation_text(session.lock().await.conversation());

    Ok(text_download("ai_responses", body))
}

/// GET /sessions/:session_id/questions/export
pub async fn export_questions(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let session = state.session(&session_id).await?;
    let body = export::questions_text(session.lock().await.questions());

    Ok(text_download("questions", body))
}

fn text_download(prefix: &str, body: String) -> impl IntoResponse {
    let disposition = format!(
        "attachment; filename=\"{}\"",
        export::file_name(prefix, Utc::now())
    );
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
