//! HTTP API for the browser front end
//!
//! This module provides a JSON API over assistant sessions:
//! - POST /sessions - Start a session
//! - GET /sessions/:id - Transcript, conversation and stats
//! - DELETE /sessions/:id - End a session
//! - PUT /sessions/:id/api-key - Set the session's AI key
//! - POST /sessions/:id/transcript - Add a transcript line
//! - POST /sessions/:id/ask - Ask about the meeting
//! - POST /sessions/:id/summary - Summarize the meeting
//! - POST /sessions/:id/reset - Clear transcript and conversation
//! - GET /sessions/:id/transcript/export - Transcript as text
//! - GET /sessions/:id/conversation/export - Conversation as text
//! - GET /sessions/:id/questions/export - Detected questions as text
//! - GET /health - Health check

mod error;
mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
