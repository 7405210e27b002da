//! Per-user assistant sessions
//!
//! This module provides:
//! - `SessionState` - the transcript and conversation of one user session
//! - `MeetingAssistant` - Q&A, summary and auto-response against the AI service
//! - Session statistics and plain-text export

mod assistant;
mod config;
pub mod export;
mod state;
mod stats;

pub use assistant::{Answer, MeetingAssistant, TranscriptAdded, SUMMARY_REQUEST};
pub use config::AssistantSettings;
pub use state::{ConversationTurn, Role, SessionState, TranscriptEntry};
pub use stats::SessionStats;
