use crate::error::{AssistantError, Result};
use crate::session::{MeetingAssistant, SessionState};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Active sessions (session_id → state). The per-session mutex is held
    /// for the whole of an action, AI call included, so one session's
    /// actions never interleave.
    pub sessions: Arc<RwLock<HashMap<String, Arc<Mutex<SessionState>>>>>,

    pub assistant: Arc<MeetingAssistant>,
}

impl AppState {
    pub fn new(assistant: MeetingAssistant) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            assistant: Arc::new(assistant),
        }
    }

    /// Look up a session, releasing the registry lock before returning.
    pub async fn session(&self, id: &str) -> Result<Arc<Mutex<SessionState>>> {
        let sessions = self.sessions.read().await;
        sessions
            .get(id)
            .cloned()
            .ok_or_else(|| AssistantError::SessionNotFound(id.to_string()))
    }
}
