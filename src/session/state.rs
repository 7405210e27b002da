use crate::detect::DetectedQuestion;
use crate::error::{AssistantError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded utterance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Zero-based insertion position
    pub sequence: usize,

    /// Who said it
    pub speaker: String,

    /// What was said
    pub content: String,

    /// When the line was added to the session
    pub recorded_at: DateTime<Utc>,
}

/// Who authored a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One message of the Q&A exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,

    pub text: String,

    /// Model that produced an assistant turn; `None` for user turns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    pub at: DateTime<Utc>,
}

/// State for one user's interactive session.
///
/// Transcript entries and conversation turns are append-only until `reset`.
/// The value is owned by whoever drives the session; nothing in here is
/// shared or global.
#[derive(Debug, Clone)]
pub struct SessionState {
    id: String,
    started_at: DateTime<Utc>,
    api_key: Option<String>,
    transcript: Vec<TranscriptEntry>,
    conversation: Vec<ConversationTurn>,
    questions: Vec<DetectedQuestion>,
}

impl SessionState {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            started_at: Utc::now(),
            api_key: None,
            transcript: Vec::new(),
            conversation: Vec::new(),
            questions: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Append a transcript line. Blank speaker or content is rejected and
    /// leaves the transcript untouched. Content is stored as given.
    pub fn append_transcript(
        &mut self,
        speaker: &str,
        content: &str,
    ) -> Result<&TranscriptEntry> {
        let speaker = speaker.trim();

        if speaker.is_empty() {
            return Err(AssistantError::validation("speaker name is required"));
        }
        if content.trim().is_empty() {
            return Err(AssistantError::validation("transcript content is required"));
        }

        let entry = TranscriptEntry {
            sequence: self.transcript.len(),
            speaker: speaker.to_string(),
            content: content.to_string(),
            recorded_at: Utc::now(),
        };
        self.transcript.push(entry);

        Ok(&self.transcript[self.transcript.len() - 1])
    }

    pub fn append_turn(&mut self, role: Role, text: impl Into<String>) {
        self.push_turn(role, text.into(), None);
    }

    /// Append an assistant turn tagged with the model that produced it
    pub fn append_answer(&mut self, text: impl Into<String>, model: impl Into<String>) {
        self.push_turn(Role::Assistant, text.into(), Some(model.into()));
    }

    fn push_turn(&mut self, role: Role, text: String, model: Option<String>) {
        self.conversation.push(ConversationTurn {
            role,
            text,
            model,
            at: Utc::now(),
        });
    }

    pub fn record_questions(&mut self, questions: impl IntoIterator<Item = DetectedQuestion>) {
        self.questions.extend(questions);
    }

    /// Clear transcript, conversation and detected questions. The API key
    /// stays so the user does not have to re-enter it.
    pub fn reset(&mut self) {
        self.transcript.clear();
        self.conversation.clear();
        self.questions.clear();
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn conversation(&self) -> &[ConversationTurn] {
        &self.conversation
    }

    pub fn questions(&self) -> &[DetectedQuestion] {
        &self.questions
    }

    /// Store the user's key. Only presence is checked; the provider decides
    /// whether it is valid.
    pub fn set_api_key(&mut self, key: &str) -> Result<()> {
        let key = key.trim();
        if key.is_empty() {
            return Err(AssistantError::credential("API key must not be empty"));
        }
        self.api_key = Some(key.to_string());
        Ok(())
    }

    pub fn clear_api_key(&mut self) {
        self.api_key = None;
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}
