pub mod ai;
pub mod config;
pub mod detect;
pub mod error;
pub mod http;
pub mod prompt;
pub mod session;

pub use ai::{
    Complexity, CompletionProvider, CompletionRequest, GeminiProvider, ModelRouter, ModelRoutes,
};
pub use config::Config;
pub use detect::{DetectedQuestion, QuestionDetector};
pub use error::{AssistantError, ServiceError};
pub use http::{create_router, AppState};
pub use prompt::PromptComposer;
pub use session::{
    Answer, AssistantSettings, ConversationTurn, MeetingAssistant, Role, SessionState,
    SessionStats, TranscriptAdded, TranscriptEntry,
};
