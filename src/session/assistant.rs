use super::config::AssistantSettings;
use super::state::{Role, SessionState, TranscriptEntry};
use crate::ai::{Complexity, CompletionProvider, CompletionRequest, ModelRouter};
use crate::detect::{DetectedQuestion, QuestionDetector};
use crate::error::{AssistantError, Result};
use crate::prompt::PromptComposer;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// User turn recorded when a summary is requested
pub const SUMMARY_REQUEST: &str = "Generate a meeting summary";

/// A completed AI response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// The question asked, or `SUMMARY_REQUEST`
    pub question: String,

    /// Provider text, unmodified
    pub text: String,

    /// Model that produced the text
    pub model: String,

    pub complexity: Complexity,
}

/// Result of adding one transcript line
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptAdded {
    pub entry: TranscriptEntry,

    /// Questions detected in the new line
    pub questions: Vec<DetectedQuestion>,

    /// Answers produced automatically for confident questions
    pub auto_answers: Vec<Answer>,
}

/// Drives the user actions of a session against the AI service.
///
/// Holds no session data itself: every operation takes the `SessionState`
/// it acts on. A failed AI call leaves that state exactly as it was.
pub struct MeetingAssistant {
    provider: Arc<dyn CompletionProvider>,
    router: ModelRouter,
    composer: PromptComposer,
    detector: QuestionDetector,
    settings: AssistantSettings,
}

impl MeetingAssistant {
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        router: ModelRouter,
        settings: AssistantSettings,
    ) -> Self {
        Self {
            provider,
            router,
            composer: PromptComposer::new(settings.context_window),
            detector: QuestionDetector::new(),
            settings,
        }
    }

    /// Append a transcript line, record any questions in it and, when
    /// enabled, answer the confident ones.
    ///
    /// Auto-response failures are logged and do not fail the append.
    pub async fn add_transcript(
        &self,
        state: &mut SessionState,
        speaker: &str,
        content: &str,
    ) -> Result<TranscriptAdded> {
        let entry = state.append_transcript(speaker, content)?.clone();

        let questions = self.detector.extract_questions(&entry.content, entry.sequence);
        state.record_questions(questions.iter().cloned());

        let mut auto_answers = Vec::new();
        if self.settings.auto_respond && state.has_api_key() {
            for question in questions
                .iter()
                .filter(|q| q.confidence >= self.settings.auto_respond_threshold)
            {
                match self.ask(state, &question.text, None).await {
                    Ok(answer) => auto_answers.push(answer),
                    Err(e) => warn!(
                        "Auto-response failed for session {} ({}): {}",
                        state.id(),
                        e.kind(),
                        e
                    ),
                }
            }
        }

        Ok(TranscriptAdded {
            entry,
            questions,
            auto_answers,
        })
    }

    /// Answer `question` from the transcript. On success the question and
    /// answer are appended as a user/assistant turn pair.
    pub async fn ask(
        &self,
        state: &mut SessionState,
        question: &str,
        forced: Option<Complexity>,
    ) -> Result<Answer> {
        let prompt = self.composer.question_prompt(state.transcript(), question)?;
        let (complexity, model) = self.router.route(question, forced);
        let question = question.trim();
        debug!("Session {}: {} question", state.id(), complexity.name());

        let text = self.complete(state, model, prompt).await?;

        state.append_turn(Role::User, question);
        state.append_answer(text.as_str(), model);

        Ok(Answer {
            question: question.to_string(),
            text,
            model: model.to_string(),
            complexity,
        })
    }

    /// Recap the transcript. Always routed to the complex tier.
    ///
    /// An empty transcript is rejected before any call is made.
    pub async fn summarize(&self, state: &mut SessionState) -> Result<Answer> {
        let prompt = self.composer.summary_prompt(state.transcript())?;
        let complexity = Complexity::Complex;
        let model = self.router.model_for(complexity);

        let text = self.complete(state, model, prompt).await?;

        state.append_turn(Role::User, SUMMARY_REQUEST);
        state.append_answer(text.as_str(), model);

        Ok(Answer {
            question: SUMMARY_REQUEST.to_string(),
            text,
            model: model.to_string(),
            complexity,
        })
    }

    async fn complete(&self, state: &SessionState, model: &str, prompt: String) -> Result<String> {
        let api_key = state.api_key().ok_or_else(|| {
            AssistantError::credential("Please configure your API key first")
        })?;

        let request = CompletionRequest {
            api_key: api_key.to_string(),
            model: model.to_string(),
            prompt,
        };

        info!(
            "Session {}: querying {} via {}",
            state.id(),
            model,
            self.provider.name()
        );

        match self.provider.complete(&request).await {
            Ok(text) => Ok(text),
            Err(e) => {
                warn!("Session {}: AI request failed: {}", state.id(), e);
                Err(e.into())
            }
        }
    }
}
