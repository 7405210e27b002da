//! Renders session transcripts into prompts for the completion service
//!
//! Every function here is pure: the same transcript and question always
//! produce byte-identical output.

use crate::error::{AssistantError, Result};
use crate::session::TranscriptEntry;

/// System instruction sent alongside every prompt
pub const SYSTEM_INSTRUCTION: &str = "You are an intelligent AI meeting assistant. \
Analyze meeting transcripts and provide helpful, concise responses.

Your capabilities:
- Answer questions based on meeting context
- Identify action items and decisions
- Provide summaries and insights
- Suggest next steps

Be professional, concise, and helpful.";

const SUMMARY_INSTRUCTION: &str = "Provide:
1. **Key Discussion Points**: Main topics covered
2. **Decisions Made**: Concrete decisions and agreements
3. **Action Items**: Tasks and assignments
4. **Open Questions**: Unresolved issues
5. **Next Steps**: Recommended actions

Be specific and reference actual discussion points.";

/// Builds Q&A and summary prompts from a transcript.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptComposer {
    /// Render only the most recent N entries; `None` renders all of them
    context_window: Option<usize>,
}

impl PromptComposer {
    pub fn new(context_window: Option<usize>) -> Self {
        Self { context_window }
    }

    /// `speaker: content` lines in insertion order, joined by newlines.
    pub fn render_transcript(&self, transcript: &[TranscriptEntry]) -> String {
        let start = match self.context_window {
            Some(window) => transcript.len().saturating_sub(window),
            None => 0,
        };

        transcript[start..]
            .iter()
            .map(|entry| format!("{}: {}", entry.speaker, entry.content))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Transcript followed by the question framing.
    pub fn question_prompt(&self, transcript: &[TranscriptEntry], question: &str) -> Result<String> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AssistantError::validation("question is required"));
        }
        let context = self.context(transcript, "No meeting transcript available yet")?;

        Ok(format!(
            "Meeting Context:\n{context}\n\n\
             Question: {question}\n\n\
             Provide a clear, concise answer based on the meeting context above."
        ))
    }

    /// Transcript followed by the fixed recap instruction.
    pub fn summary_prompt(&self, transcript: &[TranscriptEntry]) -> Result<String> {
        let context = self.context(transcript, "No meeting content to summarize")?;

        Ok(format!(
            "Analyze this meeting transcript and provide a comprehensive summary:\n\n\
             {context}\n\n\
             {SUMMARY_INSTRUCTION}"
        ))
    }

    fn context(&self, transcript: &[TranscriptEntry], empty_msg: &str) -> Result<String> {
        if transcript.is_empty() {
            return Err(AssistantError::validation(empty_msg));
        }
        Ok(self.render_transcript(transcript))
    }
}
