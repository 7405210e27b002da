use super::state::{Role, SessionState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Statistics about an assistant session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    /// When the session was created
    pub started_at: DateTime<Utc>,

    /// Time since creation in seconds
    pub duration_secs: f64,

    /// Number of transcript entries
    pub transcript_entries: usize,

    /// Number of answered questions (assistant turns)
    pub qa_exchanges: usize,

    /// Number of questions detected in the transcript
    pub questions_detected: usize,

    /// Model behind the most assistant turns, if any
    pub most_used_model: Option<String>,
}

impl SessionStats {
    pub fn collect(state: &SessionState) -> Self {
        let duration = Utc::now().signed_duration_since(state.started_at());

        let answers = state
            .conversation()
            .iter()
            .filter(|turn| turn.role == Role::Assistant);

        let mut usage: HashMap<&str, usize> = HashMap::new();
        let mut qa_exchanges = 0;
        for turn in answers {
            qa_exchanges += 1;
            if let Some(model) = turn.model.as_deref() {
                *usage.entry(model).or_default() += 1;
            }
        }

        // Ties resolve to the lexically smallest name so the answer is stable.
        let most_used_model = usage
            .into_iter()
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
            .map(|(model, _)| model.to_string());

        Self {
            started_at: state.started_at(),
            duration_secs: duration.num_milliseconds() as f64 / 1000.0,
            transcript_entries: state.transcript().len(),
            qa_exchanges,
            questions_detected: state.questions().len(),
            most_used_model,
        }
    }
}
