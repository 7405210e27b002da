use serde::{Deserialize, Serialize};

/// Behaviour knobs shared by every session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantSettings {
    /// Render only the last N transcript entries into prompts.
    /// Default: unset (the whole transcript)
    pub context_window: Option<usize>,

    /// Answer questions detected in new transcript lines without being asked
    pub auto_respond: bool,

    /// Minimum detector confidence that triggers an auto-response
    /// Default: 0.75
    pub auto_respond_threshold: f64,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            context_window: None,
            auto_respond: true,
            auto_respond_threshold: 0.75,
        }
    }
}
