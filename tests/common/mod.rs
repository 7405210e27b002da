// Shared test doubles for the AI service boundary.

#![allow(dead_code)]

use meeting_assistant::{
    AssistantSettings, CompletionProvider, CompletionRequest, MeetingAssistant, ModelRouter,
    ServiceError,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replays queued responses and records every request it receives.
/// With nothing queued it echoes a fixed answer.
#[derive(Default)]
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<Result<String, ServiceError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_reply(&self, reply: Result<String, ServiceError>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl CompletionProvider for ScriptedProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ServiceError> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("scripted answer".to_string()))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

pub fn assistant_with(provider: Arc<ScriptedProvider>, settings: AssistantSettings) -> MeetingAssistant {
    MeetingAssistant::new(provider, ModelRouter::default(), settings)
}

/// Auto-response disabled so only explicit actions reach the provider.
pub fn quiet_settings() -> AssistantSettings {
    AssistantSettings {
        auto_respond: false,
        ..AssistantSettings::default()
    }
}
