use crate::error::ServiceError;

/// One outbound completion call
#[derive(Clone)]
pub struct CompletionRequest {
    /// User-supplied credential, passed through opaquely
    pub api_key: String,

    /// Model name, e.g. "gemini-2.0-flash-exp"
    pub model: String,

    pub prompt: String,
}

// Keep the key out of logs.
impl std::fmt::Debug for CompletionRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionRequest")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("prompt_len", &self.prompt.len())
            .finish()
    }
}

/// Hosted text completion service
///
/// Implementations return the model's text unmodified and classify failures
/// into `ServiceError`. They never retry.
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ServiceError>;

    /// Provider name for logging
    fn name(&self) -> &str;
}
