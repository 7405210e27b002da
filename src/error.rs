//! Error types for assistant operations.

use thiserror::Error;

/// Failure reported by the external AI completion service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The provider rejected the API key.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Quota exhausted or too many requests.
    #[error("rate limited by provider{}", retry_hint(.retry_after_secs))]
    RateLimited { retry_after_secs: Option<u64> },

    /// Connection, DNS or timeout failure before a response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// Any other non-success status from the provider.
    #[error("provider returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The provider answered but the body held no usable text.
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

fn retry_hint(retry_after_secs: &Option<u64>) -> String {
    match retry_after_secs {
        Some(secs) => format!(" (retry after {secs}s)"),
        None => String::new(),
    }
}

/// Every way a user action can fail.
///
/// None of these are fatal: the session is left as it was and the caller may
/// try again.
#[derive(Error, Debug)]
pub enum AssistantError {
    /// A required field was empty, or the request cannot be served with the
    /// current session contents.
    #[error("{0}")]
    Validation(String),

    /// No API key has been configured for this session.
    #[error("{0}")]
    Credential(String),

    /// The AI service call failed.
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("session {0} not found")]
    SessionNotFound(String),
}

impl AssistantError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn credential(msg: impl Into<String>) -> Self {
        Self::Credential(msg.into())
    }

    /// Short machine-readable tag, used in JSON error bodies and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AssistantError::Validation(_) => "validation",
            AssistantError::Credential(_) => "credential",
            AssistantError::Service(_) => "service",
            AssistantError::SessionNotFound(_) => "not_found",
        }
    }
}

pub type Result<T> = std::result::Result<T, AssistantError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_message_includes_retry_hint() {
        let err = ServiceError::RateLimited {
            retry_after_secs: Some(30),
        };
        assert_eq!(err.to_string(), "rate limited by provider (retry after 30s)");

        let err = ServiceError::RateLimited {
            retry_after_secs: None,
        };
        assert_eq!(err.to_string(), "rate limited by provider");
    }

    #[test]
    fn service_errors_convert_into_assistant_errors() {
        let err: AssistantError = ServiceError::Network("connection reset".into()).into();
        assert_eq!(err.kind(), "service");
        assert_eq!(err.to_string(), "network error: connection reset");
    }
}
