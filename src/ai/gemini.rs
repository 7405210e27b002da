use super::provider::{CompletionProvider, CompletionRequest};
use crate::error::ServiceError;
use reqwest::{header::RETRY_AFTER, Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Google Gemini `generateContent` client.
///
/// The API key travels with each request, so one provider serves every
/// session.
pub struct GeminiProvider {
    client: Client,
    base_url: String,
    system_instruction: String,
}

// ============================================================================
// API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "systemInstruction")]
    system_instruction: Content<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

impl GeminiProvider {
    pub fn new(
        base_url: impl Into<String>,
        system_instruction: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            system_instruction: system_instruction.into(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait::async_trait]
impl CompletionProvider for GeminiProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ServiceError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part {
                    text: &request.prompt,
                }],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: &self.system_instruction,
                }],
            },
        };

        debug!(
            "Sending {} prompt chars to {}",
            request.prompt.len(),
            request.model
        );

        let response = self
            .client
            .post(self.endpoint(&request.model))
            .header("x-goog-api-key", &request.api_key)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());
        let text = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            let err = classify_failure(status, retry_after, &text);
            warn!("Gemini request failed: {}", err);
            return Err(err);
        }

        extract_text(&text)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

fn transport_error(err: reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        ServiceError::Network(format!("request timed out: {err}"))
    } else {
        ServiceError::Network(err.to_string())
    }
}

/// Map a non-success response to a `ServiceError`.
fn classify_failure(status: StatusCode, retry_after: Option<u64>, body: &str) -> ServiceError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.trim().to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ServiceError::Authentication(message),
        // Gemini reports a bad key as 400 INVALID_ARGUMENT
        StatusCode::BAD_REQUEST if message.contains("API key") => {
            ServiceError::Authentication(message)
        }
        StatusCode::TOO_MANY_REQUESTS => ServiceError::RateLimited {
            retry_after_secs: retry_after,
        },
        _ => ServiceError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

/// First text part of the first candidate, untouched.
fn extract_text(body: &str) -> Result<String, ServiceError> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| ServiceError::MalformedResponse(format!("invalid JSON: {e}")))?;

    if let Some(err) = response.error {
        return Err(ServiceError::Api {
            status: 200,
            message: err.message,
        });
    }

    response
        .candidates
        .and_then(|c| c.into_iter().next())
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().find_map(|p| p.text))
        .ok_or_else(|| ServiceError::MalformedResponse("no candidate text in response".into()))
}
