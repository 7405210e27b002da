use crate::error::{AssistantError, ServiceError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,

    /// validation | credential | service | not_found
    pub kind: &'static str,
}

/// Wraps `AssistantError` so handlers can return it with `?`.
#[derive(Debug)]
pub struct ApiError(pub AssistantError);

impl From<AssistantError> for ApiError {
    fn from(err: AssistantError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            AssistantError::Validation(_) => StatusCode::BAD_REQUEST,
            AssistantError::Credential(_) => StatusCode::UNAUTHORIZED,
            AssistantError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            AssistantError::Service(ServiceError::RateLimited { .. }) => {
                StatusCode::TOO_MANY_REQUESTS
            }
            AssistantError::Service(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (
            status,
            Json(ErrorResponse {
                error: self.0.to_string(),
                kind: self.0.kind(),
            }),
        )
            .into_response()
    }
}
