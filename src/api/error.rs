use super::protocol::ErrorResponse;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// The two ways a request can be turned away.
///
/// Schema violations are caught before any business logic runs; business-rule
/// violations come from explicit checks on structurally valid input. Each maps
/// to its own status code and `error` string so clients can branch on them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("schema validation failed: {0}")]
    Schema(String),

    #[error("{0}")]
    BusinessRule(String),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Schema(_) => "schema_validation",
            ApiError::BusinessRule(_) => "business_rule",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Schema(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BusinessRule(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            ApiError::Schema(detail) | ApiError::BusinessRule(detail) => detail,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Schema(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!("Rejected request ({}): {}", self.kind(), self.detail());
        let body = ErrorResponse {
            error: self.kind().to_string(),
            detail: self.detail().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
