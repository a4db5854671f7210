//! Two-stage request validation.
//!
//! Stage one is structural: every request DTO declares its field constraints once
//! in [`SchemaRules`], and the [`ValidatedJson`] extractor enforces them together
//! with JSON parsing. A handler therefore never sees a structurally invalid body.
//!
//! Stage two is explicit domain checking done by the handler itself (see
//! [`validate_top_k`]). The two stages report through different [`ApiError`]
//! variants.

use super::error::{ApiError, Result};
use super::protocol::{
    KeywordsRequest, NORMALIZE_MIN_TEXT_CHARS, NormalizeTextRequest, TOP_K_MAX, TOP_K_MIN,
};
use axum::Json;
use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

/// Structural constraints of a request body.
pub trait SchemaRules {
    fn validate_schema(&self) -> Result<()>;
}

impl SchemaRules for NormalizeTextRequest {
    fn validate_schema(&self) -> Result<()> {
        let length = self.text.chars().count();
        if length < NORMALIZE_MIN_TEXT_CHARS {
            return Err(ApiError::Schema(format!(
                "text: must be at least {} characters (got {})",
                NORMALIZE_MIN_TEXT_CHARS, length
            )));
        }
        Ok(())
    }
}

impl SchemaRules for KeywordsRequest {
    // `text` has no length constraint; `top_k` is checked as a business rule
    fn validate_schema(&self) -> Result<()> {
        Ok(())
    }
}

/// JSON body that has already passed [`SchemaRules::validate_schema`].
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + SchemaRules,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate_schema()?;
        Ok(ValidatedJson(value))
    }
}

/// Business rule for keyword extraction: `top_k` must lie in `[1, 20]`.
pub fn validate_top_k(top_k: i64) -> Result<usize> {
    if !(TOP_K_MIN..=TOP_K_MAX).contains(&top_k) {
        return Err(ApiError::BusinessRule(format!(
            "top_k must be between {} and {}",
            TOP_K_MIN, TOP_K_MAX
        )));
    }
    Ok(top_k as usize)
}
