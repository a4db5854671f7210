use super::error::Result;
use super::protocol::{
    HealthResponse, KeywordsRequest, KeywordsResponse, NormalizeTextRequest,
    NormalizeTextResponse,
};
use super::validation::{ValidatedJson, validate_top_k};
use crate::text::keywords::extract_keywords_simple;
use crate::text::normalizer::normalize_text;
use axum::Json;

pub async fn handle_normalize_text(
    ValidatedJson(req): ValidatedJson<NormalizeTextRequest>,
) -> Json<NormalizeTextResponse> {
    let result = normalize_text(&req.text, req.lowercase);
    tracing::debug!(
        "Normalized text: {} chars, {} words (lowercase={})",
        result.char_count,
        result.word_count,
        req.lowercase
    );

    Json(NormalizeTextResponse {
        normalized_text: result.normalized_text,
        char_count: result.char_count,
        word_count: result.word_count,
    })
}

pub async fn handle_keywords_simple(
    ValidatedJson(req): ValidatedJson<KeywordsRequest>,
) -> Result<Json<KeywordsResponse>> {
    // business-rule validation, after the schema stage has passed
    let top_k = validate_top_k(req.top_k)?;

    let keywords = extract_keywords_simple(&req.text, top_k);
    tracing::debug!("Extracted {} keywords (top_k={})", keywords.len(), top_k);

    Ok(Json(KeywordsResponse { keywords }))
}

pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
