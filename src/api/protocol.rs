//! HTTP Protocol
//!
//! Endpoint paths and the JSON Data Transfer Objects exchanged with clients.

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Whitespace/case normalization.
pub const ENDPOINT_NORMALIZE_TEXT: &str = "/normalize-text";
/// Frequency-ranked keyword extraction.
pub const ENDPOINT_KEYWORDS_SIMPLE: &str = "/keywords-simple";
/// Liveness probe.
pub const ENDPOINT_HEALTH: &str = "/health";

// --- Limits ---

/// Minimum `text` length (in characters) accepted by the normalize endpoint.
pub const NORMALIZE_MIN_TEXT_CHARS: usize = 20;
/// Default number of keywords when the client omits `top_k`.
pub const DEFAULT_TOP_K: i64 = 5;
/// Inclusive bounds for `top_k`.
pub const TOP_K_MIN: i64 = 1;
pub const TOP_K_MAX: i64 = 20;

// --- Data Transfer Objects ---

/// Request body for [`ENDPOINT_NORMALIZE_TEXT`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeTextRequest {
    /// Text to normalize. Must be at least [`NORMALIZE_MIN_TEXT_CHARS`] characters.
    pub text: String,
    /// Lowercase the text before collapsing whitespace.
    #[serde(default)]
    pub lowercase: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizeTextResponse {
    pub normalized_text: String,
    pub char_count: usize,
    pub word_count: usize,
}

/// Request body for [`ENDPOINT_KEYWORDS_SIMPLE`].
///
/// `top_k` is signed so that `0` or `-3` still deserialize and reach the
/// business-rule check rather than failing as a schema error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordsRequest {
    pub text: String,
    #[serde(default = "default_top_k")]
    pub top_k: i64,
}

fn default_top_k() -> i64 {
    DEFAULT_TOP_K
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
}

/// Body returned for every rejected request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable machine-readable failure class (`schema_validation` or `business_rule`).
    pub error: String,
    /// Human-readable description of what was violated.
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}
