use super::handlers::{handle_health, handle_keywords_simple, handle_normalize_text};
use super::protocol::{ENDPOINT_HEALTH, ENDPOINT_KEYWORDS_SIMPLE, ENDPOINT_NORMALIZE_TEXT};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

/// Builds the HTTP router.
///
/// Handlers hold no state, so the router carries no `Extension` layers; only
/// request tracing is attached.
pub fn build_router() -> Router {
    Router::new()
        .route(ENDPOINT_NORMALIZE_TEXT, post(handle_normalize_text))
        .route(ENDPOINT_KEYWORDS_SIMPLE, post(handle_keywords_simple))
        .route(ENDPOINT_HEALTH, get(handle_health))
        .layer(TraceLayer::new_for_http())
}
