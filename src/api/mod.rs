//! HTTP API Module
//!
//! The thin adapter between HTTP clients and the pure functions in [`crate::text`].
//!
//! ## Responsibilities
//! - **Marshaling**: JSON request/response DTOs for each endpoint.
//! - **Validation**: Structural checks in the extractor, business rules in the handler.
//! - **Errors**: One `ApiError` taxonomy with a distinct status and `error` code per class.
//!
//! ## Submodules
//! - **`protocol`**: Endpoint paths, limits and DTOs.
//! - **`error`**: `ApiError` and its HTTP rendering.
//! - **`validation`**: `SchemaRules`, the `ValidatedJson` extractor and the `top_k` rule.
//! - **`handlers`**: Axum request handlers.
//! - **`routes`**: Router assembly.

pub mod error;
pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod validation;
