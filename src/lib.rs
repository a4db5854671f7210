//! Text Processing API Library
//!
//! This library crate defines the modules behind the `text_api` binary (`main.rs`).
//!
//! ## Modules
//! - **`text`**: Pure, framework-free transformations: whitespace collapsing,
//!   normalization with character/word counts, and frequency-ranked keyword extraction.
//! - **`api`**: The HTTP boundary. Request/response DTOs, two-stage validation
//!   (schema first, business rules second), error rendering and the axum router.
//! - **`config`**: Command-line and environment configuration.
//! - **`logging`**: Tracing subscriber setup.

pub mod api;
pub mod config;
pub mod logging;
pub mod text;
