//! Text Processing Module
//!
//! The pure transformation layer behind the HTTP API.
//!
//! ## Overview
//! Everything in here is a plain function of its arguments: strings, booleans and
//! integers in, plain structs out. Nothing touches axum, serde or shared state, so
//! the same calls can be reused from pipelines and tests without a server.
//!
//! ## Submodules
//! - **`whitespace`**: The shared whitespace collapser used by both operations.
//! - **`normalizer`**: Whitespace/case normalization with character and word counts.
//! - **`keywords`**: Frequency-ranked keyword extraction with deterministic tie-breaks.
//! - **`types`**: Result types returned by the transformations.

pub mod keywords;
pub mod normalizer;
pub mod types;
pub mod whitespace;

#[cfg(test)]
mod tests;
