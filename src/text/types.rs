/// Output of [`normalize_text`](super::normalizer::normalize_text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    /// Input with whitespace runs collapsed, trimmed, optionally lowercased.
    pub normalized_text: String,
    /// Length of `normalized_text` in characters (not bytes).
    pub char_count: usize,
    /// Number of space-separated segments; zero only for an empty result.
    pub word_count: usize,
}
