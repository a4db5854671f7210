use super::types::NormalizedText;
use super::whitespace::collapse_whitespace;

/// Deterministic text normalization.
///
/// Lowercases first when asked, then collapses whitespace. Counts are taken on
/// the normalized string; `word_count` splits strictly on the single space the
/// collapser leaves behind, so any non-empty result has at least one word.
pub fn normalize_text(text: &str, lowercase: bool) -> NormalizedText {
    let normalized = if lowercase {
        collapse_whitespace(&text.to_lowercase())
    } else {
        collapse_whitespace(text)
    };

    let char_count = normalized.chars().count();
    let word_count = if normalized.is_empty() {
        0
    } else {
        normalized.split(' ').count()
    };

    NormalizedText {
        normalized_text: normalized,
        char_count,
        word_count,
    }
}
