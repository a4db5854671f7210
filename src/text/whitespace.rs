use regex::Regex;
use std::sync::LazyLock;

/// Unicode `White_Space` plus the ASCII information separators U+001C..U+001F.
pub(crate) const WHITESPACE_CLASS: &str = r"\s\x1C-\x1F";

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("[{}]+", WHITESPACE_CLASS)).expect("whitespace pattern is valid")
});

/// Replaces every run of whitespace (see `WHITESPACE_CLASS`) with a single
/// ASCII space and trims both ends.
///
/// Both the normalizer and the keyword extractor go through this function, so
/// they agree on what counts as whitespace.
pub fn collapse_whitespace(value: &str) -> String {
    WHITESPACE_RUN.replace_all(value, " ").trim().to_string()
}
