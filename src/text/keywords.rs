use super::whitespace::{WHITESPACE_CLASS, collapse_whitespace};
use regex::Regex;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::LazyLock;

// Letters and numbers of any script plus `_`. Not regex `\w`, which also keeps
// combining marks, joiners and connector punctuation but drops digits like `²`.
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"[^\p{{L}}\p{{N}}_{}]", WHITESPACE_CLASS))
        .expect("punctuation pattern is valid")
});

/// Lowercases, drops punctuation and splits on whitespace.
///
/// Tokens keep letters, numbers and underscores only. Empty input (or input made
/// of nothing but punctuation) yields no tokens.
pub fn tokenize_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned = NON_WORD.replace_all(&lowered, "");

    collapse_whitespace(&cleaned)
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Simple deterministic keyword extraction.
///
/// Tokens are ranked by frequency (descending) and then alphabetically, so ties
/// never depend on where a word first appeared. Returns at most `top_k` tokens.
/// The caller is responsible for keeping `top_k` within the allowed range.
pub fn extract_keywords_simple(text: &str, top_k: usize) -> Vec<String> {
    let mut frequencies: HashMap<String, usize> = HashMap::new();
    for token in tokenize_keywords(text) {
        frequencies
            .entry(token)
            .and_modify(|count| *count += 1)
            .or_insert(1);
    }

    let mut ranked: Vec<(String, usize)> = frequencies.into_iter().collect();
    ranked.sort_by(|a, b| (Reverse(a.1), &a.0).cmp(&(Reverse(b.1), &b.0)));

    ranked
        .into_iter()
        .take(top_k)
        .map(|(token, _)| token)
        .collect()
}
