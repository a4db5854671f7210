//! Text Module Tests
//!
//! Validates the pure transformations independently of the HTTP layer.
//!
//! ## Test Scopes
//! - **Whitespace**: Runs of any whitespace collapse to one space and edges are trimmed.
//! - **Normalizer**: Case folding, character/word counts and idempotence.
//! - **Keywords**: Punctuation stripping, frequency ranking and alphabetical tie-breaks.

#[cfg(test)]
mod tests {
    use crate::text::keywords::{extract_keywords_simple, tokenize_keywords};
    use crate::text::normalizer::normalize_text;
    use crate::text::whitespace::collapse_whitespace;
    use std::collections::HashSet;

    // ============================================================
    // WHITESPACE TESTS
    // ============================================================

    #[test]
    fn test_collapse_whitespace_mixed_runs() {
        assert_eq!(
            collapse_whitespace("  hello \t\n  world \r\n"),
            "hello world"
        );
    }

    #[test]
    fn test_collapse_whitespace_unicode_spaces() {
        // NO-BREAK SPACE and EM SPACE are whitespace too
        assert_eq!(collapse_whitespace("a\u{00A0}\u{2003}b"), "a b");
    }

    #[test]
    fn test_collapse_whitespace_information_separators() {
        assert_eq!(collapse_whitespace("\u{1C}a\u{1D}\u{1E}b\u{1F}"), "a b");
    }

    #[test]
    fn test_collapse_whitespace_blank_input() {
        assert_eq!(collapse_whitespace(""), "");
        assert_eq!(collapse_whitespace(" \t\n "), "");
    }

    // ============================================================
    // NORMALIZER TESTS
    // ============================================================

    #[test]
    fn test_normalize_collapses_inner_spaces() {
        let result = normalize_text("Hello   Data Engineering world!", false);

        assert_eq!(result.normalized_text, "Hello Data Engineering world!");
        assert_eq!(result.char_count, 29);
        assert_eq!(result.word_count, 4);
    }

    #[test]
    fn test_normalize_lowercase() {
        let result = normalize_text("Hello Data Engineering world!", true);

        assert!(result.normalized_text.starts_with("hello"));
        assert!(!result.normalized_text.chars().any(char::is_uppercase));
    }

    #[test]
    fn test_normalize_preserves_case_by_default() {
        let result = normalize_text("Hello Data Engineering world!", false);
        assert!(result.normalized_text.starts_with("Hello"));
    }

    #[test]
    fn test_normalize_trims_edges() {
        let result = normalize_text("\n\t  padded on both sides  \n", false);

        assert_eq!(result.normalized_text, "padded on both sides");
        assert_eq!(result.word_count, 4);
    }

    #[test]
    fn test_normalize_empty_result_has_zero_words() {
        let result = normalize_text("   \n\t   ", false);

        assert_eq!(result.normalized_text, "");
        assert_eq!(result.char_count, 0);
        assert_eq!(result.word_count, 0);
    }

    #[test]
    fn test_normalize_single_character_is_one_word() {
        let result = normalize_text("          !          ", true);

        assert_eq!(result.normalized_text, "!");
        assert_eq!(result.char_count, 1);
        assert_eq!(result.word_count, 1);
    }

    #[test]
    fn test_normalize_counts_characters_not_bytes() {
        let result = normalize_text("café   naïve   résumé", false);

        assert_eq!(result.normalized_text, "café naïve résumé");
        assert_eq!(result.char_count, 17);
        assert_eq!(result.word_count, 3);
    }

    #[test]
    fn test_normalize_splits_on_unit_separator() {
        let result = normalize_text("a\u{1F}b", false);

        assert_eq!(result.normalized_text, "a b");
        assert_eq!(result.word_count, 2);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "  Hello   Data\tEngineering\n\nworld!  ",
            "one",
            "a  b  c  d  e  f",
            "\u{2003}Leading em space and trailing tab\t",
        ];

        for input in inputs {
            let once = normalize_text(input, false);
            let twice = normalize_text(&once.normalized_text, false);
            assert_eq!(once, twice, "normalize should be idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_normalize_word_count_matches_segments() {
        let inputs = ["x", "two words", "  many   separate \n words here  ", ""];

        for input in inputs {
            let result = normalize_text(input, false);
            let segments = if result.normalized_text.is_empty() {
                0
            } else {
                result.normalized_text.split(' ').count()
            };
            assert_eq!(result.word_count, segments);
            assert!(!result.normalized_text.contains("  "));
        }
    }

    // ============================================================
    // KEYWORD TESTS
    // ============================================================

    #[test]
    fn test_tokenize_keywords_strips_punctuation() {
        let tokens = tokenize_keywords("Hello, World! It's snake_case #42.");

        assert_eq!(tokens, vec!["hello", "world", "its", "snake_case", "42"]);
    }

    #[test]
    fn test_tokenize_keywords_drops_marks_and_joiners() {
        // zero-width joiner, undertie (connector punctuation), combining acute accent
        assert_eq!(tokenize_keywords("hello\u{200D}world"), vec!["helloworld"]);
        assert_eq!(tokenize_keywords("a\u{203F}b"), vec!["ab"]);
        assert_eq!(tokenize_keywords("cafe\u{0301}"), vec!["cafe"]);
    }

    #[test]
    fn test_tokenize_keywords_keeps_all_numbers() {
        // superscript two and one-half are numbers but not decimal digits
        assert_eq!(
            tokenize_keywords("x\u{00B2} \u{00BD} 42"),
            vec!["x\u{00B2}", "\u{00BD}", "42"]
        );
    }

    #[test]
    fn test_tokenize_keywords_separator_splits_words() {
        assert_eq!(tokenize_keywords("alpha\u{1F}beta"), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_tokenize_keywords_only_punctuation() {
        assert!(tokenize_keywords("!!! ... ???").is_empty());
        assert!(tokenize_keywords("").is_empty());
    }

    #[test]
    fn test_extract_keywords_ranks_by_frequency() {
        let keywords = extract_keywords_simple(
            "Data Engineering is engineering data. Data quality matters a lot.",
            3,
        );

        // data=3, engineering=2, then "a" wins the alphabetical tie among the singles
        assert_eq!(keywords, vec!["data", "engineering", "a"]);
    }

    #[test]
    fn test_extract_keywords_alphabetical_tie_break() {
        // All appear once; order of first appearance must not matter
        let keywords = extract_keywords_simple("zebra mango apple kiwi", 4);
        assert_eq!(keywords, vec!["apple", "kiwi", "mango", "zebra"]);

        let keywords = extract_keywords_simple("beta alpha beta alpha gamma", 3);
        assert_eq!(keywords, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_extract_keywords_respects_top_k() {
        let text = "one two three four five six seven eight nine ten";

        for top_k in 1..=20 {
            let keywords = extract_keywords_simple(text, top_k);
            assert!(keywords.len() <= top_k);
            assert!(keywords.len() <= 10);
        }
    }

    #[test]
    fn test_extract_keywords_fewer_tokens_than_top_k() {
        let keywords = extract_keywords_simple("rust rust go", 20);
        assert_eq!(keywords, vec!["rust", "go"]);
    }

    #[test]
    fn test_extract_keywords_empty_after_cleaning() {
        assert!(extract_keywords_simple("?!... ---", 5).is_empty());
        assert!(extract_keywords_simple("", 5).is_empty());
    }

    #[test]
    fn test_extract_keywords_unique_output() {
        let keywords = extract_keywords_simple("Rust RUST rust, rust! Go go", 5);

        let unique: HashSet<&String> = keywords.iter().collect();
        assert_eq!(unique.len(), keywords.len());
        assert_eq!(keywords, vec!["rust", "go"]);
    }

    #[test]
    fn test_extract_keywords_idempotent_on_clean_input() {
        let clean = "pipeline data data quality pipeline data";

        let first = extract_keywords_simple(clean, 2);
        let second = extract_keywords_simple(clean, 2);
        assert_eq!(first, second);
        assert_eq!(first, vec!["data", "pipeline"]);
    }
}
