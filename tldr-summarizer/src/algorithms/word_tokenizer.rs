//! Sentence → normalized word tokens.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use tldr_core::models::WordTokenizer;

/// Runs of two or more non-alphanumerics vanish whole; any other single
/// character outside letters, digits, `_`, `'` and `-` is dropped.
static SANITIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[^\p{L}\d]{2,}|[^\p{L}\d_'-])").expect("sanitize pattern is valid")
});

/// Lowercase a word and strip the characters described on [`SANITIZE_RE`].
pub fn sanitize_word(word: &str) -> String {
    let lowered = word.to_lowercase();
    SANITIZE_RE.replace_all(&lowered, "").into_owned()
}

/// Whitespace-split and sanitize; words that sanitize to nothing are dropped.
pub fn tokenize_words(sentence: &str) -> Vec<String> {
    sentence
        .split_whitespace()
        .map(sanitize_word)
        .filter(|w| !w.is_empty())
        .collect()
}

/// The tokenizer a fresh summarizer starts with.
pub fn default_word_tokenizer() -> WordTokenizer {
    Arc::new(tokenize_words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_trailing_punctuation() {
        assert_eq!(tokenize_words("Mary had a little lamb,"), vec!["mary", "had", "a", "little", "lamb"]);
    }

    #[test]
    fn keeps_apostrophes_hyphens_and_underscores() {
        assert_eq!(sanitize_word("It's"), "it's");
        assert_eq!(sanitize_word("co-op!"), "co-op");
        assert_eq!(sanitize_word("snake_case"), "snake_case");
    }

    #[test]
    fn runs_of_symbols_are_removed_whole() {
        assert_eq!(sanitize_word("wait...what"), "waitwhat");
        assert_eq!(sanitize_word("(hello)"), "hello");
        assert_eq!(sanitize_word("--flag"), "flag");
    }

    #[test]
    fn unicode_letters_and_digits_survive() {
        assert_eq!(sanitize_word("Ñandú,"), "ñandú");
        assert_eq!(sanitize_word("2024!"), "2024");
    }

    #[test]
    fn pure_punctuation_tokens_are_dropped() {
        assert_eq!(tokenize_words("yes — no"), vec!["yes", "no"]);
    }
}
