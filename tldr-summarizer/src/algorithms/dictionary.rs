//! Corpus → word dictionary.

use tldr_core::models::Dictionary;

/// Build a dictionary from raw corpus text.
///
/// The text is lowercased and every character that is not a letter, digit
/// or whitespace is deleted, except a hyphen whose nearest kept predecessor
/// is a letter or digit (so `co-op` survives and `-flag` loses its hyphen).
/// Words get 1-based positions in first-seen order.
pub fn build_dictionary(text: &str) -> Dictionary {
    let lowered = text.to_lowercase();
    let mut cleaned = String::with_capacity(lowered.len());
    let mut prev: Option<char> = None;

    for c in lowered.chars() {
        if c == '-' && prev.is_some_and(char::is_alphanumeric) {
            cleaned.push(c);
            continue;
        }
        if !c.is_alphanumeric() && !c.is_whitespace() {
            continue;
        }
        prev = Some(c);
        cleaned.push(c);
    }

    Dictionary::from_words(cleaned.split_whitespace())
}
