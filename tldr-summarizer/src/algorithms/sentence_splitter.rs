//! Split raw text into sentences on punctuation boundaries.

/// Split text into sentences.
///
/// A boundary is a `.`, `?` or `!` followed by whitespace or end of input.
/// The punctuation stays with its sentence and every piece is trimmed.
/// Trailing text without terminal punctuation becomes the last sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let text = text.trim();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !matches!(c, '.' | '?' | '!') {
            continue;
        }
        let at_boundary = match chars.peek() {
            None => true,
            Some(&(_, next)) => next.is_whitespace(),
        };
        if at_boundary {
            let end = i + c.len_utf8();
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }
    }

    // Remaining text that didn't end with punctuation.
    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, piece: &str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
