//! Top-N selection, reading-order restoration and budgeted assembly.

/// Assembled output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub sentences: Vec<String>,
    /// Total characters (code points) across `sentences`.
    pub characters: usize,
    /// The last sentence was cut to fit the budget.
    pub truncated: bool,
}

/// Counts below 1 or above `available` become 1.
pub fn clamp_count(count: i64, available: usize) -> usize {
    match usize::try_from(count) {
        Ok(n) if n >= 1 && n <= available => n,
        _ => 1,
    }
}

/// The first `count` ranked indices, re-sorted into reading order.
pub fn select_indices(ranks: &[usize], count: usize) -> Vec<usize> {
    let mut top: Vec<usize> = ranks.iter().take(count).copied().collect();
    top.sort_unstable();
    top
}

/// Collect `sentences[i]` for each index.
///
/// With `max_characters > 0`, whole sentences are taken while they fit;
/// the first one that does not fit contributes only the prefix that fills
/// the remaining budget exactly, and assembly stops there. When the budget
/// is used up exactly, no empty piece is appended, so the result may hold
/// fewer than `indices.len()` sentences.
pub fn assemble(sentences: &[String], indices: &[usize], max_characters: usize) -> Selection {
    let mut selection = Selection::default();

    for &i in indices {
        let sentence = &sentences[i];
        let length = sentence.chars().count();

        if max_characters > 0 && selection.characters + length > max_characters {
            let remaining = max_characters - selection.characters;
            if remaining > 0 {
                selection
                    .sentences
                    .push(sentence.chars().take(remaining).collect());
                selection.characters += remaining;
            }
            selection.truncated = true;
            break;
        }

        selection.sentences.push(sentence.clone());
        selection.characters += length;
    }

    selection
}
