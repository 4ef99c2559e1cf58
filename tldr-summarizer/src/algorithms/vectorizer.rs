//! Token lists → binary presence vectors over the dictionary.

use tldr_core::models::{Dictionary, Node};

/// One node per token list, in order.
///
/// Every vector has `dictionary.len()` entries. Position `p - 1` is set to 1
/// when the word at dictionary position `p` occurs in the sentence; words
/// outside the dictionary are skipped and repeats do not count twice.
pub fn create_nodes(token_lists: &[Vec<String>], dictionary: &Dictionary) -> Vec<Node> {
    let vector_length = dictionary.len();
    token_lists
        .iter()
        .enumerate()
        .map(|(sentence_index, tokens)| {
            let mut vector = vec![0u8; vector_length];
            for word in tokens {
                // Supplied dictionaries are validated, so 1..=len holds.
                if let Some(position) = dictionary.position(word).filter(|&p| p > 0) {
                    vector[position - 1] = 1;
                }
            }
            Node {
                sentence_index,
                vector,
            }
        })
        .collect()
}
