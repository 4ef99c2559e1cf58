use serde::{Deserialize, Serialize};

/// Binary presence flags over dictionary positions (0 = absent, 1 = present).
pub type PresenceVector = Vec<u8>;

/// A surviving sentence encoded as a presence vector.
///
/// `vector.len()` always equals the dictionary size; position `p - 1` holds
/// the flag for the word at dictionary position `p`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub sentence_index: usize,
    pub vector: PresenceVector,
}

impl Node {
    /// Number of dictionary words present in the sentence.
    pub fn word_count(&self) -> usize {
        self.vector.iter().filter(|&&flag| flag != 0).count()
    }
}
