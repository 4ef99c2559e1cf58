use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Word → 1-based vector position.
///
/// Position 0 is reserved to mean "not found". Positions are dense
/// (`1..=len`) and unique. Built dictionaries assign positions in first-seen
/// order; supplied dictionaries are validated on construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "HashMap<String, usize>",
    into = "HashMap<String, usize>"
)]
pub struct Dictionary {
    positions: HashMap<String, usize>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a word stream, assigning positions in first-seen order.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dict = Self::new();
        for word in words {
            dict.insert(word);
        }
        dict
    }

    /// Validate and wrap an externally supplied mapping.
    pub fn from_positions(positions: HashMap<String, usize>) -> Result<Self, ConfigError> {
        let size = positions.len();
        // Sorted so the reported offender is stable across runs.
        let sorted: BTreeMap<&String, usize> = positions.iter().map(|(w, &p)| (w, p)).collect();
        let mut seen = vec![false; size + 1];
        for (word, position) in sorted {
            let reason = if position == 0 {
                Some("position 0 is reserved")
            } else if position > size {
                Some("position exceeds dictionary size")
            } else if seen[position] {
                Some("position already assigned to another word")
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(ConfigError::InvalidDictionary {
                    word: word.clone(),
                    position,
                    reason,
                });
            }
            seen[position] = true;
        }
        Ok(Self { positions })
    }

    /// Insert a word if unseen; returns its position either way.
    pub fn insert(&mut self, word: impl Into<String>) -> usize {
        let next = self.positions.len() + 1;
        *self.positions.entry(word.into()).or_insert(next)
    }

    /// 1-based position of `word`, if present.
    pub fn position(&self, word: &str) -> Option<usize> {
        self.positions.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Words in position order.
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<(&str, usize)> =
            self.positions.iter().map(|(w, &p)| (w.as_str(), p)).collect();
        words.sort_by_key(|&(_, p)| p);
        words.into_iter().map(|(w, _)| w).collect()
    }
}

impl TryFrom<HashMap<String, usize>> for Dictionary {
    type Error = ConfigError;

    fn try_from(positions: HashMap<String, usize>) -> Result<Self, Self::Error> {
        Self::from_positions(positions)
    }
}

impl From<Dictionary> for HashMap<String, usize> {
    fn from(dict: Dictionary) -> Self {
        dict.positions
    }
}
