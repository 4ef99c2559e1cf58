use serde::{Deserialize, Serialize};

/// Score assigned to one sentence by the iterative ranker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rank {
    pub index: usize,
    pub score: f64,
}

impl Rank {
    pub fn new(index: usize, score: f64) -> Self {
        Self { index, score }
    }
}
