use serde::{Deserialize, Serialize};

/// A directed, weighted relation between two sentence nodes.
///
/// `src` and `dst` are indices into the surviving sentence list. Self-pairs
/// never occur.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub src: usize,
    pub dst: usize,
    pub weight: f64,
}

impl Edge {
    pub fn new(src: usize, dst: usize, weight: f64) -> Self {
        Self { src, dst, weight }
    }
}
