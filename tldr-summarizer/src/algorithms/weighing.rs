//! Edge weighing over presence vectors and complete edge construction.

use std::fmt;

use rayon::prelude::*;
use tldr_core::models::{CustomWeighing, Edge, Node, Weighing};

/// Positions where the two vectors differ.
pub fn symmetric_difference(src: &[u8], dst: &[u8]) -> Vec<usize> {
    src.iter()
        .zip(dst)
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(i, _)| i)
        .collect()
}

/// Positions where the two vectors agree, co-absence included.
pub fn intersection(src: &[u8], dst: &[u8]) -> Vec<usize> {
    src.iter()
        .zip(dst)
        .enumerate()
        .filter(|(_, (a, b))| a == b)
        .map(|(i, _)| i)
        .collect()
}

/// Number of differing positions. Higher means less alike.
pub fn hamming(src: &[u8], dst: &[u8]) -> f64 {
    src.iter().zip(dst).filter(|(a, b)| a != b).count() as f64
}

/// `1 - c / (2V - c)` where `c` counts agreeing positions (co-absence
/// included) and `V` is the vector length. Zero-length vectors weigh 0.
pub fn jaccard(src: &[u8], dst: &[u8]) -> f64 {
    let v = src.len();
    if v == 0 {
        return 0.0;
    }
    let c = src.iter().zip(dst).filter(|(a, b)| a == b).count() as f64;
    1.0 - c / (2.0 * v as f64 - c)
}

/// Resolved weighing function.
#[derive(Clone)]
pub enum WeighingStrategy {
    Hamming,
    Jaccard,
    Custom(CustomWeighing),
}

impl WeighingStrategy {
    /// `None` when `weighing` is custom and no function was given.
    pub fn resolve(weighing: Weighing, custom: Option<&CustomWeighing>) -> Option<Self> {
        match weighing {
            Weighing::Hamming => Some(Self::Hamming),
            Weighing::Jaccard => Some(Self::Jaccard),
            Weighing::Custom => custom.cloned().map(Self::Custom),
        }
    }

    pub fn weigh(&self, src: &[u8], dst: &[u8]) -> f64 {
        match self {
            Self::Hamming => hamming(src, dst),
            Self::Jaccard => jaccard(src, dst),
            Self::Custom(f) => f(src, dst),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Hamming => "hamming",
            Self::Jaccard => "jaccard",
            Self::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for WeighingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One directed edge for every ordered pair of distinct nodes.
///
/// Edges come out grouped by source ascending, then destination ascending,
/// regardless of how the work is spread across threads.
pub fn build_edges(nodes: &[Node], strategy: &WeighingStrategy) -> Vec<Edge> {
    nodes
        .par_iter()
        .flat_map_iter(|src| {
            nodes
                .iter()
                .filter(move |dst| dst.sentence_index != src.sentence_index)
                .map(move |dst| {
                    Edge::new(
                        src.sentence_index,
                        dst.sentence_index,
                        strategy.weigh(&src.vector, &dst.vector),
                    )
                })
        })
        .collect()
}
