//! # tldr-summarizer
//!
//! Extractive summarization over a sentence similarity graph:
//! segmentation → dedup (Jaro-Winkler + containment) → dictionary →
//! presence vectors → weighted edges → centrality or PageRank ranking →
//! selection in reading order under an optional character budget.

pub mod algorithms;
pub mod engine;
pub mod ranking;
pub mod selection;

pub use engine::{Bag, Summarizer};
pub use ranking::{PowerIterationSolver, RankingStrategy};
