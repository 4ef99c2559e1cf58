//! Edge filtering and ranking strategy dispatch.

mod centrality;
mod pagerank;

use std::fmt;
use std::sync::Arc;

use tldr_core::models::{Algorithm, CustomAlgorithm, Edge};
use tldr_core::traits::IRankSolver;

pub use centrality::centrality_ranks;
pub use pagerank::{iterative_ranks, PowerIterationSolver};

/// Solver settings for the iterative strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingParams {
    pub threshold: f64,
    pub damping: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
}

/// Resolved ranking strategy.
#[derive(Clone)]
pub enum RankingStrategy {
    Centrality,
    Iterative(Arc<dyn IRankSolver>),
    Custom(CustomAlgorithm),
}

impl RankingStrategy {
    /// `None` when `algorithm` is custom and no function was given.
    pub fn resolve(
        algorithm: Algorithm,
        solver: &Arc<dyn IRankSolver>,
        custom: Option<&CustomAlgorithm>,
    ) -> Option<Self> {
        match algorithm {
            Algorithm::Centrality => Some(Self::Centrality),
            Algorithm::PageRank => Some(Self::Iterative(Arc::clone(solver))),
            Algorithm::Custom => custom.cloned().map(Self::Custom),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Centrality => "centrality",
            Self::Iterative(_) => "pagerank",
            Self::Custom(_) => "custom",
        }
    }

    /// Ranked sentence indices, most important first.
    ///
    /// Built-in strategies see only edges heavier than `params.threshold`;
    /// a custom function receives the full edge set. Also returns how many
    /// edges survived the filter.
    pub fn rank(&self, edges: &[Edge], params: &RankingParams) -> (Vec<usize>, usize) {
        match self {
            Self::Custom(f) => (f(edges), edges.len()),
            Self::Centrality => {
                let kept = filter_edges(edges, params.threshold);
                (centrality_ranks(&kept), kept.len())
            }
            Self::Iterative(solver) => {
                let kept = filter_edges(edges, params.threshold);
                let ranks = iterative_ranks(
                    solver.as_ref(),
                    &kept,
                    params.damping,
                    params.tolerance,
                    params.max_iterations,
                );
                (ranks, kept.len())
            }
        }
    }
}

impl fmt::Debug for RankingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iterative(solver) => write!(f, "Iterative({})", solver.name()),
            other => f.write_str(other.name()),
        }
    }
}

/// Edges with weight strictly above `threshold`, in input order.
pub fn filter_edges(edges: &[Edge], threshold: f64) -> Vec<Edge> {
    edges.iter().filter(|e| e.weight > threshold).copied().collect()
}
