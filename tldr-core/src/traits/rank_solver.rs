use crate::models::Edge;

/// Iterative link-analysis solver over a directed weighted graph.
///
/// Implementations must converge for `0 < damping < 1`, `tolerance > 0` and
/// non-negative weights, and must report exactly one score per node id that
/// appears in at least one edge. Parallel edges between the same pair add up.
pub trait IRankSolver: Send + Sync {
    /// Run to convergence (or `max_iterations` rounds) and report each
    /// `(node id, score)` through `on_score`.
    fn rank(
        &self,
        edges: &[Edge],
        damping: f64,
        tolerance: f64,
        max_iterations: usize,
        on_score: &mut dyn FnMut(usize, f64),
    );

    /// Solver name, for logs.
    fn name(&self) -> &str;
}
