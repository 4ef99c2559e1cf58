//! Weighted PageRank by power iteration over a petgraph digraph.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use tldr_core::models::{Edge, Rank};
use tldr_core::traits::IRankSolver;
use tldr_observability::events;

use crate::algorithms::ordering::sort_ranks_by_score_desc;

/// Sentence graph: node weight is the sentence index, edge weight the
/// accumulated link weight.
type SentenceGraph = DiGraph<usize, f64>;

/// Default [`IRankSolver`].
///
/// Out-weights are normalized per source. Mass sitting on nodes without
/// outbound weight is damped and spread evenly over all nodes each round.
/// Iteration stops once the L1 change between rounds is at or below the
/// tolerance, or after `max_iterations` rounds.
#[derive(Debug, Default, Clone, Copy)]
pub struct PowerIterationSolver;

impl PowerIterationSolver {
    pub fn new() -> Self {
        Self
    }

    /// Nodes are added in first-seen order (source before destination);
    /// repeated links between one pair add their weights.
    fn build_graph(edges: &[Edge]) -> SentenceGraph {
        let mut graph = SentenceGraph::with_capacity(0, edges.len());
        let mut index: HashMap<usize, NodeIndex> = HashMap::new();
        let mut ensure = |graph: &mut SentenceGraph, id: usize| {
            *index.entry(id).or_insert_with(|| graph.add_node(id))
        };

        for edge in edges {
            let src = ensure(&mut graph, edge.src);
            let dst = ensure(&mut graph, edge.dst);
            match graph.find_edge(src, dst) {
                Some(existing) => graph[existing] += edge.weight,
                None => {
                    graph.add_edge(src, dst, edge.weight);
                }
            }
        }
        graph
    }
}

impl IRankSolver for PowerIterationSolver {
    fn rank(
        &self,
        edges: &[Edge],
        damping: f64,
        tolerance: f64,
        max_iterations: usize,
        on_score: &mut dyn FnMut(usize, f64),
    ) {
        let graph = Self::build_graph(edges);
        let n = graph.node_count();
        if n == 0 {
            return;
        }

        let outbound: Vec<f64> = graph
            .node_indices()
            .map(|node| {
                graph
                    .edges_directed(node, Direction::Outgoing)
                    .map(|e| *e.weight())
                    .sum()
            })
            .collect();

        // (source, target, normalized weight)
        let links: Vec<(usize, usize, f64)> = graph
            .edge_references()
            .map(|e| {
                let src = e.source().index();
                let out = outbound[src];
                let w = if out > 0.0 { *e.weight() / out } else { *e.weight() };
                (src, e.target().index(), w)
            })
            .collect();

        let inverse = 1.0 / n as f64;
        let mut scores = vec![inverse; n];
        let mut next = vec![0.0; n];
        let mut delta = f64::INFINITY;
        let mut iterations = 0;

        while delta > tolerance && iterations < max_iterations {
            let leak: f64 = damping
                * scores
                    .iter()
                    .zip(&outbound)
                    .filter(|(_, &out)| out == 0.0)
                    .map(|(s, _)| s)
                    .sum::<f64>();

            next.fill((1.0 - damping) * inverse + leak * inverse);
            for &(src, dst, w) in &links {
                next[dst] += damping * scores[src] * w;
            }

            delta = next.iter().zip(&scores).map(|(a, b)| (a - b).abs()).sum();
            std::mem::swap(&mut scores, &mut next);
            iterations += 1;
        }

        events::solver_finished(self.name(), iterations, delta, delta <= tolerance);

        for node in graph.node_indices() {
            on_score(graph[node], scores[node.index()]);
        }
    }

    fn name(&self) -> &str {
        "power_iteration"
    }
}

/// Run `solver` and return sentence indices by descending score, ties
/// broken by ascending index.
pub fn iterative_ranks(
    solver: &dyn IRankSolver,
    edges: &[Edge],
    damping: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Vec<usize> {
    let mut ranks = Vec::new();
    solver.rank(edges, damping, tolerance, max_iterations, &mut |index, score| {
        ranks.push(Rank::new(index, score));
    });
    sort_ranks_by_score_desc(&mut ranks);
    ranks.into_iter().map(|r| r.index).collect()
}
