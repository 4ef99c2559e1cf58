//! Descending orderings for edges and ranks.
//!
//! Sorting is stable: equal-weight edges keep construction order (src
//! ascending, then dst ascending) and equal-score ranks are broken by
//! ascending sentence index.

use std::cmp::Ordering;
use std::collections::HashSet;

use tldr_core::models::{Edge, Rank};

/// Heaviest edge first.
pub fn by_weight_desc(a: &Edge, b: &Edge) -> Ordering {
    b.weight.total_cmp(&a.weight)
}

/// Highest score first, then lowest index.
pub fn by_score_desc(a: &Rank, b: &Rank) -> Ordering {
    b.score.total_cmp(&a.score).then(a.index.cmp(&b.index))
}

pub fn sort_edges_by_weight_desc(edges: &mut [Edge]) {
    edges.sort_by(by_weight_desc);
}

pub fn sort_ranks_by_score_desc(ranks: &mut [Rank]) {
    ranks.sort_by(by_score_desc);
}

/// Drop repeats, keeping first occurrences in order.
pub fn unique_in_order(indices: impl IntoIterator<Item = usize>) -> Vec<usize> {
    let mut seen = HashSet::new();
    indices.into_iter().filter(|i| seen.insert(*i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_sort_descending_and_stable() {
        let mut edges = vec![
            Edge::new(0, 1, 1.0),
            Edge::new(0, 2, 3.0),
            Edge::new(1, 0, 3.0),
            Edge::new(2, 0, 2.0),
        ];
        sort_edges_by_weight_desc(&mut edges);
        let order: Vec<(usize, usize)> = edges.iter().map(|e| (e.src, e.dst)).collect();
        assert_eq!(order, vec![(0, 2), (1, 0), (2, 0), (0, 1)]);
    }

    #[test]
    fn rank_ties_break_by_index() {
        let mut ranks = vec![Rank::new(3, 0.2), Rank::new(1, 0.5), Rank::new(0, 0.2)];
        sort_ranks_by_score_desc(&mut ranks);
        let order: Vec<usize> = ranks.iter().map(|r| r.index).collect();
        assert_eq!(order, vec![1, 0, 3]);
    }

    #[test]
    fn unique_keeps_first_occurrence() {
        assert_eq!(unique_in_order([2, 0, 2, 1, 0]), vec![2, 0, 1]);
    }
}
