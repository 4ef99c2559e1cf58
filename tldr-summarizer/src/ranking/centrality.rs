//! Source-of-heaviest-edge ranking.

use tldr_core::models::Edge;

use crate::algorithms::ordering::{sort_edges_by_weight_desc, unique_in_order};

/// Sentence indices ordered by the heaviest edge each one is the source of.
///
/// A sentence that is never the source of a surviving edge is absent from
/// the result.
pub fn centrality_ranks(edges: &[Edge]) -> Vec<usize> {
    let mut sorted = edges.to_vec();
    sort_edges_by_weight_desc(&mut sorted);
    unique_in_order(sorted.iter().map(|e| e.src))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heaviest_sources_rank_first() {
        let edges = vec![
            Edge::new(0, 1, 1.0),
            Edge::new(1, 2, 5.0),
            Edge::new(2, 0, 3.0),
            Edge::new(0, 2, 4.0),
        ];
        assert_eq!(centrality_ranks(&edges), vec![1, 0, 2]);
    }

    #[test]
    fn destination_only_sentences_are_dropped() {
        let edges = vec![Edge::new(0, 2, 2.0), Edge::new(1, 2, 1.0)];
        assert_eq!(centrality_ranks(&edges), vec![0, 1]);
    }

    #[test]
    fn equal_weights_keep_edge_order() {
        let edges = vec![Edge::new(2, 0, 1.0), Edge::new(0, 1, 1.0), Edge::new(1, 0, 1.0)];
        assert_eq!(centrality_ranks(&edges), vec![2, 0, 1]);
    }

    #[test]
    fn no_edges_no_ranks() {
        assert!(centrality_ranks(&[]).is_empty());
    }
}
