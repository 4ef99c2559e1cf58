//! Near-duplicate (Jaro-Winkler) and containment (CSIS) sentence removal.
//!
//! Both passes read one lowercase snapshot of the space-joined token lists,
//! and each decision is made against the full candidate set. Rejecting a
//! sentence never changes whether another one is rejected, so a higher
//! distance threshold can only keep more sentences.

use super::jaro_winkler::jaro_winkler;

/// Indices (ascending) of the token lists that survive deduplication.
///
/// A sentence is rejected when
/// - an earlier sentence scores `>= threshold` against it, or
/// - its joined text is a substring of another sentence's joined text
///   (for identical texts only the later one is rejected).
pub fn surviving_indices(token_lists: &[Vec<String>], threshold: f64) -> Vec<usize> {
    let snapshot: Vec<String> = token_lists
        .iter()
        .map(|tokens| tokens.join(" ").to_lowercase())
        .collect();

    let mut reject = vec![false; snapshot.len()];

    // First Jaro-Winkler.
    for j in 1..snapshot.len() {
        reject[j] = (0..j).any(|i| jaro_winkler(&snapshot[i], &snapshot[j]) >= threshold);
    }

    // Then CSIS.
    for (k, needle) in snapshot.iter().enumerate() {
        if reject[k] {
            continue;
        }
        reject[k] = snapshot
            .iter()
            .enumerate()
            .any(|(m, hay)| m != k && hay.contains(needle.as_str()) && (hay != needle || m < k));
    }

    reject
        .iter()
        .enumerate()
        .filter(|(_, &rejected)| !rejected)
        .map(|(i, _)| i)
        .collect()
}

/// Deduplicated copy of `token_lists`.
pub fn uniq_sentences(token_lists: &[Vec<String>], threshold: f64) -> Vec<Vec<String>> {
    surviving_indices(token_lists, threshold)
        .into_iter()
        .map(|i| token_lists[i].clone())
        .collect()
}

/// Keep only the entries of `items` whose positions appear in `keep` (ascending).
pub fn retain_positions<T>(items: Vec<T>, keep: &[usize]) -> Vec<T> {
    let mut keep = keep.iter().peekable();
    items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| {
            if keep.peek() == Some(&&i) {
                keep.next();
                Some(item)
            } else {
                None
            }
        })
        .collect()
}
