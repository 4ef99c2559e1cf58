//! Jaro-Winkler string similarity (1.0 = identical).

use tldr_core::constants::{JARO_WINKLER_MAX_PREFIX, JARO_WINKLER_PREFIX_WEIGHT};

/// Jaro-Winkler similarity of two strings, compared by `char`.
///
/// Identical non-empty strings score 1.0; two empty strings score 0.0.
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let sim = jaro(&a, &b);

    let prefix = a
        .iter()
        .zip(&b)
        .take(JARO_WINKLER_MAX_PREFIX)
        .take_while(|(x, y)| x == y)
        .count();

    sim + prefix as f64 * JARO_WINKLER_PREFIX_WEIGHT * (1.0 - sim)
}

/// Classic Jaro similarity.
///
/// Characters match when equal and no further apart than
/// `max(len) / 2 - 1`; transpositions are counted in halves.
pub fn jaro(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let window = (a.len().max(b.len()) / 2).saturating_sub(1);
    let mut a_matched = vec![false; a.len()];
    let mut b_matched = vec![false; b.len()];
    let mut matches = 0usize;

    for (i, &ca) in a.iter().enumerate() {
        let lo = i.saturating_sub(window);
        let hi = (i + window + 1).min(b.len());
        for k in lo..hi {
            if !b_matched[k] && b[k] == ca {
                a_matched[i] = true;
                b_matched[k] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let mut half_transpositions = 0usize;
    let mut k = 0;
    for (i, &ca) in a.iter().enumerate() {
        if !a_matched[i] {
            continue;
        }
        while !b_matched[k] {
            k += 1;
        }
        if ca != b[k] {
            half_transpositions += 1;
        }
        k += 1;
    }

    let m = matches as f64;
    let t = half_transpositions as f64 / 2.0;
    (m / a.len() as f64 + m / b.len() as f64 + (m - t) / m) / 3.0
}
