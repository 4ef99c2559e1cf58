//! Property tests for tldr-summarizer: dictionary idempotence, determinism,
//! reading order, count clamping, the character budget, dedup threshold
//! monotonicity and metric symmetry.

use proptest::prelude::*;

use tldr_summarizer::algorithms::dedup::surviving_indices;
use tldr_summarizer::algorithms::dictionary::build_dictionary;
use tldr_summarizer::algorithms::weighing::{hamming, jaccard};
use tldr_summarizer::Summarizer;

const WORDS: &[&str] = &[
    "harbor", "park", "housing", "council", "city", "river", "café", "niño", "study", "piers",
    "traffic", "well-known", "it's", "year", "2024", "the", "a", "of", "green", "old",
];

const ENDINGS: &[&str] = &[".", "?", "!"];

/// One sentence of 2..8 words ending in `.`, `?` or `!`.
fn sentence() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(prop::sample::select(WORDS), 2..8),
        prop::sample::select(ENDINGS),
    )
        .prop_map(|(words, end)| format!("{}{}", words.join(" "), end))
}

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(sentence(), 1..10).prop_map(|s| s.join(" "))
}

fn token_lists() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(
        prop::collection::vec(prop::sample::select(WORDS).prop_map(str::to_string), 1..6),
        0..10,
    )
}

fn vector_pair() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    (0usize..32).prop_flat_map(|len| {
        (
            prop::collection::vec(0u8..=1, len),
            prop::collection::vec(0u8..=1, len),
        )
    })
}

proptest! {
    #[test]
    fn prop_dictionary_is_idempotent(text in text()) {
        let first = build_dictionary(&text);
        let second = build_dictionary(&text);
        prop_assert_eq!(&first, &second);
        for (i, word) in first.words().iter().enumerate() {
            prop_assert_eq!(first.position(word), Some(i + 1));
        }
    }
}

proptest! {
    #[test]
    fn prop_deterministic(text in text(), count in 1i64..5) {
        let mut s = Summarizer::new();
        let first = s.summarize(&text, count).unwrap();
        let second = s.summarize(&text, count).unwrap();
        prop_assert_eq!(first, second);
    }
}

proptest! {
    #[test]
    fn prop_reading_order(text in text(), count in 1i64..6) {
        let mut s = Summarizer::new();
        if let Some(out) = s.summarize(&text, count).unwrap() {
            let positions: Vec<usize> = out
                .iter()
                .map(|x| s.bag().sentences.iter().position(|y| y == x).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

proptest! {
    #[test]
    fn prop_clamping_law(text in text()) {
        let mut s = Summarizer::new();
        if let Some(top) = s.summarize(&text, 1).unwrap() {
            prop_assert_eq!(top.len(), 1);
            for count in [-1i64, 0, 1_000_000] {
                prop_assert_eq!(s.summarize(&text, count).unwrap(), Some(top.clone()));
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_budget_never_exceeded(text in text(), budget in 1usize..200, count in 1i64..6) {
        let mut s = Summarizer::new();
        s.config_mut().max_characters = budget;
        if let Some(out) = s.summarize(&text, count).unwrap() {
            let total: usize = out.iter().map(|x| x.chars().count()).sum();
            prop_assert!(total <= budget);
        }
    }
}

proptest! {
    #[test]
    fn prop_dedup_threshold_monotonic(lists in token_lists(), a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let kept_low = surviving_indices(&lists, low);
        let kept_high = surviving_indices(&lists, high);
        prop_assert!(kept_low.len() <= kept_high.len());
        prop_assert!(kept_low.iter().all(|i| kept_high.contains(i)));
    }
}

proptest! {
    #[test]
    fn prop_metrics_symmetric((a, b) in vector_pair()) {
        prop_assert_eq!(hamming(&a, &b), hamming(&b, &a));
        prop_assert_eq!(jaccard(&a, &b), jaccard(&b, &a));
        let w = jaccard(&a, &b);
        prop_assert!((0.0..=1.0).contains(&w));
    }
}
