//! Golden summaries: fixed corpora and settings with exact expected output.

use test_fixtures::{golden_summaries, GoldenSummary};
use tldr_core::SummarizerConfig;
use tldr_summarizer::Summarizer;

fn run(case: &GoldenSummary) -> Option<Vec<String>> {
    let config: SummarizerConfig = serde_json::from_value(case.config.clone())
        .unwrap_or_else(|e| panic!("{}: bad config: {e}", case.name));
    let mut summarizer = Summarizer::with_config(config)
        .unwrap_or_else(|e| panic!("{}: invalid config: {e}", case.name));
    if let Some(sentences) = &case.sentences {
        summarizer.set_sentences(sentences.iter().cloned());
    }
    summarizer
        .summarize(&case.text(), case.count)
        .unwrap_or_else(|e| panic!("{}: summarize failed: {e}", case.name))
}

#[test]
fn golden_summaries_match() {
    let cases = golden_summaries();
    assert!(cases.len() >= 7, "expected at least 7 golden cases, got {}", cases.len());
    for case in &cases {
        assert_eq!(run(case), case.expected, "golden case {}", case.name);
    }
}

#[test]
fn golden_budget_case_fills_the_budget_exactly() {
    let case = golden_summaries()
        .into_iter()
        .find(|c| c.name == "character_budget")
        .expect("character_budget case present");
    let budget = case.config["max_characters"].as_u64().unwrap() as usize;
    let out = run(&case).unwrap();
    let total: usize = out.iter().map(|s| s.chars().count()).sum();
    assert_eq!(total, budget);
}
