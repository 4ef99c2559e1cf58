use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use tldr_core::models::{Algorithm, Weighing};
use tldr_summarizer::algorithms::dedup::surviving_indices;
use tldr_summarizer::algorithms::sentence_splitter::split_sentences;
use tldr_summarizer::algorithms::word_tokenizer::tokenize_words;
use tldr_summarizer::Summarizer;

/// The harbor corpus repeated with a numbered suffix so sentences stay distinct.
fn corpus(copies: usize) -> String {
    let base = test_fixtures::load_text("corpora/harbor_council.txt");
    (0..copies)
        .map(|i| base.replace(". ", &format!(" in district {i}. ")))
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");
    for copies in [1, 4, 8] {
        let text = corpus(copies);
        for (algorithm, weighing) in [
            (Algorithm::PageRank, Weighing::Hamming),
            (Algorithm::Centrality, Weighing::Jaccard),
        ] {
            let id = BenchmarkId::new(format!("{algorithm}_{weighing}"), copies);
            group.bench_with_input(id, &text, |b, text| {
                let mut s = Summarizer::new();
                s.config_mut().algorithm = algorithm;
                s.config_mut().weighing = weighing;
                b.iter(|| s.summarize(text, 3).unwrap());
            });
        }
    }
    group.finish();
}

fn bench_dedup(c: &mut Criterion) {
    let text = corpus(8);
    let lists: Vec<Vec<String>> = split_sentences(&text)
        .iter()
        .map(|s| tokenize_words(s))
        .collect();
    c.bench_function("dedup_104_sentences", |b| {
        b.iter(|| surviving_indices(&lists, 0.95));
    });
}

criterion_group!(benches, bench_pipeline, bench_dedup);
criterion_main!(benches);
