//! Structured log events for each summarization stage.
//!
//! Each function emits a `tracing` event with structured fields.

/// A summarize call has started.
pub fn summarize_started(text_chars: usize, preset_sentences: usize, algorithm: &str, weighing: &str) {
    tracing::debug!(
        event = "summarize_started",
        text_chars = text_chars,
        preset_sentences = preset_sentences,
        algorithm = %algorithm,
        weighing = %weighing,
        "summarize started"
    );
}

/// Raw text was segmented into sentences.
pub fn sentences_segmented(sentences: usize) {
    tracing::debug!(
        event = "sentences_segmented",
        sentences = sentences,
        "sentences segmented"
    );
}

/// Near-duplicate and subsumed sentences were removed.
pub fn sentences_deduplicated(before: usize, after: usize, threshold: f64) {
    tracing::debug!(
        event = "sentences_deduplicated",
        before = before,
        after = after,
        rejected = before.saturating_sub(after),
        threshold = threshold,
        "sentences deduplicated"
    );
}

/// The vocabulary is ready.
pub fn dictionary_ready(size: usize, supplied: bool) {
    tracing::debug!(
        event = "dictionary_ready",
        size = size,
        supplied = supplied,
        "dictionary ready"
    );
}

/// Nodes and the complete edge set were built.
pub fn graph_built(nodes: usize, edges: usize, weighing: &str) {
    tracing::debug!(
        event = "graph_built",
        nodes = nodes,
        edges = edges,
        weighing = %weighing,
        "sentence graph built"
    );
}

/// The ranking stage finished.
pub fn ranking_completed(algorithm: &str, surviving_edges: usize, ranks: usize) {
    tracing::info!(
        event = "ranking_completed",
        algorithm = %algorithm,
        surviving_edges = surviving_edges,
        ranks = ranks,
        "ranking completed"
    );
}

/// The iterative solver stopped.
pub fn solver_finished(solver: &str, iterations: usize, delta: f64, converged: bool) {
    if converged {
        tracing::debug!(
            event = "solver_finished",
            solver = %solver,
            iterations = iterations,
            delta = delta,
            "rank solver converged"
        );
    } else {
        tracing::warn!(
            event = "solver_finished",
            solver = %solver,
            iterations = iterations,
            delta = delta,
            "rank solver hit the iteration cap before converging"
        );
    }
}

/// Nothing could be ranked; the caller gets an empty result.
pub fn summary_empty(reason: &str) {
    tracing::info!(event = "summary_empty", reason = %reason, "no summary produced");
}

/// A requested count was out of range and clamped to 1.
pub fn count_clamped(requested: i64, available: usize) {
    tracing::debug!(
        event = "count_clamped",
        requested = requested,
        available = available,
        "sentence count clamped to 1"
    );
}

/// Final sentences were selected.
pub fn summary_selected(selected: usize, characters: usize, truncated: bool) {
    tracing::info!(
        event = "summary_selected",
        selected = selected,
        characters = characters,
        truncated = truncated,
        "summary selected"
    );
}
