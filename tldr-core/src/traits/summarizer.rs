use crate::errors::TldrResult;

/// Extractive summarization of a single text.
pub trait ISummarizer {
    /// Pick up to `count` representative sentences in original reading order.
    ///
    /// `Ok(None)` means there was nothing to rank. Counts below 1 or above the
    /// number of ranked sentences are clamped to 1.
    fn summarize(&mut self, text: &str, count: i64) -> TldrResult<Option<Vec<String>>>;
}
