/// Errors raised while turning edges into ranks.
#[derive(Debug, thiserror::Error)]
pub enum RankingError {
    #[error("ranker returned sentence index {index}, but only {sentence_count} sentences exist")]
    IndexOutOfRange { index: usize, sentence_count: usize },
}
