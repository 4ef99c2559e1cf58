use super::{ConfigError, RankingError};

/// Convenience alias used throughout the workspace.
pub type TldrResult<T> = Result<T, TldrError>;

/// Top-level error for every fallible tldr operation.
///
/// An empty summary is not an error: it is reported as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum TldrError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("ranking error: {0}")]
    Ranking(#[from] RankingError),
}
