mod config_error;
mod ranking_error;
mod tldr_error;

pub use config_error::ConfigError;
pub use ranking_error::RankingError;
pub use tldr_error::{TldrError, TldrResult};
