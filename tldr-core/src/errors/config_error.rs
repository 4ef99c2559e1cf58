/// Configuration errors: malformed TOML, unknown strategy names, out-of-range values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse TOML: {reason}")]
    Parse { reason: String },

    #[error("failed to serialize TOML: {reason}")]
    Serialize { reason: String },

    #[error("unknown algorithm: {name}")]
    UnknownAlgorithm { name: String },

    #[error("unknown weighing: {name}")]
    UnknownWeighing { name: String },

    #[error("{field} = {value} is out of range: {expected}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("invalid dictionary entry {word:?} at position {position}: {reason}")]
    InvalidDictionary {
        word: String,
        position: usize,
        reason: &'static str,
    },
}
