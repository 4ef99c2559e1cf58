/// Library version, kept in lockstep with the workspace package version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable consulted for the tracing filter.
pub const LOG_ENV_VAR: &str = "TLDR_LOG";

/// Jaro-Winkler prefix scaling factor.
pub const JARO_WINKLER_PREFIX_WEIGHT: f64 = 0.1;

/// Longest common prefix credited by the Winkler boost.
pub const JARO_WINKLER_MAX_PREFIX: usize = 4;
