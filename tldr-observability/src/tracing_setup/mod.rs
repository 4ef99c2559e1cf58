//! Tracing setup: subscriber installation plus structured pipeline events.

pub mod events;

use tldr_core::config::ObservabilityConfig;
use tldr_core::constants::LOG_ENV_VAR;
use tracing_subscriber::EnvFilter;

fn filter_for(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Install the global subscriber, returning `false` if one is already set.
///
/// Respects the `TLDR_LOG` environment variable for filtering, falling back
/// to `config.log_level`.
pub fn try_init_tracing(config: &ObservabilityConfig) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter_for(config))
        .with_target(true);

    if config.json {
        builder
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
            .is_ok()
    } else {
        builder.try_init().is_ok()
    }
}

/// Install the global subscriber.
///
/// # Panics
/// Panics if a global subscriber has already been installed.
pub fn init_tracing(config: &ObservabilityConfig) {
    assert!(
        try_init_tracing(config),
        "a global tracing subscriber is already installed"
    );
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .json()
        .try_init()
        .is_ok()
}
