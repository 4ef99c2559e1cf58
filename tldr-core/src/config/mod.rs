//! Configuration for the summarizer and its observability layer.
//!
//! Every section is `#[serde(default)]`, so an empty TOML document yields
//! the defaults in [`defaults`].

pub mod defaults;
mod observability_config;
mod summarizer_config;

pub use observability_config::ObservabilityConfig;
pub use summarizer_config::SummarizerConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, TldrResult};

/// Root configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TldrConfig {
    pub summarizer: SummarizerConfig,
    pub observability: ObservabilityConfig,
}

impl TldrConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(toml_str: &str) -> TldrResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.summarizer.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> TldrResult<String> {
        let rendered = toml::to_string(self).map_err(|e| ConfigError::Serialize {
            reason: e.to_string(),
        })?;
        Ok(rendered)
    }
}
