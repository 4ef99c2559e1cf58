//! # tldr-core
//!
//! Foundation crate for the tldr summarizer.
//! Defines the sentence-graph models, strategy tags, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{SummarizerConfig, TldrConfig};
pub use errors::{TldrError, TldrResult};
pub use models::{Algorithm, Dictionary, Edge, Node, Rank, Weighing};
