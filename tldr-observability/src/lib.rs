//! # tldr-observability
//!
//! Tracing subscriber setup and the structured events the summarizer emits
//! at each pipeline stage.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_with_filter, try_init_tracing};
