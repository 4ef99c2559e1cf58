//! Sentence-graph models shared by every stage of the pipeline.

mod dictionary;
mod edge;
mod node;
mod rank;
mod strategy;

pub use dictionary::Dictionary;
pub use edge::Edge;
pub use node::{Node, PresenceVector};
pub use rank::Rank;
pub use strategy::{Algorithm, CustomAlgorithm, CustomWeighing, Weighing, WordTokenizer};
