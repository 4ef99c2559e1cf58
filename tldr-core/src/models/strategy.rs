//! Strategy tags for ranking and weighing, plus the injectable function types.
//!
//! Tags parse strictly through `FromStr` and serde. [`Algorithm::from_name`]
//! and [`Weighing::from_name`] are the lenient adapters: any unrecognized
//! name resolves to the default variant.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Edge;
use crate::errors::ConfigError;

/// Caller-supplied ranking: receives every edge (unfiltered) and returns
/// sentence indices, most important first.
pub type CustomAlgorithm = Arc<dyn Fn(&[Edge]) -> Vec<usize> + Send + Sync>;

/// Caller-supplied edge weight over two presence vectors.
pub type CustomWeighing = Arc<dyn Fn(&[u8], &[u8]) -> f64 + Send + Sync>;

/// Caller-supplied sentence → word tokens splitter.
pub type WordTokenizer = Arc<dyn Fn(&str) -> Vec<String> + Send + Sync>;

/// Ranking strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Degree-style: sources of the heaviest edges rank first.
    Centrality,
    /// Iterative link analysis over the weighted sentence graph.
    #[default]
    #[serde(alias = "iterative")]
    PageRank,
    /// Delegate to a function set on the summarizer.
    Custom,
}

impl Algorithm {
    /// Lenient lookup: unknown names (including "") fall back to [`Algorithm::PageRank`].
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Centrality => "centrality",
            Self::PageRank => "pagerank",
            Self::Custom => "custom",
        }
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "centrality" => Ok(Self::Centrality),
            "pagerank" | "iterative" => Ok(Self::PageRank),
            "custom" => Ok(Self::Custom),
            other => Err(ConfigError::UnknownAlgorithm {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Edge weighing metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weighing {
    /// Count of differing positions.
    #[default]
    Hamming,
    /// `1 - c / (2V - c)` where `c` counts agreeing positions, co-absence included.
    Jaccard,
    /// Delegate to a function set on the summarizer.
    Custom,
}

impl Weighing {
    /// Lenient lookup: unknown names (including "") fall back to [`Weighing::Hamming`].
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hamming => "hamming",
            Self::Jaccard => "jaccard",
            Self::Custom => "custom",
        }
    }
}

impl FromStr for Weighing {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hamming" => Ok(Self::Hamming),
            "jaccard" => Ok(Self::Jaccard),
            "custom" => Ok(Self::Custom),
            other => Err(ConfigError::UnknownWeighing {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Weighing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_parse_rejects_unknown_names() {
        assert!("invalid".parse::<Algorithm>().is_err());
        assert!("pagerank".parse::<Weighing>().is_err());
        assert!("".parse::<Algorithm>().is_err());
    }

    #[test]
    fn lenient_adapter_falls_back_to_defaults() {
        assert_eq!(Algorithm::from_name("invalid"), Algorithm::PageRank);
        assert_eq!(Algorithm::from_name(""), Algorithm::PageRank);
        assert_eq!(Weighing::from_name("pagerank"), Weighing::Hamming);
        assert_eq!(Weighing::from_name(""), Weighing::Hamming);
    }

    #[test]
    fn iterative_is_an_alias_for_pagerank() {
        assert_eq!(Algorithm::from_name("iterative"), Algorithm::PageRank);
        assert_eq!(Algorithm::PageRank.to_string(), "pagerank");
    }

    #[test]
    fn known_names_round_trip_through_display() {
        for alg in [Algorithm::Centrality, Algorithm::PageRank, Algorithm::Custom] {
            assert_eq!(alg.to_string().parse::<Algorithm>().unwrap(), alg);
        }
        for w in [Weighing::Hamming, Weighing::Jaccard, Weighing::Custom] {
            assert_eq!(w.to_string().parse::<Weighing>().unwrap(), w);
        }
    }
}
