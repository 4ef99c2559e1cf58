use tldr_core::config::*;
use tldr_core::errors::{ConfigError, TldrError};
use tldr_core::models::{Algorithm, Weighing};

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = TldrConfig::from_toml("").unwrap();

    assert_eq!(config.summarizer.algorithm, Algorithm::PageRank);
    assert_eq!(config.summarizer.weighing, Weighing::Hamming);
    assert_eq!(config.summarizer.damping, 0.85);
    assert_eq!(config.summarizer.tolerance, 0.0001);
    assert_eq!(config.summarizer.threshold, 0.001);
    assert_eq!(config.summarizer.sentence_distance_threshold, 0.95);
    assert_eq!(config.summarizer.max_characters, 0);
    assert_eq!(config.summarizer.max_iterations, 100);

    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[summarizer]
algorithm = "centrality"
weighing = "jaccard"
max_characters = 280

[observability]
log_level = "debug"
"#;
    let config = TldrConfig::from_toml(toml).unwrap();
    assert_eq!(config.summarizer.algorithm, Algorithm::Centrality);
    assert_eq!(config.summarizer.weighing, Weighing::Jaccard);
    assert_eq!(config.summarizer.max_characters, 280);
    // Non-overridden fields keep defaults
    assert_eq!(config.summarizer.damping, 0.85);
    assert_eq!(config.observability.log_level, "debug");
}

#[test]
fn iterative_alias_is_accepted_in_toml() {
    let config = TldrConfig::from_toml("[summarizer]\nalgorithm = \"iterative\"\n").unwrap();
    assert_eq!(config.summarizer.algorithm, Algorithm::PageRank);
}

#[test]
fn unknown_algorithm_in_toml_is_a_parse_error() {
    let err = TldrConfig::from_toml("[summarizer]\nalgorithm = \"invalid\"\n").unwrap_err();
    assert!(matches!(err, TldrError::Config(ConfigError::Parse { .. })));
}

#[test]
fn out_of_range_values_fail_validation() {
    let err = TldrConfig::from_toml("[summarizer]\ndamping = 1.5\n").unwrap_err();
    assert!(err.to_string().contains("damping"));
}

#[test]
fn config_round_trips_through_toml() {
    let mut config = TldrConfig::default();
    config.summarizer.algorithm = Algorithm::Centrality;
    config.summarizer.threshold = 0.5;
    let toml_str = config.to_toml().unwrap();
    let roundtripped = TldrConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped, config);
}
