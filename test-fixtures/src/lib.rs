//! Test fixture loader for tldr golden summaries and sample corpora.
//!
//! Provides typed deserialization of the fixture JSON files and helper
//! functions for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.join("golden").exists() {
        return path;
    }
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// A golden summary case: input, settings, and the exact expected output.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenSummary {
    pub name: String,
    /// Corpus file (relative to the fixtures root) to summarize.
    #[serde(default)]
    pub corpus: Option<String>,
    /// Pre-supplied sentences, bypassing segmentation.
    #[serde(default)]
    pub sentences: Option<Vec<String>>,
    pub count: i64,
    /// Partial summarizer settings; missing keys take their defaults.
    pub config: serde_json::Value,
    /// `None` means the empty-result signal.
    pub expected: Option<Vec<String>>,
}

impl GoldenSummary {
    /// Text to pass to `summarize`: the corpus contents, or "" when sentences are pre-supplied.
    pub fn text(&self) -> String {
        self.corpus.as_deref().map(load_text).unwrap_or_default()
    }
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a plain-text fixture (corpora).
pub fn load_text(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Load every golden summary case, sorted by file name.
pub fn golden_summaries() -> Vec<GoldenSummary> {
    let dir = fixtures_root().join("golden/summaries");
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    paths.sort();
    paths
        .iter()
        .map(|p| {
            let relative = p
                .strip_prefix(fixtures_root())
                .unwrap_or(p)
                .to_string_lossy()
                .into_owned();
            load_fixture(&relative)
        })
        .collect()
}
