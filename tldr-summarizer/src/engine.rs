//! Summarizer: owns the settings, injected strategies and the working state
//! of the last run.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tldr_core::errors::{RankingError, TldrResult};
use tldr_core::models::{
    Algorithm, CustomAlgorithm, CustomWeighing, Dictionary, Edge, Node, Weighing, WordTokenizer,
};
use tldr_core::traits::{IRankSolver, ISummarizer};
use tldr_core::SummarizerConfig;
use tldr_observability::events;
use tracing::instrument;

use crate::algorithms::dedup::{retain_positions, surviving_indices};
use crate::algorithms::dictionary::build_dictionary;
use crate::algorithms::sentence_splitter::split_sentences;
use crate::algorithms::vectorizer::create_nodes;
use crate::algorithms::weighing::{build_edges, WeighingStrategy};
use crate::algorithms::word_tokenizer::default_word_tokenizer;
use crate::ranking::{PowerIterationSolver, RankingParams, RankingStrategy};
use crate::selection::{assemble, clamp_count, select_indices};

/// Working state of the most recent `summarize` call.
///
/// `sentences` and `words_per_sentence` stay index-aligned after dedup;
/// node, edge and rank indices all point into them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bag {
    pub sentences: Vec<String>,
    pub words_per_sentence: Vec<Vec<String>>,
    pub dictionary: Dictionary,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub ranks: Vec<usize>,
}

/// Extractive summarizer over a sentence similarity graph.
///
/// One instance serves one call at a time (`summarize` takes `&mut self`);
/// use one instance per thread for concurrent work.
pub struct Summarizer {
    config: SummarizerConfig,
    dictionary: Option<Dictionary>,
    preset_sentences: Vec<String>,
    custom_algorithm: Option<CustomAlgorithm>,
    custom_weighing: Option<CustomWeighing>,
    word_tokenizer: WordTokenizer,
    rank_solver: Arc<dyn IRankSolver>,
    bag: Bag,
}

impl Summarizer {
    /// A summarizer with default settings.
    pub fn new() -> Self {
        Self {
            config: SummarizerConfig::default(),
            dictionary: None,
            preset_sentences: Vec::new(),
            custom_algorithm: None,
            custom_weighing: None,
            word_tokenizer: default_word_tokenizer(),
            rank_solver: Arc::new(PowerIterationSolver::new()),
            bag: Bag::default(),
        }
    }

    /// A summarizer with the given settings, validated up front.
    pub fn with_config(config: SummarizerConfig) -> TldrResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Mutable settings. Checked again at the start of every `summarize`.
    pub fn config_mut(&mut self) -> &mut SummarizerConfig {
        &mut self.config
    }

    /// Apply the common settings in one call. Names go through the lenient
    /// lookup, so an unknown algorithm means PageRank and an unknown metric
    /// means Hamming.
    #[allow(clippy::too_many_arguments)]
    pub fn set(
        &mut self,
        max_characters: usize,
        damping: f64,
        tolerance: f64,
        threshold: f64,
        sentence_distance_threshold: f64,
        algorithm: &str,
        weighing: &str,
    ) -> TldrResult<()> {
        let config = SummarizerConfig {
            algorithm: Algorithm::from_name(algorithm),
            weighing: Weighing::from_name(weighing),
            damping,
            tolerance,
            threshold,
            sentence_distance_threshold,
            max_characters,
            ..self.config.clone()
        };
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Lenient: unknown names select PageRank.
    pub fn set_algorithm_name(&mut self, name: &str) {
        self.config.algorithm = Algorithm::from_name(name);
    }

    /// Lenient: unknown names select Hamming.
    pub fn set_weighing_name(&mut self, name: &str) {
        self.config.weighing = Weighing::from_name(name);
    }

    /// Use a fixed vocabulary instead of building one per call.
    ///
    /// An empty map counts as no dictionary: one is built from each input.
    pub fn set_dictionary(&mut self, positions: HashMap<String, usize>) -> TldrResult<()> {
        let dictionary = Dictionary::from_positions(positions)?;
        self.dictionary = (!dictionary.is_empty()).then_some(dictionary);
        Ok(())
    }

    /// Go back to building the dictionary from each input.
    pub fn clear_dictionary(&mut self) {
        self.dictionary = None;
    }

    /// Store a ranking function. Takes effect while the algorithm is `custom`.
    pub fn set_custom_algorithm<F>(&mut self, f: F)
    where
        F: Fn(&[Edge]) -> Vec<usize> + Send + Sync + 'static,
    {
        self.custom_algorithm = Some(Arc::new(f));
    }

    /// Store a weighing function. Takes effect while the weighing is `custom`.
    pub fn set_custom_weighing<F>(&mut self, f: F)
    where
        F: Fn(&[u8], &[u8]) -> f64 + Send + Sync + 'static,
    {
        self.custom_weighing = Some(Arc::new(f));
    }

    pub fn set_word_tokenizer<F>(&mut self, f: F)
    where
        F: Fn(&str) -> Vec<String> + Send + Sync + 'static,
    {
        self.word_tokenizer = Arc::new(f);
    }

    /// Summarize these sentences instead of segmenting the input text.
    /// They stay in effect until replaced or cleared.
    pub fn set_sentences<I, S>(&mut self, sentences: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preset_sentences = sentences.into_iter().map(Into::into).collect();
    }

    pub fn clear_sentences(&mut self) {
        self.preset_sentences.clear();
    }

    pub fn set_rank_solver(&mut self, solver: Arc<dyn IRankSolver>) {
        self.rank_solver = solver;
    }

    /// Working state of the last run.
    pub fn bag(&self) -> &Bag {
        &self.bag
    }

    /// Pick up to `count` representative sentences, in reading order.
    ///
    /// Returns `Ok(None)` when there is nothing to rank.
    ///
    /// # Panics
    /// Panics if the algorithm or weighing is `custom` and no matching
    /// function has been set.
    #[instrument(skip(self, text), fields(algorithm = %self.config.algorithm, weighing = %self.config.weighing))]
    pub fn summarize(&mut self, text: &str, count: i64) -> TldrResult<Option<Vec<String>>> {
        self.config.validate()?;
        self.bag = Bag::default();

        let ranking = match RankingStrategy::resolve(
            self.config.algorithm,
            &self.rank_solver,
            self.custom_algorithm.as_ref(),
        ) {
            Some(strategy) => strategy,
            None => panic!("algorithm is `custom` but no custom algorithm function was set"),
        };
        let weighing = match WeighingStrategy::resolve(
            self.config.weighing,
            self.custom_weighing.as_ref(),
        ) {
            Some(strategy) => strategy,
            None => panic!("weighing is `custom` but no custom weighing function was set"),
        };

        let text = text.trim();
        events::summarize_started(
            text.chars().count(),
            self.preset_sentences.len(),
            ranking.name(),
            weighing.name(),
        );

        if text.is_empty() && self.preset_sentences.is_empty() {
            events::summary_empty("no input text");
            return Ok(None);
        }

        let ((sentences, token_lists), built_dictionary) = self.segment(text);
        events::sentences_segmented(sentences.len());

        let before = token_lists.len();
        let threshold = self.config.sentence_distance_threshold;
        let keep = surviving_indices(&token_lists, threshold);
        let sentences = retain_positions(sentences, &keep);
        let token_lists = retain_positions(token_lists, &keep);
        events::sentences_deduplicated(before, keep.len(), threshold);

        let supplied = self.dictionary.is_some();
        let dictionary = match (&self.dictionary, built_dictionary) {
            (Some(dictionary), _) => dictionary.clone(),
            (None, Some(built)) => built,
            (None, None) => build_dictionary(&sentences.join(" ")),
        };
        events::dictionary_ready(dictionary.len(), supplied);

        let nodes = create_nodes(&token_lists, &dictionary);
        let edges = build_edges(&nodes, &weighing);
        events::graph_built(nodes.len(), edges.len(), weighing.name());

        let params = RankingParams {
            threshold: self.config.threshold,
            damping: self.config.damping,
            tolerance: self.config.tolerance,
            max_iterations: self.config.max_iterations,
        };
        let (ranks, surviving_edges) = ranking.rank(&edges, &params);
        events::ranking_completed(ranking.name(), surviving_edges, ranks.len());

        self.bag = Bag {
            sentences,
            words_per_sentence: token_lists,
            dictionary,
            nodes,
            edges,
            ranks,
        };

        let sentence_count = self.bag.sentences.len();
        if let Some(&index) = self.bag.ranks.iter().find(|&&i| i >= sentence_count) {
            return Err(RankingError::IndexOutOfRange {
                index,
                sentence_count,
            }
            .into());
        }

        if self.bag.ranks.is_empty() {
            events::summary_empty("no ranked sentences");
            return Ok(None);
        }

        let available = self.bag.ranks.len();
        let n = clamp_count(count, available);
        if i64::try_from(n).ok() != Some(count) {
            events::count_clamped(count, available);
        }

        let indices = select_indices(&self.bag.ranks, n);
        let selection = assemble(&self.bag.sentences, &indices, self.config.max_characters);
        events::summary_selected(
            selection.sentences.len(),
            selection.characters,
            selection.truncated,
        );

        Ok(Some(selection.sentences))
    }

    /// Original sentences with their token lists, plus a dictionary built
    /// from `text` when one is needed and there is text to build it from.
    /// The two halves run concurrently.
    fn segment(&self, text: &str) -> ((Vec<String>, Vec<Vec<String>>), Option<Dictionary>) {
        let tokenizer = &self.word_tokenizer;
        let preset = &self.preset_sentences;
        let needs_dictionary = self.dictionary.is_none() && !text.is_empty();

        rayon::join(
            || {
                let sentences = if preset.is_empty() {
                    split_sentences(text)
                } else {
                    preset.clone()
                };
                let token_lists = sentences.iter().map(|s| tokenizer(s)).collect();
                (sentences, token_lists)
            },
            || needs_dictionary.then(|| build_dictionary(text)),
        )
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Summarizer")
            .field("config", &self.config)
            .field("dictionary", &self.dictionary.as_ref().map(Dictionary::len))
            .field("preset_sentences", &self.preset_sentences.len())
            .field("custom_algorithm", &self.custom_algorithm.is_some())
            .field("custom_weighing", &self.custom_weighing.is_some())
            .field("rank_solver", &self.rank_solver.name())
            .finish_non_exhaustive()
    }
}

impl ISummarizer for Summarizer {
    fn summarize(&mut self, text: &str, count: i64) -> TldrResult<Option<Vec<String>>> {
        Summarizer::summarize(self, text, count)
    }
}
