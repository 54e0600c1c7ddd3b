//! End-to-end analysis run
//!
//! Loader → Normalizer → Classifier → Aggregators. Every run starts from a
//! fresh table; nothing is carried over between runs.

use crate::config::AnalysisConfig;
use crate::data::{DataLoader, Table};
use crate::error::Result;
use crate::models::{Classification, NGramCount, SentimentCounts, SentimentLabel, WordCount};
use crate::nlp::{ExclusionList, Normalizer, StopWords};
use crate::sentiment::{PolarityScorer, SentimentClassifier};
use crate::stats;
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Everything the presenter shows for one run
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Input table with the cleaned text column and the two sentiment columns
    pub table: Table,
    /// Name of the analyzed text column
    pub text_column: String,
    /// Filtered token stream in row order
    pub tokens: Vec<String>,
    pub classifications: Vec<Classification>,
    pub frequency: Vec<WordCount>,
    pub bigrams: Vec<NGramCount>,
    pub trigrams: Vec<NGramCount>,
    pub top_positive: Vec<WordCount>,
    pub top_negative: Vec<WordCount>,
    pub word_cloud: Vec<WordCount>,
    pub sentiment_counts: SentimentCounts,
}

impl AnalysisReport {
    /// The classified table as the `results.csv` download
    pub fn export_csv(&self) -> Result<Vec<u8>> {
        DataLoader::export_bytes(&self.table)
    }

    pub fn summary(&self) -> ReportSummary<'_> {
        ReportSummary {
            generated_at: chrono::Utc::now(),
            rows: self.table.len(),
            tokens: self.tokens.len(),
            distinct_words: stats::word_cloud_input(&self.tokens, usize::MAX).len(),
            sentiment: self.sentiment_counts,
            frequency: &self.frequency,
            bigrams: self.bigrams.iter().map(|g| (g.joined(), g.count)).collect(),
            trigrams: self.trigrams.iter().map(|g| (g.joined(), g.count)).collect(),
            top_positive: &self.top_positive,
            top_negative: &self.top_negative,
        }
    }
}

/// JSON view of a report
#[derive(Debug, Serialize)]
pub struct ReportSummary<'a> {
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub rows: usize,
    pub tokens: usize,
    pub distinct_words: usize,
    pub sentiment: SentimentCounts,
    pub frequency: &'a [WordCount],
    pub bigrams: Vec<(String, usize)>,
    pub trigrams: Vec<(String, usize)>,
    pub top_positive: &'a [WordCount],
    pub top_negative: &'a [WordCount],
}

/// Configured pipeline, rebuilt whenever the controls change
pub struct Pipeline {
    config: AnalysisConfig,
    normalizer: Normalizer,
    classifier: SentimentClassifier,
}

impl Pipeline {
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        Self::with_scorer(config, None)
    }

    /// Use a custom polarity scorer instead of the bundled lexicon
    pub fn with_scorer(
        config: AnalysisConfig,
        scorer: Option<Box<dyn PolarityScorer>>,
    ) -> Result<Self> {
        config.validate()?;

        let exclusions = if config.trim_exclusions {
            ExclusionList::parse(&config.exclude_words)
        } else {
            ExclusionList::parse_untrimmed(&config.exclude_words)
        };
        let normalizer = Normalizer::new(StopWords::english(), exclusions);
        let classifier = match scorer {
            Some(scorer) => SentimentClassifier::new(scorer),
            None => SentimentClassifier::default(),
        };

        Ok(Self {
            config,
            normalizer,
            classifier,
        })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Parse CSV and run
    pub fn run_csv<R: Read>(&self, reader: R) -> Result<AnalysisReport> {
        let table = DataLoader::read_csv(reader)?;
        self.run(table)
    }

    pub fn run_path<P: AsRef<Path>>(&self, path: P) -> Result<AnalysisReport> {
        let table = DataLoader::load_csv(path)?;
        self.run(table)
    }

    /// Run all stages on an owned table
    pub fn run(&self, mut table: Table) -> Result<AnalysisReport> {
        let column = self.config.text_column.as_str();
        table.require_column(column)?;
        info!(rows = table.len(), "Loaded table");

        let tokens = self.normalizer.tokenize_and_filter(&mut table, column)?;
        info!(tokens = tokens.len(), "Normalized text");

        let classifications = self.classifier.classify(&mut table, column)?;
        let sentiment_counts = stats::sentiment_counts(&classifications);
        info!(
            positive = sentiment_counts.positive,
            negative = sentiment_counts.negative,
            neutral = sentiment_counts.neutral,
            "Classified reviews"
        );

        let stop_words = self.normalizer.stop_words();
        let frequency = stats::frequency_table(&tokens, self.config.min_frequency);
        let bigrams = stats::ngram_frequency(&tokens, 2, self.config.ngram_limit);
        let trigrams = stats::ngram_frequency(&tokens, 3, self.config.ngram_limit);
        let top_positive = stats::top_words(
            &table,
            column,
            SentimentLabel::Positive,
            stop_words,
            self.config.top_words_limit,
        )?;
        let top_negative = stats::top_words(
            &table,
            column,
            SentimentLabel::Negative,
            stop_words,
            self.config.top_words_limit,
        )?;
        let word_cloud = stats::word_cloud_input(&tokens, self.config.max_words);
        debug!(
            frequency = frequency.len(),
            bigrams = bigrams.len(),
            trigrams = trigrams.len(),
            cloud = word_cloud.len(),
            "Built aggregates"
        );

        Ok(AnalysisReport {
            table,
            text_column: column.to_string(),
            tokens,
            classifications,
            frequency,
            bigrams,
            trigrams,
            top_positive,
            top_negative,
            word_cloud,
            sentiment_counts,
        })
    }
}
