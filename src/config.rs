//! Configuration for the analysis pipeline and the report writer
//!
//! Values come from an optional JSON file and are then overridden by
//! command-line flags.

use crate::defaults;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Sidebar controls of the analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Column holding the free-text review
    pub text_column: String,
    /// Comma separated words to drop from the token stream
    pub exclude_words: String,
    /// Trim whitespace around each excluded word
    pub trim_exclusions: bool,
    /// Minimum count for a word to appear in the frequency table
    pub min_frequency: usize,
    /// Maximum number of words in the word cloud
    pub max_words: usize,
    /// Number of n-grams kept per table
    pub ngram_limit: usize,
    /// Number of words kept per sentiment bucket
    pub top_words_limit: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            text_column: defaults::TEXT_COLUMN.to_string(),
            exclude_words: String::new(),
            trim_exclusions: true,
            min_frequency: defaults::MIN_FREQUENCY,
            max_words: defaults::MAX_WORDS,
            ngram_limit: defaults::NGRAM_LIMIT,
            top_words_limit: defaults::TOP_WORDS_LIMIT,
        }
    }
}

impl AnalysisConfig {
    /// Set the excluded words
    pub fn with_exclusions(mut self, words: &str) -> Self {
        self.exclude_words = words.to_string();
        self
    }

    /// Set the minimum frequency
    pub fn with_min_frequency(mut self, min_frequency: usize) -> Self {
        self.min_frequency = min_frequency;
        self
    }

    /// Set the word cloud cap
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Reject values the controls would not accept
    pub fn validate(&self) -> Result<()> {
        if self.text_column.is_empty() {
            return Err(Error::Config("text_column must not be empty".to_string()));
        }
        if self.min_frequency < 1 {
            return Err(Error::Config("min_frequency must be at least 1".to_string()));
        }
        if self.max_words < 1 {
            return Err(Error::Config("max_words must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub output_dir: PathBuf,
    pub cloud_width: u32,
    pub cloud_height: u32,
    pub chart_width: u32,
    pub chart_height: u32,
    /// Name of the downloadable table
    pub export_file_name: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("report"),
            cloud_width: 800,
            cloud_height: 400,
            chart_width: 1000,
            chart_height: 500,
            export_file_name: defaults::EXPORT_FILE_NAME.to_string(),
        }
    }
}

/// Full application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub analysis: AnalysisConfig,
    pub report: ReportConfig,
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let config: AppConfig = serde_json::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.analysis.validate()?;
        if self.report.cloud_width == 0 || self.report.cloud_height == 0 {
            return Err(Error::Config("word cloud size must be positive".to_string()));
        }
        if self.report.chart_width == 0 || self.report.chart_height == 0 {
            return Err(Error::Config("chart size must be positive".to_string()));
        }
        Ok(())
    }
}
