//! # Rust review analytics
//!
//! Text and sentiment preliminary analysis of CSV review datasets:
//! word frequencies, word cloud, polarity-based sentiment, n-grams and
//! top positive/negative words, with an export of the classified table.
//!
//! ## Modules
//!
//! - `data` - CSV loading and export
//! - `nlp` - Cleaning, stop words, exclusion list
//! - `sentiment` - Polarity scoring and classification
//! - `stats` - Frequency, n-gram and top-word aggregates
//! - `pipeline` - One full analysis run
//! - `report` - Charts, word cloud, terminal tables
//! - `session` - Interactive re-run loop
//!
//! ## Example Usage
//!
//! ```no_run
//! use rust_review_analytics::{AnalysisConfig, Pipeline};
//!
//! let pipeline = Pipeline::new(AnalysisConfig::default().with_exclusions("pen")).unwrap();
//! let report = pipeline.run_path("reviews.csv").unwrap();
//! println!("{}", report.sentiment_counts);
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod nlp;
pub mod pipeline;
pub mod report;
pub mod sentiment;
pub mod session;
pub mod stats;

pub use config::{AnalysisConfig, AppConfig, ReportConfig};
pub use data::{DataLoader, Table};
pub use error::{Error, Result};
pub use models::{SentimentCounts, SentimentLabel, WordCount};
pub use nlp::{clean_text, Normalizer, StopWords};
pub use pipeline::{AnalysisReport, Pipeline};
pub use report::{ReportWriter, Tab};
pub use sentiment::{LexiconScorer, PolarityScorer, SentimentClassifier};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default control values
pub mod defaults {
    /// Column that must be present in the upload
    pub const TEXT_COLUMN: &str = "Review";
    pub const MIN_FREQUENCY: usize = 2;
    pub const MAX_WORDS: usize = 200;
    /// Rows kept in each n-gram table
    pub const NGRAM_LIMIT: usize = 50;
    /// Rows kept per sentiment bucket
    pub const TOP_WORDS_LIMIT: usize = 20;
    pub const EXPORT_FILE_NAME: &str = "results.csv";
}
