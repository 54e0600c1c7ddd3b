//! Sentiment analysis
//!
//! Includes:
//! - Lexicon-based polarity scoring
//! - Row classification into Positive / Negative / Neutral

mod classifier;
mod lexicon;
mod scorer;

pub use classifier::{format_score, SentimentClassifier, SENTIMENT_COLUMN, SENTIMENT_TYPE_COLUMN};
pub use lexicon::{ReviewLexicon, SentimentLexicon};
pub use scorer::{LexiconScorer, PolarityScorer};
