//! Data models

mod types;

pub use types::{
    Classification, NGramCount, PolarityResult, ScoredWord, SentimentCounts, SentimentLabel,
    WordCount,
};
