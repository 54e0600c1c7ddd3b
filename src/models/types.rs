//! Data types shared by the pipeline stages

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentiment bucket of a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    /// Polarity above zero
    Positive,
    /// Polarity below zero
    Negative,
    /// Polarity exactly zero
    Neutral,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];

    /// Strict sign test. NaN lands in `Neutral`.
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            SentimentLabel::Positive
        } else if score < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Positive" => Ok(SentimentLabel::Positive),
            "Negative" => Ok(SentimentLabel::Negative),
            "Neutral" => Ok(SentimentLabel::Neutral),
            other => Err(format!("unknown sentiment label: {}", other)),
        }
    }
}

/// Polarity and label of one row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Score in [-1.0, 1.0]
    pub score: f64,
    pub label: SentimentLabel,
}

impl Classification {
    pub fn from_score(score: f64) -> Self {
        Self {
            score,
            label: SentimentLabel::from_score(score),
        }
    }
}

/// Word with its polarity contribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredWord {
    pub word: String,
    pub score: f64,
}

/// Result of scoring one text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolarityResult {
    /// Text that was scored
    pub text: String,
    /// Score from -1.0 to 1.0
    pub score: f64,
    pub label: SentimentLabel,
    /// Lexicon words that contributed to the score
    pub key_words: Vec<ScoredWord>,
}

/// Row of a (word, count) table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Row of an n-gram frequency table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NGramCount {
    pub ngram: Vec<String>,
    pub count: usize,
}

impl NGramCount {
    /// Words of the n-gram separated by single spaces
    pub fn joined(&self) -> String {
        self.ngram.join(" ")
    }
}

/// Number of rows per sentiment bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentCounts {
    pub fn add(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    pub fn get(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// Buckets with at least one row, largest first
    pub fn value_counts(&self) -> Vec<(SentimentLabel, usize)> {
        let mut counts: Vec<_> = SentimentLabel::ALL
            .iter()
            .map(|label| (*label, self.get(*label)))
            .filter(|(_, count)| *count > 0)
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}

impl fmt::Display for SentimentCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Analyzed: {} reviews ({} positive, {} negative, {} neutral)",
            self.total(),
            self.positive,
            self.negative,
            self.neutral
        )
    }
}
