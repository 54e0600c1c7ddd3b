//! Polarity scoring
//!
//! `PolarityScorer` is the seam the classifier calls; `LexiconScorer` is the
//! bundled rule-based implementation.

use crate::models::{PolarityResult, ScoredWord, SentimentLabel};
use crate::sentiment::lexicon::{ReviewLexicon, SentimentLexicon};
use regex::Regex;
use std::sync::LazyLock;

static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]+(?:'[\p{L}]+)?").expect("valid word regex"));

/// Anything that maps a text to a polarity in [-1.0, 1.0]
pub trait PolarityScorer {
    fn polarity(&self, text: &str) -> f64;
}

/// Lexicon-based scorer with intensifiers and negation
#[derive(Debug, Clone)]
pub struct LexiconScorer<L = ReviewLexicon> {
    lexicon: L,
    /// Tokens after a negation that it still affects
    negation_window: usize,
    /// Factor applied to a negated word score
    negation_factor: f64,
}

impl LexiconScorer<ReviewLexicon> {
    pub fn new() -> Self {
        Self::with_lexicon(ReviewLexicon::new())
    }
}

impl Default for LexiconScorer<ReviewLexicon> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: SentimentLexicon> LexiconScorer<L> {
    pub fn with_lexicon(lexicon: L) -> Self {
        Self {
            lexicon,
            negation_window: 3,
            negation_factor: -0.5,
        }
    }

    pub fn with_negation_window(mut self, window: usize) -> Self {
        self.negation_window = window;
        self
    }

    /// Score a text and keep the words that contributed
    pub fn analyze(&self, text: &str) -> PolarityResult {
        let lowered = text.to_lowercase();

        let mut total_score = 0.0;
        let mut word_count = 0usize;
        let mut key_words = Vec::new();
        let mut current_modifier = 1.0;
        let mut negation_active = false;
        let mut words_since_negation = 0;

        for token in WORD_REGEX.find_iter(&lowered).map(|m| m.as_str()) {
            if self.lexicon.is_negation(token) {
                negation_active = true;
                words_since_negation = 0;
                continue;
            }

            if let Some(modifier) = self.lexicon.get_modifier(token) {
                current_modifier = modifier;
                continue;
            }

            if let Some(base_score) = self.lexicon.get_score(token) {
                let mut score = (base_score * current_modifier).clamp(-1.0, 1.0);
                if negation_active && words_since_negation < self.negation_window {
                    score *= self.negation_factor;
                }

                total_score += score;
                word_count += 1;
                key_words.push(ScoredWord {
                    word: token.to_string(),
                    score,
                });
                current_modifier = 1.0;
            }

            if negation_active {
                words_since_negation += 1;
                if words_since_negation >= self.negation_window {
                    negation_active = false;
                }
            }
        }

        let score = if word_count > 0 {
            (total_score / word_count as f64).clamp(-1.0, 1.0)
        } else {
            0.0
        };

        PolarityResult {
            text: text.to_string(),
            score,
            label: SentimentLabel::from_score(score),
            key_words,
        }
    }
}

impl<L: SentimentLexicon> PolarityScorer for LexiconScorer<L> {
    fn polarity(&self, text: &str) -> f64 {
        self.analyze(text).score
    }
}
