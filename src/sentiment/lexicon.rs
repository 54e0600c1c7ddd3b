//! Sentiment lexicons
//!
//! Contains:
//! - The `SentimentLexicon` trait used by the scorer
//! - A general English lexicon tuned for product and service reviews

use std::collections::HashMap;

/// Word-level polarity source
pub trait SentimentLexicon {
    /// Polarity of a word (-1.0 to 1.0)
    fn get_score(&self, word: &str) -> Option<f64>;

    /// Multiplier applied to the next sentiment word ("very", "slightly")
    fn get_modifier(&self, word: &str) -> Option<f64>;

    /// Whether the word negates what follows
    fn is_negation(&self, word: &str) -> bool;
}

/// General English review lexicon
#[derive(Debug, Clone)]
pub struct ReviewLexicon {
    scores: HashMap<String, f64>,
    modifiers: HashMap<String, f64>,
    negations: Vec<String>,
}

impl ReviewLexicon {
    pub fn new() -> Self {
        let positive = [
            ("love", 0.5),
            ("loved", 0.7),
            ("loves", 0.5),
            ("like", 0.2),
            ("liked", 0.3),
            ("good", 0.7),
            ("great", 0.8),
            ("best", 1.0),
            ("better", 0.5),
            ("excellent", 1.0),
            ("amazing", 0.6),
            ("awesome", 1.0),
            ("wonderful", 1.0),
            ("fantastic", 0.4),
            ("perfect", 1.0),
            ("perfectly", 1.0),
            ("nice", 0.6),
            ("happy", 0.8),
            ("glad", 0.5),
            ("pleased", 0.5),
            ("beautiful", 0.85),
            ("lovely", 0.5),
            ("pretty", 0.25),
            ("fine", 0.42),
            ("easy", 0.43),
            ("fast", 0.2),
            ("quick", 0.33),
            ("comfortable", 0.4),
            ("useful", 0.3),
            ("helpful", 0.3),
            ("friendly", 0.38),
            ("favorite", 0.5),
            ("recommend", 0.4),
            ("recommended", 0.4),
            ("worth", 0.3),
            ("reliable", 0.35),
            ("sturdy", 0.3),
            ("solid", 0.2),
            ("fresh", 0.3),
            ("delicious", 1.0),
            ("tasty", 0.6),
            ("clean", 0.37),
            ("fun", 0.3),
            ("enjoy", 0.4),
            ("enjoyed", 0.4),
            ("satisfied", 0.5),
            ("impressive", 1.0),
            ("superb", 1.0),
            ("outstanding", 0.5),
            ("brilliant", 0.9),
            ("cheap", 0.4),
            ("affordable", 0.3),
            ("smooth", 0.4),
            ("positive", 0.23),
        ];

        let negative = [
            ("hate", -0.8),
            ("hated", -0.9),
            ("hates", -0.8),
            ("bad", -0.7),
            ("worse", -0.4),
            ("worst", -1.0),
            ("terrible", -1.0),
            ("horrible", -1.0),
            ("awful", -1.0),
            ("poor", -0.4),
            ("poorly", -0.4),
            ("sad", -0.5),
            ("angry", -0.5),
            ("ugly", -0.7),
            ("boring", -1.0),
            ("disappointing", -0.6),
            ("disappointed", -0.75),
            ("broken", -0.4),
            ("broke", -0.4),
            ("useless", -0.5),
            ("expensive", -0.5),
            ("overpriced", -0.5),
            ("slow", -0.3),
            ("difficult", -0.5),
            ("hard", -0.29),
            ("cheaply", -0.4),
            ("dirty", -0.6),
            ("rude", -0.3),
            ("annoying", -0.8),
            ("stupid", -0.8),
            ("wrong", -0.5),
            ("fake", -0.5),
            ("defective", -0.5),
            ("flimsy", -0.4),
            ("waste", -0.5),
            ("refund", -0.2),
            ("return", -0.1),
            ("problem", -0.3),
            ("issue", -0.2),
            ("fail", -0.5),
            ("failed", -0.5),
            ("negative", -0.3),
            ("mediocre", -0.3),
            ("unhappy", -0.6),
            ("uncomfortable", -0.5),
            ("nasty", -1.0),
            ("gross", -0.6),
            ("scam", -0.9),
        ];

        let scores = positive
            .iter()
            .chain(negative.iter())
            .map(|(word, score)| (word.to_string(), *score))
            .collect();

        let modifiers = [
            ("very", 1.3),
            ("really", 1.3),
            ("so", 1.3),
            ("extremely", 1.5),
            ("incredibly", 1.5),
            ("super", 1.4),
            ("absolutely", 1.5),
            ("totally", 1.3),
            ("completely", 1.4),
            ("highly", 1.3),
            ("quite", 1.1),
            ("somewhat", 0.8),
            ("slightly", 0.7),
            ("barely", 0.6),
            ("little", 0.7),
        ]
        .iter()
        .map(|(word, m)| (word.to_string(), *m))
        .collect();

        let negations = [
            "not", "no", "never", "neither", "nobody", "nothing", "nowhere", "none",
            "cannot", "dont", "don't", "doesnt", "doesn't", "didnt", "didn't", "cant",
            "can't", "couldnt", "couldn't", "wont", "won't", "wouldnt", "wouldn't",
            "isnt", "isn't", "arent", "aren't", "wasnt", "wasn't", "werent", "weren't",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        Self {
            scores,
            modifiers,
            negations,
        }
    }

    /// Add or replace a word score
    pub fn add_word(&mut self, word: &str, score: f64) {
        self.scores
            .insert(word.to_lowercase(), score.clamp(-1.0, 1.0));
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl Default for ReviewLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentLexicon for ReviewLexicon {
    fn get_score(&self, word: &str) -> Option<f64> {
        self.scores.get(&word.to_lowercase()).copied()
    }

    fn get_modifier(&self, word: &str) -> Option<f64> {
        self.modifiers.get(&word.to_lowercase()).copied()
    }

    fn is_negation(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.negations.iter().any(|n| *n == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores() {
        let lexicon = ReviewLexicon::new();

        assert!(lexicon.get_score("love").unwrap() > 0.0);
        assert!(lexicon.get_score("LOVE").unwrap() > 0.0);
        assert!(lexicon.get_score("hate").unwrap() < 0.0);
        assert!(lexicon.get_score("pen").is_none());
    }

    #[test]
    fn test_negation_and_modifier() {
        let lexicon = ReviewLexicon::new();

        assert!(lexicon.is_negation("don't"));
        assert!(!lexicon.is_negation("love"));
        assert!(lexicon.get_modifier("very").unwrap() > 1.0);
        assert!(lexicon.get_modifier("slightly").unwrap() < 1.0);
    }

    #[test]
    fn test_add_word_clamps() {
        let mut lexicon = ReviewLexicon::new();
        lexicon.add_word("Stellar", 3.0);
        assert_eq!(lexicon.get_score("stellar"), Some(1.0));
    }
}
