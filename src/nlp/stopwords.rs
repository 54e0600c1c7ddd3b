//! Stop word corpus
//!
//! The default set is the NLTK English list. Matching is exact: tokens are
//! expected to be lowercased already.

use std::collections::HashSet;

/// NLTK English stop words
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
    "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "she's", "her", "hers", "herself", "it", "it's",
    "its", "itself", "they", "them", "their", "theirs", "themselves", "what",
    "which", "who", "whom", "this", "that", "that'll", "these", "those", "am", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about",
    "against", "between", "into", "through", "during", "before", "after", "above",
    "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some",
    "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very",
    "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn",
    "couldn't", "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn",
    "hasn't", "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't",
    "mustn", "mustn't", "needn", "needn't", "shan", "shan't", "shouldn",
    "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Set of words excluded from frequency analysis
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Custom stop word set
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// NLTK English stop words
    pub fn english() -> Self {
        Self::new(ENGLISH.iter().copied())
    }

    /// Add more words to the set
    pub fn with_extra<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Keep tokens that are not stop words
    pub fn filter<'a, I>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens
            .into_iter()
            .filter(|t| !self.contains(t))
            .map(str::to_string)
            .collect()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_list() {
        let stop = StopWords::english();
        for word in ["i", "this", "it", "is", "a", "the", "won't"] {
            assert!(stop.contains(word), "{} should be a stop word", word);
        }
        for word in ["love", "hate", "pen"] {
            assert!(!stop.contains(word));
        }
    }

    #[test]
    fn test_matching_is_exact() {
        let stop = StopWords::english();
        assert!(!stop.contains("The"));
        assert!(!stop.contains(" and"));
    }

    #[test]
    fn test_filter_and_extra() {
        let stop = StopWords::new(["foo"]).with_extra(["bar"]);
        let kept = stop.filter("foo test bar data".split_whitespace());
        assert_eq!(kept, vec!["test", "data"]);
        assert_eq!(stop.len(), 2);
    }
}
