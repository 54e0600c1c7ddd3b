//! Frequency counting
//!
//! Ties keep first-seen order, so `most_common` is deterministic for a given
//! token stream.

use crate::models::{Classification, SentimentCounts, WordCount};
use std::collections::HashMap;
use std::hash::Hash;

/// Insertion-ordered counter
#[derive(Debug, Clone)]
pub struct FrequencyCounter<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K: Eq + Hash + Clone> FrequencyCounter<K> {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub fn add(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&idx) => self.entries[idx].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    pub fn get<Q>(&self, key: &Q) -> usize
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index
            .get(key)
            .map(|&idx| self.entries[idx].1)
            .unwrap_or(0)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Entries by count descending; `None` returns all of them
    pub fn most_common(&self, limit: Option<usize>) -> Vec<(K, usize)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        if let Some(limit) = limit {
            sorted.truncate(limit);
        }
        sorted
    }
}

impl<K: Eq + Hash + Clone> Default for FrequencyCounter<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for FrequencyCounter<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counter = Self::new();
        for key in iter {
            counter.add(key);
        }
        counter
    }
}

fn to_word_counts(entries: Vec<(String, usize)>) -> Vec<WordCount> {
    entries
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect()
}

/// Count of every token with at least `min_frequency` occurrences
pub fn frequency_table(tokens: &[String], min_frequency: usize) -> Vec<WordCount> {
    let counter: FrequencyCounter<String> = tokens.iter().cloned().collect();
    let entries = counter
        .most_common(None)
        .into_iter()
        .filter(|(_, count)| *count >= min_frequency)
        .collect();
    to_word_counts(entries)
}

/// Most common tokens feeding the word cloud, capped at `max_words`
pub fn word_cloud_input(tokens: &[String], max_words: usize) -> Vec<WordCount> {
    let counter: FrequencyCounter<String> = tokens.iter().cloned().collect();
    to_word_counts(counter.most_common(Some(max_words)))
}

/// Rows per sentiment bucket
pub fn sentiment_counts(classifications: &[Classification]) -> SentimentCounts {
    let mut counts = SentimentCounts::default();
    for c in classifications {
        counts.add(c.label);
    }
    counts
}
