//! Text cleaning and token filtering
//!
//! Cleaning is lowercase plus removal of a fixed
//! punctuation set. No accent folding, no contraction expansion.

use super::stopwords::StopWords;
use crate::data::Table;
use crate::error::Result;
use std::collections::HashSet;
use tracing::debug;

/// Characters removed by [`clean_text`]
pub const PUNCTUATION: [char; 5] = ['!', '.', ':', ',', '?'];

/// Lowercase and strip [`PUNCTUATION`]. Missing values clean to `""`.
pub fn clean_text(text: Option<&str>) -> String {
    match text {
        Some(text) => text
            .to_lowercase()
            .chars()
            .filter(|c| !PUNCTUATION.contains(c))
            .collect(),
        None => String::new(),
    }
}

/// User supplied words to drop from the token stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionList {
    words: HashSet<String>,
}

impl ExclusionList {
    /// Comma separated list; entries are trimmed and empty entries dropped
    pub fn parse(input: &str) -> Self {
        Self {
            words: input
                .split(',')
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Comma separated list split verbatim: `"the, and"` yields `"the"` and
    /// `" and"`, and the second one never matches a whitespace-split token.
    pub fn parse_untrimmed(input: &str) -> Self {
        if input.is_empty() {
            return Self::default();
        }
        Self {
            words: input.split(',').map(str::to_string).collect(),
        }
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
}

/// Cleans a text column and produces the filtered token stream
#[derive(Debug, Clone)]
pub struct Normalizer {
    stop_words: StopWords,
    exclusions: ExclusionList,
}

impl Normalizer {
    pub fn new(stop_words: StopWords, exclusions: ExclusionList) -> Self {
        Self {
            stop_words,
            exclusions,
        }
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Whether a token survives both filters
    pub fn keep(&self, token: &str) -> bool {
        !self.stop_words.contains(token) && !self.exclusions.contains(token)
    }

    /// Clean `column` in place, then split all rows into one token stream in
    /// row order, dropping stop words and excluded words.
    pub fn tokenize_and_filter(&self, table: &mut Table, column: &str) -> Result<Vec<String>> {
        table.map_column(column, clean_text)?;

        let values = table.column_values(column)?;
        let mut total = 0;
        let tokens: Vec<String> = values
            .iter()
            .flat_map(|value| value.unwrap_or("").split_whitespace())
            .inspect(|_| total += 1)
            .filter(|token| self.keep(token))
            .map(str::to_string)
            .collect();

        debug!(total, kept = tokens.len(), "Filtered token stream");
        Ok(tokens)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(StopWords::english(), ExclusionList::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataLoader;

    fn reviews() -> Table {
        DataLoader::read_bytes(b"Review\nI love this!\nI hate this.\nIt is a pen.\n").unwrap()
    }

    #[test]
    fn test_clean_missing_is_empty() {
        assert_eq!(clean_text(None), "");
    }

    #[test]
    fn test_clean_strips_punctuation_and_lowercases() {
        let cleaned = clean_text(Some("Wow!! Really? Yes: A, B. C; (d)"));
        assert_eq!(cleaned, "wow really yes a b c; (d)");
        assert!(!cleaned.chars().any(|c| PUNCTUATION.contains(&c)));
        assert_eq!(cleaned, cleaned.to_lowercase());
    }

    #[test]
    fn test_tokenize_scenario() {
        let mut table = reviews();
        let tokens = Normalizer::default()
            .tokenize_and_filter(&mut table, "Review")
            .unwrap();

        assert_eq!(tokens, vec!["love", "hate", "pen"]);
        assert_eq!(
            table.column_values("Review").unwrap(),
            vec![Some("i love this"), Some("i hate this"), Some("it is a pen")]
        );
    }

    #[test]
    fn test_exclusions_are_applied() {
        let mut table = reviews();
        let normalizer = Normalizer::new(StopWords::english(), ExclusionList::parse("love"));
        let tokens = normalizer.tokenize_and_filter(&mut table, "Review").unwrap();
        assert_eq!(tokens, vec!["hate", "pen"]);
    }

    #[test]
    fn test_exclusion_parsing_trims() {
        let list = ExclusionList::parse("the, and ,,pen");
        assert!(list.contains("the"));
        assert!(list.contains("and"));
        assert!(list.contains("pen"));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_untrimmed_keeps_leading_space() {
        let list = ExclusionList::parse_untrimmed("the, and");
        assert!(list.contains("the"));
        assert!(list.contains(" and"));
        assert!(!list.contains("and"));
        assert!(ExclusionList::parse_untrimmed("").is_empty());
    }

    #[test]
    fn test_missing_cells_contribute_nothing() {
        let mut table = DataLoader::read_bytes(b"Id,Review\n1,\n2,great pen\n").unwrap();
        let tokens = Normalizer::default()
            .tokenize_and_filter(&mut table, "Review")
            .unwrap();
        assert_eq!(tokens, vec!["great", "pen"]);
        assert_eq!(table.column_values("Review").unwrap()[0], Some(""));
    }
}
