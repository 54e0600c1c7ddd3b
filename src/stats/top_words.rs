//! Most frequent words per sentiment bucket
//!
//! Re-tokenizes the text column of matching rows. Only stop words are
//! removed here; the exclusion list does not apply.

use super::frequency::FrequencyCounter;
use crate::data::Table;
use crate::error::Result;
use crate::models::{SentimentLabel, WordCount};
use crate::nlp::StopWords;
use crate::sentiment::SENTIMENT_TYPE_COLUMN;

/// Top `limit` words of rows whose `sentiment_type` equals `label`
pub fn top_words(
    table: &Table,
    text_column: &str,
    label: SentimentLabel,
    stop_words: &StopWords,
    limit: usize,
) -> Result<Vec<WordCount>> {
    let texts = table.column_values(text_column)?;
    let labels = table.column_values(SENTIMENT_TYPE_COLUMN)?;

    let counter: FrequencyCounter<&str> = texts
        .iter()
        .zip(labels.iter())
        .filter(|(_, row_label)| **row_label == Some(label.as_str()))
        .filter_map(|(text, _)| *text)
        .flat_map(str::split_whitespace)
        .filter(|word| !stop_words.contains(word))
        .collect();

    Ok(counter
        .most_common(Some(limit))
        .into_iter()
        .map(|(word, count)| WordCount::new(word, count))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataLoader;
    use crate::error::Error;

    fn classified() -> Table {
        DataLoader::read_bytes(
            b"Review,sentiment,sentiment_type\n\
              i love this pen,0.5,Positive\n\
              love the ink,0.5,Positive\n\
              i hate this pen,-0.8,Negative\n\
              it is a pen,0.0,Neutral\n",
        )
        .unwrap()
    }

    #[test]
    fn test_only_matching_rows() {
        let table = classified();
        let stop = StopWords::english();

        let positive = top_words(&table, "Review", SentimentLabel::Positive, &stop, 20).unwrap();
        assert_eq!(
            positive,
            vec![
                WordCount::new("love", 2),
                WordCount::new("pen", 1),
                WordCount::new("ink", 1)
            ]
        );

        let negative = top_words(&table, "Review", SentimentLabel::Negative, &stop, 20).unwrap();
        assert_eq!(negative, vec![WordCount::new("hate", 1), WordCount::new("pen", 1)]);
    }

    #[test]
    fn test_limit() {
        let table = classified();
        let words =
            top_words(&table, "Review", SentimentLabel::Positive, &StopWords::english(), 1).unwrap();
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn test_requires_classification() {
        let table = DataLoader::read_bytes(b"Review\nlove\n").unwrap();
        let result = top_words(&table, "Review", SentimentLabel::Positive, &StopWords::english(), 20);
        assert!(matches!(result, Err(Error::Schema { .. })));
    }
}
