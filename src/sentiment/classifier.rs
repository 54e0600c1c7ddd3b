//! Row-level sentiment classification

use crate::data::Table;
use crate::error::Result;
use crate::models::{Classification, SentimentLabel};
use crate::sentiment::scorer::{LexiconScorer, PolarityScorer};
use tracing::debug;

/// Column holding the numeric polarity
pub const SENTIMENT_COLUMN: &str = "sentiment";
/// Column holding the Positive/Negative/Neutral label
pub const SENTIMENT_TYPE_COLUMN: &str = "sentiment_type";

/// Scores rows and appends `sentiment` / `sentiment_type`
pub struct SentimentClassifier {
    scorer: Box<dyn PolarityScorer>,
}

impl SentimentClassifier {
    pub fn new(scorer: Box<dyn PolarityScorer>) -> Self {
        Self { scorer }
    }

    /// Polarity of a text; empty text is 0.0 without consulting the scorer
    pub fn score(&self, text: &str) -> f64 {
        if text.is_empty() {
            return 0.0;
        }
        self.scorer.polarity(text)
    }

    pub fn label(score: f64) -> SentimentLabel {
        SentimentLabel::from_score(score)
    }

    /// Classify every row of `column` and write the two result columns
    pub fn classify(&self, table: &mut Table, column: &str) -> Result<Vec<Classification>> {
        let classifications: Vec<Classification> = table
            .column_values(column)?
            .into_iter()
            .map(|text| Classification::from_score(self.score(text.unwrap_or(""))))
            .collect();

        table.set_column(
            SENTIMENT_COLUMN,
            classifications.iter().map(|c| format_score(c.score)).collect(),
        )?;
        table.set_column(
            SENTIMENT_TYPE_COLUMN,
            classifications
                .iter()
                .map(|c| c.label.as_str().to_string())
                .collect(),
        )?;

        debug!(rows = classifications.len(), "Classified rows");
        Ok(classifications)
    }
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new(Box::new(LexiconScorer::new()))
    }
}

/// Float text with at least one decimal place (`0.0`, `0.5`, `-0.35`)
pub fn format_score(score: f64) -> String {
    if score.is_finite() && score.fract() == 0.0 {
        format!("{:.1}", score)
    } else {
        score.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataLoader;
    use std::cell::Cell;

    struct CountingScorer<'a> {
        calls: &'a Cell<usize>,
    }

    impl PolarityScorer for CountingScorer<'_> {
        fn polarity(&self, _text: &str) -> f64 {
            self.calls.set(self.calls.get() + 1);
            0.25
        }
    }

    #[test]
    fn test_empty_text_skips_scorer() {
        let calls = Box::leak(Box::new(Cell::new(0)));
        let classifier = SentimentClassifier::new(Box::new(CountingScorer { calls }));

        assert_eq!(classifier.score(""), 0.0);
        assert_eq!(calls.get(), 0);
        assert_eq!(classifier.score("anything"), 0.25);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_classify_appends_columns() {
        let mut table =
            DataLoader::read_bytes(b"Review\ni love this\ni hate this\nit is a pen\n\n").unwrap();
        let classifier = SentimentClassifier::default();
        let result = classifier.classify(&mut table, "Review").unwrap();

        let labels: Vec<_> = result.iter().map(|c| c.label).collect();
        assert_eq!(
            labels,
            vec![
                SentimentLabel::Positive,
                SentimentLabel::Negative,
                SentimentLabel::Neutral
            ]
        );
        assert_eq!(table.columns(), &["Review", "sentiment", "sentiment_type"]);
        assert_eq!(
            table.column_values("sentiment_type").unwrap(),
            vec![Some("Positive"), Some("Negative"), Some("Neutral")]
        );
        assert_eq!(table.column_values("sentiment").unwrap()[2], Some("0.0"));
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(0.0), "0.0");
        assert_eq!(format_score(1.0), "1.0");
        assert_eq!(format_score(-0.35), "-0.35");
        assert_eq!(format_score(0.5).parse::<f64>().unwrap(), 0.5);
    }
}
