//! End-to-end runs of the analysis pipeline

use rust_review_analytics::models::SentimentLabel;
use rust_review_analytics::sentiment::{SENTIMENT_COLUMN, SENTIMENT_TYPE_COLUMN};
use rust_review_analytics::session::{Command, Session};
use rust_review_analytics::{
    AnalysisConfig, AppConfig, DataLoader, Error, Pipeline, PolarityScorer, ReportConfig,
    ReportWriter, Tab,
};
use tempfile::tempdir;

const SCENARIO: &str = "Review\nI love this!\nI hate this.\nIt is a pen.\n";

fn labels(report: &rust_review_analytics::AnalysisReport) -> Vec<SentimentLabel> {
    report.classifications.iter().map(|c| c.label).collect()
}

#[test]
fn test_scenario_tokens_and_labels() {
    let pipeline = Pipeline::new(AnalysisConfig::default().with_min_frequency(1)).unwrap();
    let report = pipeline.run_csv(SCENARIO.as_bytes()).unwrap();

    assert_eq!(report.tokens, vec!["love", "hate", "pen"]);
    assert_eq!(
        labels(&report),
        vec![
            SentimentLabel::Positive,
            SentimentLabel::Negative,
            SentimentLabel::Neutral
        ]
    );
    assert_eq!(report.sentiment_counts.positive, 1);
    assert_eq!(report.sentiment_counts.negative, 1);
    assert_eq!(report.sentiment_counts.neutral, 1);

    let cleaned = report.table.column_values("Review").unwrap();
    assert_eq!(cleaned[0], Some("i love this"));
}

#[test]
fn test_exclusion_does_not_reach_top_words() {
    let pipeline = Pipeline::new(
        AnalysisConfig::default()
            .with_exclusions("love")
            .with_min_frequency(1),
    )
    .unwrap();
    let report = pipeline.run_csv(SCENARIO.as_bytes()).unwrap();

    assert!(!report.tokens.iter().any(|t| t == "love"));
    assert!(!report.frequency.iter().any(|w| w.word == "love"));
    assert!(report.top_positive.iter().any(|w| w.word == "love"));
}

#[test]
fn test_min_frequency_filters_table() {
    let input = "Review\npen pen ink\npen ink paper\n";
    let report = Pipeline::new(AnalysisConfig::default().with_min_frequency(2))
        .unwrap()
        .run_csv(input.as_bytes())
        .unwrap();

    let words: Vec<_> = report.frequency.iter().map(|w| w.word.as_str()).collect();
    assert_eq!(words, vec!["pen", "ink"]);
    assert_eq!(report.frequency[0].count, 3);
}

#[test]
fn test_export_round_trip() {
    let pipeline = Pipeline::new(AnalysisConfig::default()).unwrap();
    let report = pipeline
        .run_csv("Id,Review\n1,I love this!\n2,\n3,I hate this.\n".as_bytes())
        .unwrap();

    let dir = tempdir().unwrap();
    let writer = ReportWriter::new(ReportConfig {
        output_dir: dir.path().to_path_buf(),
        ..ReportConfig::default()
    });
    let path = writer.write_export(&report).unwrap();
    assert!(path.ends_with("results.csv"));

    let exported = DataLoader::load_csv(&path).unwrap();
    assert_eq!(exported.len(), report.table.len());
    assert_eq!(
        exported.columns(),
        &["Id", "Review", SENTIMENT_COLUMN, SENTIMENT_TYPE_COLUMN]
    );
    assert_eq!(
        exported.column_values(SENTIMENT_TYPE_COLUMN).unwrap(),
        report.table.column_values(SENTIMENT_TYPE_COLUMN).unwrap()
    );
    assert_eq!(
        exported.column_values(SENTIMENT_COLUMN).unwrap(),
        report.table.column_values(SENTIMENT_COLUMN).unwrap()
    );
    assert_eq!(
        exported.column_values(SENTIMENT_TYPE_COLUMN).unwrap()[1],
        Some("Neutral")
    );
}

#[test]
fn test_missing_column_writes_nothing() {
    let dir = tempdir().unwrap();
    let config = AppConfig {
        report: ReportConfig {
            output_dir: dir.path().to_path_buf(),
            ..ReportConfig::default()
        },
        ..AppConfig::default()
    };
    let raw = b"Text\nI love this!\n".to_vec();
    let mut session = Session::new(raw, config.clone(), Tab::All, 20);

    let err = session.execute(Command::Export(None)).unwrap_err();
    assert!(matches!(err, Error::Schema { .. }));
    assert!(err.is_user_facing());
    assert_eq!(
        err.to_string(),
        "The uploaded CSV file does not contain a 'Review' column."
    );
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);

    let pipeline = Pipeline::new(config.analysis).unwrap();
    let writer = ReportWriter::new(config.report);
    let result = pipeline
        .run_csv("Text\nI love this!\n".as_bytes())
        .and_then(|report| writer.write(&report, 200));
    assert!(matches!(result, Err(Error::Schema { .. })));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_na_markers_contribute_no_tokens() {
    let report = Pipeline::new(AnalysisConfig::default().with_min_frequency(1))
        .unwrap()
        .run_csv("Id,Review\nNA,N/A\n2,None\n3,null\n4,great pen\n".as_bytes())
        .unwrap();

    assert_eq!(report.tokens, vec!["great", "pen"]);
    assert!(report.bigrams.iter().all(|g| !g.ngram.contains(&"none".to_string())));
    assert_eq!(report.table.column_values("Id").unwrap()[0], None);
    assert_eq!(
        labels(&report)[..3],
        [SentimentLabel::Neutral, SentimentLabel::Neutral, SentimentLabel::Neutral]
    );
}

#[test]
fn test_ngram_tables_are_capped_and_sorted() {
    let mut input = String::from("Review\n");
    for i in 0..80 {
        input.push_str(&format!("alpha{} beta{} gamma\n", i, i));
    }
    input.push_str("gamma alpha0 beta0\n");

    let report = Pipeline::new(AnalysisConfig::default())
        .unwrap()
        .run_csv(input.as_bytes())
        .unwrap();

    for grams in [&report.bigrams, &report.trigrams] {
        assert_eq!(grams.len(), 50);
        assert!(grams.windows(2).all(|w| w[0].count >= w[1].count));
    }
    assert_eq!(report.bigrams[0].ngram, vec!["alpha0", "beta0"]);
    assert_eq!(report.bigrams[0].count, 2);
}

#[test]
fn test_top_words_are_capped() {
    let mut input = String::from("Review\n");
    for i in 0..30 {
        input.push_str(&format!("I love item{}\n", i));
    }

    let report = Pipeline::new(AnalysisConfig::default())
        .unwrap()
        .run_csv(input.as_bytes())
        .unwrap();

    assert_eq!(report.top_positive.len(), 20);
    assert_eq!(report.top_positive[0].word, "love");
    assert_eq!(report.top_positive[0].count, 30);
    assert!(report.top_negative.is_empty());
}

struct NanScorer;

impl PolarityScorer for NanScorer {
    fn polarity(&self, _text: &str) -> f64 {
        f64::NAN
    }
}

#[test]
fn test_undefined_polarity_is_neutral() {
    let pipeline =
        Pipeline::with_scorer(AnalysisConfig::default(), Some(Box::new(NanScorer))).unwrap();
    let report = pipeline.run_csv(SCENARIO.as_bytes()).unwrap();

    assert!(labels(&report)
        .iter()
        .all(|label| *label == SentimentLabel::Neutral));
}

#[test]
fn test_reruns_start_from_raw_input() {
    let raw = SCENARIO.as_bytes();
    let first = Pipeline::new(AnalysisConfig::default().with_min_frequency(1))
        .unwrap()
        .run_csv(raw)
        .unwrap();
    let second = Pipeline::new(
        AnalysisConfig::default()
            .with_exclusions("pen")
            .with_min_frequency(1),
    )
    .unwrap()
    .run_csv(raw)
    .unwrap();

    assert_eq!(first.table.columns(), second.table.columns());
    assert_eq!(second.tokens, vec!["love", "hate"]);
}
