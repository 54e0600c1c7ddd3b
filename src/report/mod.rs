//! Presentation of an analysis run
//!
//! - `charts` - SVG bar charts
//! - `wordcloud` - word cloud layout and SVG rendering
//! - `console` - plain-text tables per tab
//!
//! `ReportWriter` writes every artifact of one run into a directory.

pub mod charts;
pub mod console;
pub mod wordcloud;

pub use console::{render, Tab};
pub use wordcloud::{PlacedWord, WordCloud};

use crate::config::ReportConfig;
use crate::error::{Error, Result};
use crate::models::SentimentLabel;
use crate::pipeline::AnalysisReport;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Writes the report files of one run
#[derive(Debug, Clone)]
pub struct ReportWriter {
    config: ReportConfig,
}

impl ReportWriter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    fn chart_size(&self) -> (u32, u32) {
        (self.config.chart_width, self.config.chart_height)
    }

    /// Path of the downloadable table
    pub fn export_path(&self) -> PathBuf {
        self.config.output_dir.join(&self.config.export_file_name)
    }

    /// Write only the classified table
    pub fn write_export(&self, report: &AnalysisReport) -> Result<PathBuf> {
        fs::create_dir_all(&self.config.output_dir)?;
        let path = self.export_path();
        fs::write(&path, report.export_csv()?)?;
        info!(path = %path.display(), "Wrote export");
        Ok(path)
    }

    /// Render every artifact of a run in memory, keyed by file name
    pub fn render(
        &self,
        report: &AnalysisReport,
        max_words: usize,
    ) -> Result<Vec<(String, Vec<u8>)>> {
        let mut frequency = csv::Writer::from_writer(Vec::new());
        for entry in &report.frequency {
            frequency.serialize(entry)?;
        }
        let frequency = frequency
            .into_inner()
            .map_err(|err| Error::Io(err.into_error()))?;

        let cloud = WordCloud::new(self.config.cloud_width, self.config.cloud_height, max_words);
        let size = self.chart_size();
        let documents = vec![
            (self.config.export_file_name.clone(), report.export_csv()?),
            ("word_frequency.csv".to_string(), frequency),
            ("wordcloud.svg".to_string(), cloud.render_svg(&report.word_cloud)?.into_bytes()),
            (
                "sentiment.svg".to_string(),
                charts::sentiment_chart(&report.sentiment_counts, size)?.into_bytes(),
            ),
            (
                "bigrams.svg".to_string(),
                charts::ngram_chart(&report.bigrams, 2, size)?.into_bytes(),
            ),
            (
                "trigrams.svg".to_string(),
                charts::ngram_chart(&report.trigrams, 3, size)?.into_bytes(),
            ),
            (
                "top_positive.svg".to_string(),
                charts::top_words_chart(&report.top_positive, SentimentLabel::Positive, size)?
                    .into_bytes(),
            ),
            (
                "top_negative.svg".to_string(),
                charts::top_words_chart(&report.top_negative, SentimentLabel::Negative, size)?
                    .into_bytes(),
            ),
            (
                "summary.json".to_string(),
                serde_json::to_vec_pretty(&report.summary())?,
            ),
        ];
        Ok(documents)
    }

    /// Write all artifacts; returns the paths written. Nothing is written
    /// unless every document rendered.
    pub fn write(&self, report: &AnalysisReport, max_words: usize) -> Result<Vec<PathBuf>> {
        let documents = self.render(report, max_words)?;

        let dir = &self.config.output_dir;
        fs::create_dir_all(dir)?;

        let mut written = Vec::with_capacity(documents.len());
        for (name, content) in documents {
            let path = dir.join(name);
            fs::write(&path, content)?;
            written.push(path);
        }

        info!(files = written.len(), dir = %dir.display(), "Report written");
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;
    use crate::data::DataLoader;
    use crate::pipeline::Pipeline;
    use tempfile::tempdir;

    #[test]
    fn test_write_all_artifacts() {
        let report = Pipeline::new(AnalysisConfig::default())
            .unwrap()
            .run_csv("Id,Review\n1,I love this pen!\n2,I hate this pen.\n".as_bytes())
            .unwrap();

        let dir = tempdir().unwrap();
        let writer = ReportWriter::new(ReportConfig {
            output_dir: dir.path().join("out"),
            ..ReportConfig::default()
        });
        let written = writer.write(&report, 200).unwrap();

        assert_eq!(written.len(), 9);
        assert!(written.iter().all(|p| p.exists()));

        let exported = DataLoader::load_csv(writer.export_path()).unwrap();
        assert_eq!(exported.columns(), &["Id", "Review", "sentiment", "sentiment_type"]);
        assert_eq!(exported.len(), 2);
    }

    #[test]
    fn test_failed_render_writes_nothing() {
        let report = Pipeline::new(AnalysisConfig::default())
            .unwrap()
            .run_csv("Review\nI love this pen!\n".as_bytes())
            .unwrap();

        let dir = tempdir().unwrap();
        let out = dir.path().join("out");
        let writer = ReportWriter::new(ReportConfig {
            output_dir: out.clone(),
            chart_width: 0,
            ..ReportConfig::default()
        });

        assert!(matches!(writer.write(&report, 200), Err(Error::Render(_))));
        assert!(!out.exists());
    }
}
