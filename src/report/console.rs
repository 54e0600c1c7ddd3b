//! Terminal rendering of each view

use crate::models::{NGramCount, WordCount};
use crate::pipeline::AnalysisReport;
use crate::sentiment::SENTIMENT_TYPE_COLUMN;
use std::fmt::Write;

/// Views of the analysis, one per dashboard tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Tab {
    All,
    Cloud,
    Words,
    Sentiment,
    Ngrams,
    TopWords,
}

impl Tab {
    pub fn includes(&self, other: Tab) -> bool {
        *self == Tab::All || *self == other
    }
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{}", title);
    let _ = writeln!(out, "{}", "─".repeat(title.chars().count().max(20)));
}

fn word_rows(out: &mut String, words: &[WordCount], limit: usize) {
    if words.is_empty() {
        let _ = writeln!(out, "   (no words)");
        return;
    }
    for entry in words.iter().take(limit) {
        let _ = writeln!(out, "   {:20} {:>6}", entry.word, entry.count);
    }
    if words.len() > limit {
        let _ = writeln!(out, "   … {} more", words.len() - limit);
    }
}

fn ngram_rows(out: &mut String, title: &str, ngrams: &[NGramCount], limit: usize) {
    section(out, title);
    if ngrams.is_empty() {
        let _ = writeln!(out, "   (not enough tokens)");
        return;
    }
    for gram in ngrams.iter().take(limit) {
        let _ = writeln!(out, "   {:32} {:>6}", gram.joined(), gram.count);
    }
}

/// Render the selected tab(s) as plain text
pub fn render(report: &AnalysisReport, tab: Tab, limit: usize) -> String {
    let mut out = String::new();

    if tab.includes(Tab::Cloud) {
        section(&mut out, "☁️  Word Cloud (input words)");
        word_rows(&mut out, &report.word_cloud, limit);
    }

    if tab.includes(Tab::Words) {
        section(&mut out, "📊 Text Analytics");
        word_rows(&mut out, &report.frequency, limit);
    }

    if tab.includes(Tab::Sentiment) {
        section(&mut out, "💬 Sentiment Analysis");
        let _ = writeln!(out, "   {}", report.sentiment_counts);
        render_sentiment_table(&mut out, report, limit);
    }

    if tab.includes(Tab::Ngrams) {
        ngram_rows(&mut out, "🔗 Top Bigrams", &report.bigrams, limit);
        ngram_rows(&mut out, "🔗 Top Trigrams", &report.trigrams, limit);
    }

    if tab.includes(Tab::TopWords) {
        section(&mut out, "📈 Top Positive Words");
        word_rows(&mut out, &report.top_positive, limit);
        section(&mut out, "📉 Top Negative Words");
        word_rows(&mut out, &report.top_negative, limit);
    }

    out
}

fn render_sentiment_table(out: &mut String, report: &AnalysisReport, limit: usize) {
    let (Ok(texts), Ok(labels)) = (
        report.table.column_values(&report.text_column),
        report.table.column_values(SENTIMENT_TYPE_COLUMN),
    ) else {
        return;
    };

    let _ = writeln!(out, "\n   {:48} {:>9}  sentiment_type", report.text_column, "sentiment");
    for ((text, label), classification) in texts
        .iter()
        .zip(labels.iter())
        .zip(report.classifications.iter())
        .take(limit)
    {
        let _ = writeln!(
            out,
            "   {:48} {:>9.3}  {}",
            truncate(text.unwrap_or(""), 48),
            classification.score,
            label.unwrap_or("")
        );
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}
