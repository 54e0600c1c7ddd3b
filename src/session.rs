//! Interactive session
//!
//! Holds the uploaded bytes and the current controls. Every command that
//! changes a control rebuilds the pipeline and re-runs it from the raw file.

use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::pipeline::{AnalysisReport, Pipeline};
use crate::report::{render, ReportWriter, Tab};
use clap::ValueEnum;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// One line of user input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Exclude(String),
    MinFrequency(usize),
    MaxWords(usize),
    Tab(Tab),
    Export(Option<PathBuf>),
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  exclude <w1,w2,...>   words to exclude (empty clears the list)
  min-freq <n>          minimum frequency for the word table
  max-words <n>         maximum words in the word cloud
  tab <name>            all | cloud | words | sentiment | ngrams | top-words
  export [path]         write the classified table (default results.csv)
  show                  re-render the current tab
  help                  this message
  quit                  leave";

fn parse_count(name: &str, value: &str) -> Result<usize> {
    let n: usize = value
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("{} expects a positive integer, got '{}'", name, value)))?;
    if n < 1 {
        return Err(Error::Config(format!("{} must be at least 1", name)));
    }
    Ok(n)
}

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        match name {
            "exclude" => Ok(Command::Exclude(arg.to_string())),
            "min-freq" => parse_count("min-freq", arg).map(Command::MinFrequency),
            "max-words" => parse_count("max-words", arg).map(Command::MaxWords),
            "tab" => Tab::from_str(arg, true)
                .map(Command::Tab)
                .map_err(|_| Error::Config(format!("unknown tab '{}'", arg))),
            "export" if arg.is_empty() => Ok(Command::Export(None)),
            "export" => Ok(Command::Export(Some(PathBuf::from(arg)))),
            "show" | "" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(Error::Config(format!("unknown command '{}'", other))),
        }
    }
}

/// State of an interactive run
pub struct Session {
    raw: Vec<u8>,
    config: AppConfig,
    tab: Tab,
    limit: usize,
}

impl Session {
    pub fn new(raw: Vec<u8>, config: AppConfig, tab: Tab, limit: usize) -> Self {
        Self {
            raw,
            config,
            tab,
            limit,
        }
    }

    /// Build a fresh pipeline and run it on a fresh copy of the table
    pub fn run(&self) -> Result<AnalysisReport> {
        let pipeline = Pipeline::new(self.config.analysis.clone())?;
        pipeline.run_csv(self.raw.as_slice())
    }

    fn render_current(&self) -> Result<String> {
        let report = self.run()?;
        Ok(render(&report, self.tab, self.limit))
    }

    /// Apply a command; `None` means the session is over
    pub fn execute(&mut self, command: Command) -> Result<Option<String>> {
        debug!(?command, "Session command");
        match command {
            Command::Exclude(words) => {
                self.config.analysis.exclude_words = words;
                self.render_current().map(Some)
            }
            Command::MinFrequency(n) => {
                self.config.analysis.min_frequency = n;
                self.render_current().map(Some)
            }
            Command::MaxWords(n) => {
                self.config.analysis.max_words = n;
                self.render_current().map(Some)
            }
            Command::Tab(tab) => {
                self.tab = tab;
                self.render_current().map(Some)
            }
            Command::Show => self.render_current().map(Some),
            Command::Export(path) => {
                let report = self.run()?;
                let path = match path {
                    Some(path) => {
                        fs::write(&path, report.export_csv()?)?;
                        path
                    }
                    None => ReportWriter::new(self.config.report.clone()).write_export(&report)?,
                };
                Ok(Some(format!("Exported {} rows to {}", report.table.len(), path.display())))
            }
            Command::Help => Ok(Some(HELP.to_string())),
            Command::Quit => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataLoader;

    const REVIEWS: &[u8] = b"Review\nI love this pen!\nI love this ink.\nI hate this pen.\n";

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            Command::parse("exclude love, pen").unwrap(),
            Command::Exclude("love, pen".to_string())
        );
        assert_eq!(Command::parse("min-freq 3").unwrap(), Command::MinFrequency(3));
        assert_eq!(Command::parse("tab top-words").unwrap(), Command::Tab(Tab::TopWords));
        assert_eq!(Command::parse("export").unwrap(), Command::Export(None));
        assert_eq!(Command::parse("quit").unwrap(), Command::Quit);
        assert!(Command::parse("max-words 0").is_err());
        assert!(Command::parse("max-words abc").is_err());
        assert!(Command::parse("dance").is_err());
    }

    #[test]
    fn test_rerun_after_change() {
        let mut session = Session::new(REVIEWS.to_vec(), AppConfig::default(), Tab::Words, 20);

        let before = session.execute(Command::Show).unwrap().unwrap();
        assert!(before.contains("love"));

        let after = session
            .execute(Command::Exclude("love".to_string()))
            .unwrap()
            .unwrap();
        assert!(!after.contains("love"));
        assert!(after.contains("pen"));
    }

    #[test]
    fn test_runs_are_independent() {
        let session = Session::new(REVIEWS.to_vec(), AppConfig::default(), Tab::All, 20);
        let first = session.run().unwrap();
        let second = session.run().unwrap();
        assert_eq!(first.table, second.table);
        assert_eq!(first.tokens, second.tokens);
    }

    #[test]
    fn test_export_to_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        let mut session = Session::new(REVIEWS.to_vec(), AppConfig::default(), Tab::All, 20);

        let message = session.execute(Command::Export(Some(path.clone()))).unwrap().unwrap();
        assert!(message.contains("3 rows"));
        assert_eq!(DataLoader::load_csv(&path).unwrap().len(), 3);
    }

    #[test]
    fn test_quit() {
        let mut session = Session::new(REVIEWS.to_vec(), AppConfig::default(), Tab::All, 20);
        assert!(session.execute(Command::Quit).unwrap().is_none());
    }
}
