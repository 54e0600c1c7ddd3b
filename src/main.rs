//! CLI for text and sentiment analysis of review datasets
//!
//! Usage:
//! ```bash
//! cargo run -- --help
//! cargo run -- analyze --input reviews.csv
//! cargo run -- analyze --input reviews.csv --exclude "pen,ink" --tab ngrams
//! cargo run -- interactive --input reviews.csv
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rust_review_analytics::{
    report::{self, ReportWriter, Tab},
    session::{Command, Session, HELP},
    AppConfig, LexiconScorer, Pipeline,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "review_analytics")]
#[command(author = "ML for Trading")]
#[command(version)]
#[command(about = "Text and sentiment preliminary analysis of CSV reviews", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Logging level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

/// Sidebar controls shared by the analysis commands
#[derive(clap::Args)]
struct Controls {
    /// CSV file with a `Review` column
    #[arg(short, long)]
    input: PathBuf,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Words to exclude (comma separated)
    #[arg(short, long)]
    exclude: Option<String>,

    /// Minimum frequency for the word table
    #[arg(long)]
    min_freq: Option<usize>,

    /// Maximum words in the word cloud
    #[arg(long)]
    max_words: Option<usize>,

    /// Text column to analyze
    #[arg(long)]
    column: Option<String>,

    /// Rows printed per table
    #[arg(long, default_value = "20")]
    limit: usize,
}

impl Controls {
    fn app_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)
                .with_context(|| format!("Failed to load config: {:?}", path))?,
            None => AppConfig::default(),
        };

        if let Some(exclude) = &self.exclude {
            config.analysis.exclude_words = exclude.clone();
        }
        if let Some(min_freq) = self.min_freq {
            config.analysis.min_frequency = min_freq;
        }
        if let Some(max_words) = self.max_words {
            config.analysis.max_words = max_words;
        }
        if let Some(column) = &self.column {
            config.analysis.text_column = column.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis once and write the report
    Analyze {
        #[command(flatten)]
        controls: Controls,

        /// Output directory for charts, word cloud and results.csv
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// View to print
        #[arg(short, long, value_enum, default_value = "all")]
        tab: Tab,

        /// Print only, write no files
        #[arg(long)]
        no_files: bool,
    },

    /// Score the polarity of a single text
    Score {
        /// Text to score
        #[arg(short, long)]
        text: String,
    },

    /// Keep the file loaded and re-run on every control change
    Interactive {
        #[command(flatten)]
        controls: Controls,

        /// Initial view
        #[arg(short, long, value_enum, default_value = "all")]
        tab: Tab,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.log_level.as_str() {
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Analyze {
            controls,
            output,
            tab,
            no_files,
        } => run_analyze(&controls, output, tab, no_files),
        Commands::Score { text } => {
            run_score(&text);
            Ok(())
        }
        Commands::Interactive { controls, tab } => run_interactive(&controls, tab),
    }
}

fn run_analyze(
    controls: &Controls,
    output: Option<PathBuf>,
    tab: Tab,
    no_files: bool,
) -> Result<()> {
    let mut config = controls.app_config()?;
    if let Some(output) = output {
        config.report.output_dir = output;
    }

    let pipeline = Pipeline::new(config.analysis.clone())?;
    let report = match pipeline.run_path(&controls.input) {
        Ok(report) => report,
        Err(err) if err.is_user_facing() => {
            eprintln!("❌ {}", err);
            std::process::exit(2);
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to analyze {:?}", controls.input))
        }
    };

    println!("{}", report::render(&report, tab, controls.limit));

    if no_files {
        return Ok(());
    }

    let writer = ReportWriter::new(config.report.clone());
    let written = writer.write(&report, config.analysis.max_words)?;
    println!("\n✅ Report written to {}", config.report.output_dir.display());
    for path in written {
        println!("   • {}", path.display());
    }

    Ok(())
}

fn run_score(text: &str) {
    let result = LexiconScorer::new().analyze(text);

    println!("\n📝 Text: {}", result.text);
    println!("Polarity: {:.3}", result.score);
    println!("Sentiment: {}", result.label);

    if !result.key_words.is_empty() {
        println!("\nKey words:");
        for word in &result.key_words {
            let sign = if word.score > 0.0 { "+" } else { "" };
            println!("  • {} ({}{:.2})", word.word, sign, word.score);
        }
    }
}

fn run_interactive(controls: &Controls, tab: Tab) -> Result<()> {
    let config = controls.app_config()?;
    let raw = std::fs::read(&controls.input)
        .with_context(|| format!("Failed to read file: {:?}", controls.input))?;
    info!(bytes = raw.len(), "Loaded upload");

    let mut session = Session::new(raw, config, tab, controls.limit);
    println!("{}\n", HELP);

    match session.execute(Command::Show) {
        Ok(Some(text)) => println!("{}", text),
        Ok(None) => return Ok(()),
        Err(err) => eprintln!("❌ {}", err),
    }

    let stdin = io::stdin();
    loop {
        print!("\n> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                eprintln!("❌ {}", err);
                continue;
            }
        };

        match session.execute(command) {
            Ok(Some(text)) => println!("{}", text),
            Ok(None) => break,
            Err(err) if err.is_user_facing() => eprintln!("❌ {}", err),
            Err(err) => warn!(error = %err, "Command failed"),
        }
    }

    Ok(())
}
