//! Example: review text and sentiment analysis
//!
//! Runs the whole pipeline on a few inline reviews:
//! 1. Cleaning and stop word filtering
//! 2. Word frequencies
//! 3. Polarity classification
//! 4. N-grams and top words per sentiment
//!
//! Run:
//! ```bash
//! cargo run --example review_analysis
//! ```

use rust_review_analytics::report::{self, Tab};
use rust_review_analytics::sentiment::format_score;
use rust_review_analytics::{AnalysisConfig, LexiconScorer, Pipeline};

const REVIEWS: &str = "\
Id,Review
1,I love this pen! The ink is smooth and the grip is great.
2,Terrible pen. It broke after two days.
3,\"Good value, good ink, very happy.\"
4,The cap is blue.
5,Not bad at all: writes well and looks great.
6,Awful customer service. The pen arrived broken.
";

fn main() {
    println!("═══════════════════════════════════════════════════════════");
    println!("   Review Analysis Demo");
    println!("═══════════════════════════════════════════════════════════\n");

    println!("📝 Scoring single reviews\n");
    let scorer = LexiconScorer::new();
    for text in [
        "I love this pen!",
        "Not bad at all",
        "Very disappointing",
        "The cap is blue.",
    ] {
        let result = scorer.analyze(text);
        println!(
            "   {:24} {:>6} {:>9}",
            text,
            format_score(result.score),
            result.label
        );
    }

    let config = AnalysisConfig::default()
        .with_exclusions("pen, ink")
        .with_min_frequency(1);
    let pipeline = match Pipeline::new(config) {
        Ok(pipeline) => pipeline,
        Err(err) => {
            eprintln!("❌ {}", err);
            return;
        }
    };

    let report = match pipeline.run_csv(REVIEWS.as_bytes()) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("❌ {}", err);
            return;
        }
    };

    println!("\n🔍 Tokens after filtering: {}", report.tokens.len());
    println!("{}", report::render(&report, Tab::All, 10));

    match report.export_csv() {
        Ok(bytes) => {
            println!("\n📥 results.csv preview:");
            for line in String::from_utf8_lossy(&bytes).lines().take(4) {
                println!("   {}", line);
            }
        }
        Err(err) => eprintln!("❌ {}", err),
    }
}
