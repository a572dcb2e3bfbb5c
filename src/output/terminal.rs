// Colored terminal output for analysis runs.
//
// TerminalReporter prints the stage-by-stage diagnostics a person watching
// the run wants to see: a spinner while the page loads, each unit's cleaned
// text and score, the combined text, and the final tally.

use std::path::Path;
use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::models::Source;
use crate::pipeline::reporter::Reporter;
use crate::sentiment::traits::{Polarity, SentimentScore};
use crate::summary::RunSummary;

/// How much of each unit's text to echo.
const UNIT_PREVIEW_CHARS: usize = 160;
/// How much of the combined text to echo.
const COMBINED_PREVIEW_CHARS: usize = 400;

/// Reporter that prints to stdout.
#[derive(Default)]
pub struct TerminalReporter {
    spinner: Option<ProgressBar>,
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn stop_spinner(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }
}

// A fault can end the run between fetch_started and fetched; the spinner
// must not outlive the reporter.
impl Drop for TerminalReporter {
    fn drop(&mut self) {
        self.stop_spinner();
    }
}

impl Reporter for TerminalReporter {
    fn fetch_started(&mut self, source: &Source) {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(format!("Fetching {} source {}...", source.kind(), source));
        pb.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(pb);
    }

    fn fetched(&mut self, source: &Source, units: usize) {
        self.stop_spinner();
        println!(
            "Fetched {} text unit{} from {}",
            units,
            if units == 1 { "" } else { "s" },
            source.to_string().bold()
        );
    }

    fn no_content(&mut self, source: &Source) {
        self.stop_spinner();
        println!(
            "{} No articles found at {}",
            "Warning:".yellow(),
            source.to_string().bold()
        );
    }

    fn unit_normalized(&mut self, index: usize, text: &str) {
        let preview = super::truncate_chars(text, UNIT_PREVIEW_CHARS);
        println!(
            "  {:>3}. {}",
            index + 1,
            if preview.is_empty() {
                "(empty after cleanup)".dimmed()
            } else {
                preview.dimmed()
            }
        );
    }

    fn unit_scored(&mut self, index: usize, score: &SentimentScore) {
        println!(
            "  {:>3}. pos {:.3}  neu {:.3}  neg {:.3}  compound {:>6.3}  {}",
            index + 1,
            score.positive,
            score.neutral,
            score.negative,
            score.compound,
            colorize_polarity(score.polarity()),
        );
    }

    fn combined_text(&mut self, text: &str) {
        println!("\n{}", "Combined text:".bold());
        println!(
            "  {}",
            super::truncate_chars(text, COMBINED_PREVIEW_CHARS).dimmed()
        );
    }

    fn render_skipped(&mut self) {
        println!(
            "\n{} Nothing left to draw after cleanup, skipping the word cloud",
            "Note:".yellow()
        );
    }

    fn rendered(&mut self, words: usize, path: Option<&Path>) {
        match path {
            Some(path) => println!(
                "\nWord cloud ({} words) saved to: {}",
                words,
                path.display().to_string().bold()
            ),
            None => println!("\nWord cloud rendered ({words} words)"),
        }
    }

    fn summary(&mut self, summary: &RunSummary) {
        println!("\n{}", "=== Sentiment Summary ===".bold());
        for polarity in [Polarity::Positive, Polarity::Neutral, Polarity::Negative] {
            println!(
                "  {:<10} {:>5}  ({:>6.2}%)",
                colorize_polarity(polarity),
                summary.count(polarity),
                summary.percent(polarity),
            );
        }
        println!("  {:<10} {:>5}", "Total", summary.total);
        println!("\n{summary}");
    }
}

/// Colorize a polarity label.
fn colorize_polarity(polarity: Polarity) -> colored::ColoredString {
    let label = polarity.as_str();
    match polarity {
        Polarity::Positive => label.green(),
        Polarity::Neutral => label.dimmed(),
        Polarity::Negative => label.red(),
    }
}
