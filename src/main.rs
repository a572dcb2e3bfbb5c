use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::info;

use tonecloud::config::Config;
use tonecloud::pipeline::{self, RunOutcome};

/// Tonecloud: sentiment tally and word cloud for one web article or PDF.
///
/// Fetches the text, cleans it, scores each block with VADER, draws a word
/// cloud of what's left, and prints how many blocks read positive, neutral
/// or negative.
#[derive(Parser)]
#[command(name = "tonecloud", version, about)]
struct Cli {
    /// URL of the article, or path of the PDF when --pdf is given
    source: String,

    /// Treat SOURCE as a PDF file path instead of a URL
    #[arg(long)]
    pdf: bool,

    /// Class of the article container elements to read paragraphs from
    #[arg(long)]
    container_class: Option<String>,

    /// Also keep the word cloud as a PNG at this path
    #[arg(long)]
    output: Option<PathBuf>,

    /// Don't open the word cloud in the system image viewer
    #[arg(long)]
    no_open: bool,

    /// Also print the full run report as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tonecloud=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(class) = cli.container_class {
        config.container_class = class;
    }
    if cli.output.is_some() {
        config.output_path = cli.output;
    }
    if cli.no_open {
        config.open_viewer = false;
    }

    info!(source = %cli.source, pdf = cli.pdf, "Starting analysis");

    match pipeline::analyze(&cli.source, cli.pdf, &config).await? {
        RunOutcome::NoContent => {
            if !cli.pdf {
                println!(
                    "{}",
                    format!(
                        "Check that the page uses the '{}' container class (--container-class).",
                        config.container_class
                    )
                    .dimmed()
                );
            }
        }
        RunOutcome::Completed(report) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            println!("\n{}", "Analysis complete.".bold());
        }
    }

    Ok(())
}
