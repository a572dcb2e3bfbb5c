// Data models: the types that flow through one analysis run.
//
// Nothing here is persisted. A run builds a Vec<TextUnit>, mutates each unit
// twice (normalize, then score) and hands the finished collection to the
// summary and the report.

use std::fmt;
use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::sentiment::traits::SentimentScore;
use crate::summary::RunSummary;

/// Where the text for a run comes from. Chosen explicitly by the caller;
/// the input string is never sniffed to guess its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A web page, fetched by URL.
    Web(String),
    /// A PDF document on disk.
    Pdf(PathBuf),
}

impl Source {
    /// Build a source from the raw invocation arguments.
    pub fn from_input(input_source: &str, is_pdf: bool) -> Self {
        if is_pdf {
            Source::Pdf(PathBuf::from(input_source))
        } else {
            Source::Web(input_source.to_string())
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Source::Web(_) => "web",
            Source::Pdf(_) => "pdf",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Web(url) => write!(f, "{url}"),
            Source::Pdf(path) => write!(f, "{}", path.display()),
        }
    }
}

/// One block of source text: a paragraph from a web page, or a whole PDF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextUnit {
    /// Content exactly as fetched (web paragraphs are trimmed).
    pub raw: String,
    /// Cleaned content, set once by the normalizer.
    pub normalized: Option<String>,
    /// Polarity score, set once by the scorer.
    pub sentiment: Option<SentimentScore>,
}

impl TextUnit {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            normalized: None,
            sentiment: None,
        }
    }

    /// The text later stages should work on: normalized once available,
    /// raw before that.
    pub fn text(&self) -> &str {
        self.normalized.as_deref().unwrap_or(&self.raw)
    }

    pub fn set_normalized(&mut self, normalized: String) -> Result<()> {
        if self.normalized.is_some() {
            anyhow::bail!("text unit has already been normalized");
        }
        self.normalized = Some(normalized);
        Ok(())
    }

    pub fn set_sentiment(&mut self, score: SentimentScore) -> Result<()> {
        if self.sentiment.is_some() {
            anyhow::bail!("text unit has already been scored");
        }
        self.sentiment = Some(score);
        Ok(())
    }
}

/// Everything a completed run produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// "web" or "pdf"
    pub source_kind: String,
    /// URL or path the text came from
    pub source: String,
    pub units: Vec<TextUnit>,
    pub summary: RunSummary,
    /// Where the word cloud was written, if it was rendered and saved
    pub cloud_path: Option<PathBuf>,
    /// False when every unit normalized to empty text
    pub cloud_rendered: bool,
    pub generated_at: DateTime<Utc>,
}
