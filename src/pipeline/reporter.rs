// Reporter trait: user-facing progress for one analysis run.
//
// The orchestrator tells the reporter what happened; it never asks the
// reporter anything back, so what gets printed cannot change what runs.

use std::path::Path;

use crate::models::Source;
use crate::sentiment::traits::SentimentScore;
use crate::summary::RunSummary;

/// Receives progress events from the analysis pipeline.
pub trait Reporter {
    /// The fetch is about to start.
    fn fetch_started(&mut self, source: &Source);

    /// The fetch produced `units` text units (at least one).
    fn fetched(&mut self, source: &Source, units: usize);

    /// The fetch produced nothing; the run stops here.
    fn no_content(&mut self, source: &Source);

    fn unit_normalized(&mut self, index: usize, text: &str);

    fn unit_scored(&mut self, index: usize, score: &SentimentScore);

    /// The space-joined normalized text of every unit.
    fn combined_text(&mut self, text: &str);

    /// Every unit normalized to empty text, so there is nothing to draw.
    fn render_skipped(&mut self);

    fn rendered(&mut self, words: usize, path: Option<&Path>);

    fn summary(&mut self, summary: &RunSummary);
}

/// Reporter that discards everything. Used by library callers that only
/// want the returned report.
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn fetch_started(&mut self, _source: &Source) {}
    fn fetched(&mut self, _source: &Source, _units: usize) {}
    fn no_content(&mut self, _source: &Source) {}
    fn unit_normalized(&mut self, _index: usize, _text: &str) {}
    fn unit_scored(&mut self, _index: usize, _score: &SentimentScore) {}
    fn combined_text(&mut self, _text: &str) {}
    fn render_skipped(&mut self) {}
    fn rendered(&mut self, _words: usize, _path: Option<&Path>) {}
    fn summary(&mut self, _summary: &RunSummary) {}
}
