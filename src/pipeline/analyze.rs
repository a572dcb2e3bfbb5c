// Analysis pipeline: fetch, normalize, score, render, summarize.
//
// Stages run strictly forward, once each:
//
//   SelectSource -> Fetch -> Normalize -> Score -> Render -> Summarize -> Done
//
// Two guards branch off that line. Zero fetched units ends the run at
// ReportEmpty before anything else happens. Empty combined text skips
// Render, but Summarize still runs: every empty unit scores neutral, so the
// tally stays meaningful and its total still matches the units fetched.
//
// Any fault in a stage propagates; there are no retries and no partial
// results.

use anyhow::Result;
use tracing::info;

use super::reporter::{Reporter, SilentReporter};
use crate::cloud::{display_for, ImageDisplay, WordCloud};
use crate::config::Config;
use crate::models::{RunReport, Source, TextUnit};
use crate::output::TerminalReporter;
use crate::sentiment::{score_units, SentimentModel, VaderModel};
use crate::source::{fetch_pdf, SelectorExtractor, WebFetcher};
use crate::summary::summarize;
use crate::text::Normalizer;

/// Pipeline stages, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    SelectSource,
    Fetch,
    ReportEmpty,
    Normalize,
    Score,
    Render,
    Summarize,
    Done,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::SelectSource => "select_source",
            Stage::Fetch => "fetch",
            Stage::ReportEmpty => "report_empty",
            Stage::Normalize => "normalize",
            Stage::Score => "score",
            Stage::Render => "render",
            Stage::Summarize => "summarize",
            Stage::Done => "done",
        }
    }
}

/// How a run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// The source yielded no text units; nothing else ran.
    NoContent,
    Completed(RunReport),
}

/// The components one run is wired from. Each is constructed by the caller
/// so any of them can be swapped out.
pub struct Analyzer<'a> {
    pub web: &'a WebFetcher,
    pub normalizer: &'a Normalizer,
    pub model: &'a dyn SentimentModel,
    pub cloud: &'a WordCloud,
    pub display: &'a dyn ImageDisplay,
}

impl Analyzer<'_> {
    /// Run the whole pipeline over one source.
    pub async fn run(&self, source: &Source, reporter: &mut dyn Reporter) -> Result<RunOutcome> {
        enter(Stage::SelectSource);
        info!(kind = source.kind(), source = %source, "Selected source");

        enter(Stage::Fetch);
        reporter.fetch_started(source);
        let mut units = self.fetch(source).await?;

        if units.is_empty() {
            enter(Stage::ReportEmpty);
            info!(source = %source, "No text units found, stopping");
            reporter.no_content(source);
            return Ok(RunOutcome::NoContent);
        }
        reporter.fetched(source, units.len());

        enter(Stage::Normalize);
        self.normalizer.normalize_units(&mut units)?;
        for (index, unit) in units.iter().enumerate() {
            reporter.unit_normalized(index, unit.text());
        }

        enter(Stage::Score);
        score_units(self.model, &mut units)?;
        for (index, unit) in units.iter().enumerate() {
            if let Some(score) = &unit.sentiment {
                reporter.unit_scored(index, score);
            }
        }

        let combined = combined_text(&units);
        reporter.combined_text(&combined);

        let (cloud_path, cloud_rendered) = if combined.is_empty() {
            info!("Combined text is empty, skipping word cloud");
            reporter.render_skipped();
            (None, false)
        } else {
            enter(Stage::Render);
            let rendered = self.cloud.render(&combined)?;
            let path = self.display.show(&rendered.image)?;
            reporter.rendered(rendered.words.len(), path.as_deref());
            (path, true)
        };

        enter(Stage::Summarize);
        let summary = summarize(&units)?;
        info!(
            positive = summary.positive,
            neutral = summary.neutral,
            negative = summary.negative,
            total = summary.total,
            "Summarized run"
        );
        reporter.summary(&summary);

        enter(Stage::Done);
        Ok(RunOutcome::Completed(RunReport {
            source_kind: source.kind().to_string(),
            source: source.to_string(),
            units,
            summary,
            cloud_path,
            cloud_rendered,
            generated_at: chrono::Utc::now(),
        }))
    }

    async fn fetch(&self, source: &Source) -> Result<Vec<TextUnit>> {
        match source {
            Source::Web(url) => self.web.fetch(url).await,
            Source::Pdf(path) => Ok(vec![fetch_pdf(path)?]),
        }
    }
}

/// Space-join the non-empty texts of all units.
pub fn combined_text(units: &[TextUnit]) -> String {
    units
        .iter()
        .map(TextUnit::text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn enter(stage: Stage) {
    info!(stage = stage.as_str(), "Entering pipeline stage");
}

/// Analyze one source with the default components, printing progress to the
/// terminal.
///
/// `is_pdf` picks the source kind: `input_source` is a file path when true
/// and a URL when false.
pub async fn analyze(input_source: &str, is_pdf: bool, config: &Config) -> Result<RunOutcome> {
    let mut reporter = TerminalReporter::new();
    analyze_with(input_source, is_pdf, config, &mut reporter).await
}

/// Like [`analyze`] without any terminal output.
pub async fn analyze_quietly(
    input_source: &str,
    is_pdf: bool,
    config: &Config,
) -> Result<RunOutcome> {
    analyze_with(input_source, is_pdf, config, &mut SilentReporter).await
}

/// Analyze one source with the default components and a caller's reporter.
pub async fn analyze_with(
    input_source: &str,
    is_pdf: bool,
    config: &Config,
    reporter: &mut dyn Reporter,
) -> Result<RunOutcome> {
    let extractor = SelectorExtractor::for_class(&config.container_class)?;
    let web = WebFetcher::new(&config.user_agent, Box::new(extractor))?;
    let normalizer = Normalizer::english();
    let model = VaderModel::new();
    let display = display_for(
        config.output_path.as_deref(),
        config.open_viewer,
        config.viewer_command.as_deref(),
    );

    let analyzer = Analyzer {
        web: &web,
        normalizer: &normalizer,
        model: &model,
        cloud: &config.cloud,
        display: display.as_ref(),
    };

    analyzer
        .run(&Source::from_input(input_source, is_pdf), reporter)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_text_skips_empty_units() {
        let mut a = TextUnit::new("A");
        a.set_normalized("cats ran".to_string()).unwrap();
        let mut b = TextUnit::new("The");
        b.set_normalized(String::new()).unwrap();
        let mut c = TextUnit::new("Fast");
        c.set_normalized("fast".to_string()).unwrap();

        assert_eq!(combined_text(&[a, b, c]), "cats ran fast");
    }

    #[test]
    fn combined_text_of_empty_units_is_empty() {
        let mut a = TextUnit::new("the");
        a.set_normalized(String::new()).unwrap();
        assert_eq!(combined_text(&[a]), "");
    }
}
