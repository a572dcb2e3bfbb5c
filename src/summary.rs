// Run summary: tallies how many text units landed on each side of zero.

use std::fmt;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::models::TextUnit;
use crate::sentiment::traits::Polarity;

/// Counts of positive, neutral and negative units for one run.
///
/// Always built from a non-empty collection, so `total` is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    pub total: usize,
}

impl RunSummary {
    pub fn count(&self, polarity: Polarity) -> usize {
        match polarity {
            Polarity::Positive => self.positive,
            Polarity::Neutral => self.neutral,
            Polarity::Negative => self.negative,
        }
    }

    /// Share of units with the given polarity, as a percentage.
    pub fn percent(&self, polarity: Polarity) -> f64 {
        self.count(polarity) as f64 / self.total as f64 * 100.0
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Positive: {} ({:.2}%), Neutral: {} ({:.2}%), Negative: {} ({:.2}%), Total: {}",
            self.positive,
            self.percent(Polarity::Positive),
            self.neutral,
            self.percent(Polarity::Neutral),
            self.negative,
            self.percent(Polarity::Negative),
            self.total,
        )
    }
}

/// Tally scored units by the sign of their compound score.
///
/// Fails on an empty collection (there is nothing to take a percentage of)
/// and on any unit that has not been scored yet.
pub fn summarize(units: &[TextUnit]) -> Result<RunSummary> {
    if units.is_empty() {
        anyhow::bail!("Cannot summarize an empty run: no text units were scored");
    }

    let mut summary = RunSummary {
        positive: 0,
        neutral: 0,
        negative: 0,
        total: units.len(),
    };

    for (index, unit) in units.iter().enumerate() {
        let Some(score) = unit.sentiment else {
            anyhow::bail!("Text unit {index} has not been scored");
        };
        match score.polarity() {
            Polarity::Positive => summary.positive += 1,
            Polarity::Neutral => summary.neutral += 1,
            Polarity::Negative => summary.negative += 1,
        }
    }

    Ok(summary)
}
