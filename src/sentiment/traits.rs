// Sentiment model trait and the score type it produces.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::TextUnit;

/// Four-part polarity score for one piece of text.
///
/// `positive`, `neutral` and `negative` are proportions that sum to 1.
/// `compound` is the normalized composite in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
    pub compound: f64,
}

/// Which side of zero a compound score falls on. No tolerance band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Positive,
    Neutral,
    Negative,
}

impl Polarity {
    pub fn from_compound(compound: f64) -> Self {
        if compound > 0.0 {
            Polarity::Positive
        } else if compound < 0.0 {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Positive => "Positive",
            Polarity::Neutral => "Neutral",
            Polarity::Negative => "Negative",
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl SentimentScore {
    /// Build a score from raw model output.
    ///
    /// Models round their proportions, so the three are rescaled to sum to
    /// exactly 1. A model that reports no proportions at all (empty text)
    /// yields a fully neutral score. Compound is clamped to [-1, 1]; a NaN
    /// anywhere is treated as zero.
    pub fn new(positive: f64, neutral: f64, negative: f64, compound: f64) -> Self {
        let clean = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
        let (pos, neu, neg) = (clean(positive), clean(neutral), clean(negative));
        let sum = pos + neu + neg;

        let compound = if compound.is_finite() {
            compound.clamp(-1.0, 1.0)
        } else {
            0.0
        };

        if sum == 0.0 {
            return Self {
                positive: 0.0,
                neutral: 1.0,
                negative: 0.0,
                compound,
            };
        }

        Self {
            positive: pos / sum,
            neutral: neu / sum,
            negative: neg / sum,
            compound,
        }
    }

    /// The score of text that carries no polarity at all.
    pub fn neutral() -> Self {
        Self::new(0.0, 1.0, 0.0, 0.0)
    }

    pub fn polarity(&self) -> Polarity {
        Polarity::from_compound(self.compound)
    }
}

/// Trait for scoring text polarity. Implementations are constructed once and
/// passed explicitly to whatever needs them.
pub trait SentimentModel {
    /// Score a single text. Must not fail on empty input.
    fn polarity(&self, text: &str) -> Result<SentimentScore>;
}

/// Score every unit's current text and store the result on the unit.
pub fn score_units(model: &dyn SentimentModel, units: &mut [TextUnit]) -> Result<()> {
    for (index, unit) in units.iter_mut().enumerate() {
        let score = model
            .polarity(unit.text())
            .with_context(|| format!("Failed to score text unit {index}"))?;
        debug!(
            unit = index,
            pos = score.positive,
            neu = score.neutral,
            neg = score.negative,
            compound = score.compound,
            "Scored text unit"
        );
        unit.set_sentiment(score)?;
    }
    Ok(())
}
