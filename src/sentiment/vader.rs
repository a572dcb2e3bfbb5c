// VADER polarity model.
//
// Wraps the vader_sentiment port of the VADER lexicon/rule model. The
// analyzer loads its lexicon once at construction; scoring is pure after
// that.

use anyhow::{Context, Result};
use vader_sentiment::SentimentIntensityAnalyzer;

use super::traits::{SentimentModel, SentimentScore};

/// Lexicon/rule based polarity model. The default scorer.
pub struct VaderModel {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderModel {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentModel for VaderModel {
    fn polarity(&self, text: &str) -> Result<SentimentScore> {
        let scores = self.analyzer.polarity_scores(text);
        let field = |key: &str| -> Result<f64> {
            scores
                .get(key)
                .copied()
                .with_context(|| format!("VADER output is missing the '{key}' field"))
        };

        Ok(SentimentScore::new(
            field("pos")?,
            field("neu")?,
            field("neg")?,
            field("compound")?,
        ))
    }
}
