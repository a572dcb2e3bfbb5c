// Sentiment scoring: trait-based abstraction over the polarity model.
//
// The SentimentModel trait defines the interface. VaderModel implements it
// with the VADER lexicon; tests substitute fakes without touching the
// pipeline.

pub mod traits;
pub mod vader;

pub use traits::{score_units, Polarity, SentimentModel, SentimentScore};
pub use vader::VaderModel;
