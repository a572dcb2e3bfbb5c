// Unit tests for the run summary.
//
// Covers the exact sign rule, percentage arithmetic, and the empty-run
// guard that keeps the percentage math from dividing by zero.

use tonecloud::models::TextUnit;
use tonecloud::sentiment::{Polarity, SentimentScore};
use tonecloud::summary::{summarize, RunSummary};

fn scored(compound: f64) -> TextUnit {
    let mut unit = TextUnit::new("text");
    unit.set_sentiment(SentimentScore::new(0.2, 0.6, 0.2, compound))
        .unwrap();
    unit
}

fn percent_sum(summary: &RunSummary) -> f64 {
    [Polarity::Positive, Polarity::Neutral, Polarity::Negative]
        .iter()
        .map(|p| summary.percent(*p))
        .sum()
}

// ============================================================
// Classification
// ============================================================

#[test]
fn all_zero_compounds_are_all_neutral() {
    let units: Vec<TextUnit> = (0..7).map(|_| scored(0.0)).collect();
    let summary = summarize(&units).unwrap();

    assert_eq!(summary.positive, 0);
    assert_eq!(summary.neutral, 7);
    assert_eq!(summary.negative, 0);
    assert_eq!(summary.total, 7);
    assert!((percent_sum(&summary) - 100.0).abs() < 0.01);
    assert!((summary.percent(Polarity::Neutral) - 100.0).abs() < 1e-9);
}

#[test]
fn tiny_compounds_are_not_rounded_to_neutral() {
    let units = vec![scored(0.0001), scored(-0.0001)];
    let summary = summarize(&units).unwrap();
    assert_eq!(summary.positive, 1);
    assert_eq!(summary.negative, 1);
    assert_eq!(summary.neutral, 0);
}

#[test]
fn counts_always_add_up_to_total() {
    let compounds = [0.9, -0.3, 0.0, 0.2, -0.8, 0.0, 0.05];
    let units: Vec<TextUnit> = compounds.iter().map(|c| scored(*c)).collect();
    let summary = summarize(&units).unwrap();

    assert_eq!(
        summary.positive + summary.neutral + summary.negative,
        summary.total
    );
    assert_eq!(summary.total, compounds.len());
    assert!((percent_sum(&summary) - 100.0).abs() < 1e-9);
}

// ============================================================
// Guards
// ============================================================

#[test]
fn empty_collection_fails_fast() {
    let err = summarize(&[]).unwrap_err();
    assert!(err.to_string().contains("empty"), "unexpected error: {err}");
}

#[test]
fn unscored_units_fail() {
    assert!(summarize(&[TextUnit::new("never scored")]).is_err());
}

// ============================================================
// Display
// ============================================================

#[test]
fn display_line_has_two_decimal_percentages() {
    let summary = summarize(&[scored(0.1), scored(0.0), scored(-0.1)]).unwrap();
    assert_eq!(
        summary.to_string(),
        "Positive: 1 (33.33%), Neutral: 1 (33.33%), Negative: 1 (33.33%), Total: 3"
    );
}
