// Pipeline orchestration: one source in, one report out.

pub mod analyze;
pub mod reporter;

pub use analyze::{analyze, analyze_quietly, analyze_with, Analyzer, RunOutcome, Stage};
pub use reporter::{Reporter, SilentReporter};
