// Tonecloud: sentiment tally and word cloud for a web article or PDF.
//
// This is the library root. Each module corresponds to one stage of the
// analysis pipeline, plus the configuration and output plumbing around it.

pub mod cloud;
pub mod config;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod sentiment;
pub mod source;
pub mod summary;
pub mod text;
