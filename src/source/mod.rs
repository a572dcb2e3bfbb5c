// Source fetching: turns a URL or a PDF path into raw text units.
//
// Web pages go through a ContentExtractor so the markup a page uses can be
// swapped without touching the rest of the pipeline. PDFs are read whole and
// become a single unit.

pub mod pdf;
pub mod traits;
pub mod web;

pub use pdf::fetch_pdf;
pub use traits::{ContentExtractor, SelectorExtractor, DEFAULT_CONTAINER_CLASS};
pub use web::{WebFetcher, DEFAULT_USER_AGENT};
