// Web page fetcher: one GET, one parse, one text unit per extracted block.
//
// There are no retries and no error translation beyond adding context:
// a network failure or a non-success status aborts the run.

use anyhow::{Context, Result};
use scraper::Html;
use tracing::{debug, info};

use super::traits::ContentExtractor;
use crate::models::TextUnit;
use crate::output::truncate_chars;

/// Browser-like identifying header. Some publishers reject obvious bots.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// How much of the fetched HTML to show in debug output.
const HTML_PREVIEW_CHARS: usize = 500;

/// HTTP fetcher that turns an article page into text units.
pub struct WebFetcher {
    client: reqwest::Client,
    extractor: Box<dyn ContentExtractor>,
}

impl WebFetcher {
    /// Create a fetcher sending `user_agent` and extracting with `extractor`.
    pub fn new(user_agent: &str, extractor: Box<dyn ContentExtractor>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, extractor })
    }

    /// Fetch `url` and return one unit per extracted block, in document order.
    ///
    /// An empty vector means the extractor matched nothing on the page;
    /// reporting that is the caller's job.
    pub async fn fetch(&self, url: &str) -> Result<Vec<TextUnit>> {
        debug!(url = url, "GET article page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request to {url} failed"))?
            .error_for_status()
            .with_context(|| format!("{url} returned an error status"))?;

        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {url}"))?;

        debug!(
            bytes = body.len(),
            preview = %truncate_chars(&body, HTML_PREVIEW_CHARS),
            "Fetched HTML"
        );

        Ok(self.extract_units(&body))
    }

    /// Parse an HTML body and run the extractor over it.
    pub fn extract_units(&self, html: &str) -> Vec<TextUnit> {
        let document = Html::parse_document(html);
        let units: Vec<TextUnit> = self
            .extractor
            .extract(&document)
            .into_iter()
            .map(TextUnit::new)
            .collect();

        info!(units = units.len(), "Extracted text blocks from page");
        units
    }
}
