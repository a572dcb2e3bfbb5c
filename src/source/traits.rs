// Content extractor trait: abstraction over page markup.
//
// Every publisher lays out articles differently. The default extractor
// targets one publisher's article container class; a different site only
// needs a different selector or its own ContentExtractor impl.

use anyhow::Result;
use scraper::{Html, Selector};

/// Container class of the publisher layout the default extractor targets.
/// Pages from other sites will usually match nothing with it.
pub const DEFAULT_CONTAINER_CLASS: &str = "article-body";

/// Trait for pulling text blocks out of a parsed HTML document.
pub trait ContentExtractor {
    /// Return the text blocks of the document, in document order.
    fn extract(&self, document: &Html) -> Vec<String>;
}

/// Extracts the trimmed text of every item element inside every container
/// element matched by a CSS selector.
pub struct SelectorExtractor {
    container: Selector,
    item: Selector,
}

impl SelectorExtractor {
    /// Build an extractor from CSS selectors for the containers and for the
    /// items within them.
    pub fn new(container_css: &str, item_css: &str) -> Result<Self> {
        Ok(Self {
            container: parse_selector(container_css)?,
            item: parse_selector(item_css)?,
        })
    }

    /// Paragraphs inside elements carrying `class_name`.
    pub fn for_class(class_name: &str) -> Result<Self> {
        let class_name = class_name.trim();
        if class_name.is_empty() || class_name.contains(char::is_whitespace) {
            anyhow::bail!("Container class must be a single class name, got {class_name:?}");
        }
        Self::new(&format!(".{class_name}"), "p")
    }
}

impl ContentExtractor for SelectorExtractor {
    fn extract(&self, document: &Html) -> Vec<String> {
        document
            .select(&self.container)
            .flat_map(|container| container.select(&self.item))
            .map(|item| item.text().collect::<String>().trim().to_string())
            .collect()
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow::anyhow!("Invalid CSS selector {css:?}: {e:?}"))
}
