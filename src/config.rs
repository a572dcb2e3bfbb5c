use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cloud::WordCloud;
use crate::source::{DEFAULT_CONTAINER_CLASS, DEFAULT_USER_AGENT};

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. CLI flags
/// override these values after loading.
#[derive(Debug, Clone)]
pub struct Config {
    /// User-Agent header sent with the page request
    pub user_agent: String,
    /// Class of the article container elements to extract paragraphs from
    pub container_class: String,
    /// Keep the rendered cloud as a PNG here; unset means show only
    pub output_path: Option<PathBuf>,
    /// Open the rendered cloud in the system image viewer
    pub open_viewer: bool,
    /// Viewer program to use instead of the platform opener
    pub viewer_command: Option<String>,
    pub cloud: WordCloud,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            container_class: DEFAULT_CONTAINER_CLASS.to_string(),
            output_path: None,
            open_viewer: true,
            viewer_command: None,
            cloud: WordCloud::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default; only malformed numbers are errors.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let mut cloud = defaults.cloud;
        cloud.width = env_number("TONECLOUD_CLOUD_WIDTH", cloud.width)?;
        cloud.height = env_number("TONECLOUD_CLOUD_HEIGHT", cloud.height)?;
        cloud.max_words = env_number("TONECLOUD_MAX_WORDS", cloud.max_words)?;

        Ok(Self {
            user_agent: env::var("TONECLOUD_USER_AGENT").unwrap_or(defaults.user_agent),
            container_class: env::var("TONECLOUD_CONTAINER_CLASS")
                .unwrap_or(defaults.container_class),
            output_path: env::var("TONECLOUD_OUTPUT").ok().map(PathBuf::from),
            open_viewer: defaults.open_viewer,
            viewer_command: env::var("TONECLOUD_VIEWER").ok(),
            cloud,
        })
    }
}

/// Read a numeric env var, falling back to `default` when unset.
fn env_number<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a number, got {raw:?}")),
        Err(_) => Ok(default),
    }
}
