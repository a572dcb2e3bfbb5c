// Image display: where a rendered cloud ends up.
//
// By default the cloud is only shown: SystemViewer writes it to a file in
// the system temp dir and hands that to the platform's image viewer. A PNG
// is kept at a chosen path only when the caller asks for one, through
// PngFile or a SystemViewer built with `saving_to`.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use image::RgbImage;
use tracing::{debug, info, warn};

/// Trait for presenting a rendered image.
pub trait ImageDisplay {
    /// Show the image. Returns the path it was saved to, if the caller
    /// asked for it to be kept.
    fn show(&self, image: &RgbImage) -> Result<Option<PathBuf>>;
}

/// Pick the display for an optional output path and the viewer flag.
///
/// With neither, the cloud is rendered but goes nowhere.
pub fn display_for(
    output: Option<&Path>,
    open_viewer: bool,
    viewer_command: Option<&str>,
) -> Box<dyn ImageDisplay> {
    let configure = |viewer: SystemViewer| match viewer_command {
        Some(command) => viewer.with_command(command),
        None => viewer,
    };
    match (output, open_viewer) {
        (Some(path), true) => Box::new(configure(SystemViewer::saving_to(path))),
        (Some(path), false) => Box::new(PngFile::new(path)),
        (None, true) => Box::new(configure(SystemViewer::temporary())),
        (None, false) => Box::new(Nowhere),
    }
}

/// Writes the image as a PNG.
pub struct PngFile {
    path: PathBuf,
}

impl PngFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ImageDisplay for PngFile {
    fn show(&self, image: &RgbImage) -> Result<Option<PathBuf>> {
        write_png(image, &self.path)?;
        info!(path = %self.path.display(), "Saved word cloud");
        Ok(Some(self.path.clone()))
    }
}

/// Opens the image in the desktop's image viewer.
pub struct SystemViewer {
    /// Where to keep the PNG; a temp file when unset
    saved: Option<PngFile>,
    /// Viewer program overriding the platform default
    command: Option<String>,
}

impl SystemViewer {
    /// Show from a temp file; nothing is kept at a caller-visible path.
    pub fn temporary() -> Self {
        Self {
            saved: None,
            command: None,
        }
    }

    /// Save to `path`, then show that file.
    pub fn saving_to(path: impl Into<PathBuf>) -> Self {
        Self {
            saved: Some(PngFile::new(path)),
            command: None,
        }
    }

    /// Launch `command <file>` instead of the platform opener.
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    fn opener(&self, path: &Path) -> Command {
        match &self.command {
            Some(program) => {
                let mut cmd = Command::new(program);
                cmd.arg(path);
                cmd
            }
            None => platform_opener(path),
        }
    }
}

impl ImageDisplay for SystemViewer {
    fn show(&self, image: &RgbImage) -> Result<Option<PathBuf>> {
        let (shown, saved) = match &self.saved {
            Some(file) => {
                let path = file
                    .show(image)?
                    .unwrap_or_else(|| file.path().to_path_buf());
                (path.clone(), Some(path))
            }
            None => (write_temp_png(image)?, None),
        };

        // Viewer failures only warn; the run itself succeeded.
        match self.opener(&shown).spawn() {
            Ok(_) => info!(path = %shown.display(), "Opened word cloud in image viewer"),
            Err(e) => {
                warn!(error = %e, path = %shown.display(), "Could not open image viewer")
            }
        }
        Ok(saved)
    }
}

/// Discards the image.
struct Nowhere;

impl ImageDisplay for Nowhere {
    fn show(&self, _image: &RgbImage) -> Result<Option<PathBuf>> {
        info!("No output path and no viewer, word cloud not shown");
        Ok(None)
    }
}

fn write_png(image: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    image
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("Failed to write word cloud to {}", path.display()))
}

/// Write the image to a fresh file in the system temp dir.
///
/// The file outlives the process: the viewer reads it after we return.
fn write_temp_png(image: &RgbImage) -> Result<PathBuf> {
    let file = tempfile::Builder::new()
        .prefix("tonecloud-")
        .suffix(".png")
        .tempfile()
        .context("Failed to create temp file for word cloud")?;
    let path = file
        .into_temp_path()
        .keep()
        .context("Failed to keep temp file for word cloud")?;

    write_png(image, &path)?;
    debug!(path = %path.display(), "Wrote word cloud to temp file");
    Ok(path)
}

fn platform_opener(path: &Path) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(path);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}
