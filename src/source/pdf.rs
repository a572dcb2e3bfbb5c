// PDF fetcher: the whole document becomes a single text unit.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::TextUnit;

/// Read the PDF at `path`, extract its text page by page and return the
/// concatenation as one unit.
///
/// The file handle is closed before parsing starts. A missing file or a
/// document that is not a readable PDF is an error carrying the path.
pub fn fetch_pdf(path: &Path) -> Result<TextUnit> {
    let bytes = {
        let mut file =
            File::open(path).with_context(|| format!("Failed to open PDF {}", path.display()))?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)
            .with_context(|| format!("Failed to read PDF {}", path.display()))?;
        buf
    };

    let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
        .with_context(|| format!("Failed to extract text from PDF {}", path.display()))?;

    info!(
        path = %path.display(),
        pages = pages.len(),
        "Extracted text from PDF"
    );

    Ok(TextUnit::new(pages.concat()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_error() {
        let err = fetch_pdf(Path::new("/definitely/not/here.pdf")).unwrap_err();
        assert!(format!("{err:#}").contains("here.pdf"));
    }

    #[test]
    fn non_pdf_bytes_are_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.pdf");
        std::fs::write(&path, b"this is plain text, not a pdf").unwrap();
        assert!(fetch_pdf(&path).is_err());
    }
}
