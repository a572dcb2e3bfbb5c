// Typeface for cloud words.
//
// DejaVu Sans is compiled into the binary so rendering never depends on the
// fonts installed on the host. It covers Latin (accented letters included),
// Greek and Cyrillic; its license ships next to it in assets/.

use ab_glyph::{Font, FontRef, GlyphId, PxScale, ScaleFont};
use anyhow::Result;

static DEJAVU_SANS: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

/// Parse the bundled face.
pub fn cloud_font() -> Result<FontRef<'static>> {
    FontRef::try_from_slice(DEJAVU_SANS)
        .map_err(|e| anyhow::anyhow!("Bundled word cloud font is unreadable: {e}"))
}

/// Whether the face has a real glyph for `c` rather than the fallback box.
pub fn has_glyph(font: &FontRef<'_>, c: char) -> bool {
    font.glyph_id(c) != GlyphId(0)
}

/// Pixel box a word occupies at `size` px: advance width by line height.
pub fn text_box(font: &FontRef<'_>, size: u32, word: &str) -> (u32, u32) {
    let scale = PxScale::from(size as f32);
    let (width, _) = imageproc::drawing::text_size(scale, font, word);

    let scaled = font.as_scaled(scale);
    let height = (scaled.ascent() - scaled.descent()).ceil() as u32;
    (width, height)
}
