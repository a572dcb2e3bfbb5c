// Word cloud layout and rendering.
//
// Words are sized linearly by frequency relative to the most frequent word
// and placed one at a time, biggest first, along an Archimedean spiral out
// from the canvas centre. A word that collides everywhere is retried at
// shrinking font sizes and dropped once it cannot fit at the minimum size.

use std::collections::HashMap;

use ab_glyph::{FontRef, PxScale};
use anyhow::Result;
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;
use serde::Serialize;
use tracing::{debug, info};

use super::font::{cloud_font, has_glyph, text_box};

/// Radial growth of the placement spiral, in pixels per radian.
const SPIRAL_STEP: f64 = 2.0;
/// Angular increment between placement attempts, in radians.
const SPIRAL_DELTA: f64 = 0.1;
/// Minimum gap kept between placed words, in pixels.
const WORD_PADDING: u32 = 2;
/// Each retry of a word that did not fit uses this fraction of the last size.
const SHRINK_FACTOR: f64 = 0.85;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

const PALETTE: [Rgb<u8>; 6] = [
    Rgb([31, 119, 180]),
    Rgb([44, 160, 44]),
    Rgb([214, 39, 40]),
    Rgb([148, 103, 189]),
    Rgb([255, 127, 14]),
    Rgb([23, 190, 207]),
];

/// A word that made it onto the canvas, in canvas (pre-smoothing) pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedWord {
    pub word: String,
    pub count: usize,
    /// Font size in pixels
    pub font_size: u32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PlacedWord {
    fn overlaps(&self, x: u32, y: u32, width: u32, height: u32) -> bool {
        let pad = WORD_PADDING;
        x < self.x + self.width + pad
            && self.x < x + width + pad
            && y < self.y + self.height + pad
            && self.y < y + height + pad
    }
}

/// The drawn cloud plus the layout it was drawn from.
pub struct RenderedCloud {
    pub image: RgbImage,
    pub words: Vec<PlacedWord>,
}

/// Word cloud settings. Canvas size is fixed per instance.
#[derive(Debug, Clone)]
pub struct WordCloud {
    pub width: u32,
    pub height: u32,
    /// How many of the most frequent words to consider
    pub max_words: usize,
    /// Font size in pixels for the rarest words
    pub min_font_size: u32,
    /// Font size in pixels for the most frequent word
    pub max_font_size: u32,
    /// Bilinear upscale factor applied before display
    pub display_scale: u32,
}

impl Default for WordCloud {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            max_words: 200,
            min_font_size: 10,
            max_font_size: 80,
            display_scale: 2,
        }
    }
}

/// Count space-separated words, most frequent first, ties alphabetical.
pub fn word_frequencies(text: &str) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in text.split_whitespace() {
        *counts.entry(word).or_default() += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(word, count)| (word.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

/// `target`, then ever smaller sizes down to and including `min`.
fn shrinking_sizes(target: u32, min: u32) -> Vec<u32> {
    let mut sizes = vec![target];
    let mut size = target;
    while size > min {
        size = ((f64::from(size) * SHRINK_FACTOR) as u32).max(min);
        sizes.push(size);
    }
    sizes
}

impl WordCloud {
    fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            anyhow::bail!(
                "Word cloud canvas must be non-empty, got {}x{}",
                self.width,
                self.height
            );
        }
        if self.max_words == 0 {
            anyhow::bail!("Word cloud max_words must be at least 1");
        }
        if self.min_font_size == 0 || self.min_font_size > self.max_font_size {
            anyhow::bail!(
                "Word cloud font sizes must satisfy 1 <= min ({}) <= max ({})",
                self.min_font_size,
                self.max_font_size
            );
        }
        if self.display_scale == 0 {
            anyhow::bail!("Word cloud display_scale must be at least 1");
        }
        Ok(())
    }

    /// Decide which words go where. Fails on text with no words.
    pub fn layout(&self, text: &str) -> Result<Vec<PlacedWord>> {
        let font = cloud_font()?;
        self.layout_with(&font, text)
    }

    fn layout_with(&self, font: &FontRef<'_>, text: &str) -> Result<Vec<PlacedWord>> {
        self.validate()?;

        let ranked = word_frequencies(text);
        let Some(top_count) = ranked.first().map(|(_, count)| *count) else {
            anyhow::bail!("Cannot lay out a word cloud for empty text");
        };

        let span = f64::from(self.max_font_size - self.min_font_size);
        let mut placed: Vec<PlacedWord> = Vec::new();
        for (word, count) in ranked.into_iter().take(self.max_words) {
            if word.chars().any(|c| !has_glyph(font, c)) {
                debug!(word = %word, "Word has characters outside the cloud font");
            }

            let target =
                self.min_font_size + (span * count as f64 / top_count as f64).round() as u32;
            let position = shrinking_sizes(target, self.min_font_size)
                .into_iter()
                .find_map(|size| {
                    let (width, height) = text_box(font, size, &word);
                    self.find_spot(width, height, &placed)
                        .map(|(x, y)| (size, x, y, width, height))
                });

            match position {
                Some((font_size, x, y, width, height)) => placed.push(PlacedWord {
                    word,
                    count,
                    font_size,
                    x,
                    y,
                    width,
                    height,
                }),
                None => debug!(word = %word, "No room left for word, dropping it"),
            }
        }

        Ok(placed)
    }

    /// Walk the spiral until a box of this size fits inside the canvas
    /// without touching any placed word.
    fn find_spot(&self, width: u32, height: u32, placed: &[PlacedWord]) -> Option<(u32, u32)> {
        if width == 0 || width > self.width || height > self.height {
            return None;
        }

        let (cx, cy) = (f64::from(self.width) / 2.0, f64::from(self.height) / 2.0);
        let aspect = f64::from(self.height) / f64::from(self.width);
        let max_radius = cx.hypot(cy) + f64::from(width.max(height));

        let mut theta = 0.0_f64;
        loop {
            let radius = SPIRAL_STEP * theta;
            if radius > max_radius {
                return None;
            }

            let left = cx + radius * theta.cos() - f64::from(width) / 2.0;
            let top = cy + radius * aspect * theta.sin() - f64::from(height) / 2.0;

            if left >= 0.0
                && top >= 0.0
                && left + f64::from(width) <= f64::from(self.width)
                && top + f64::from(height) <= f64::from(self.height)
            {
                let (x, y) = (left as u32, top as u32);
                if !placed.iter().any(|p| p.overlaps(x, y, width, height)) {
                    return Some((x, y));
                }
            }

            theta += SPIRAL_DELTA;
        }
    }

    /// Lay out and draw `text`, then smooth the canvas up to display size.
    pub fn render(&self, text: &str) -> Result<RenderedCloud> {
        let font = cloud_font()?;
        let words = self.layout_with(&font, text)?;

        let mut canvas = RgbImage::from_pixel(self.width, self.height, BACKGROUND);
        for (index, word) in words.iter().enumerate() {
            draw_text_mut(
                &mut canvas,
                PALETTE[index % PALETTE.len()],
                word.x as i32,
                word.y as i32,
                PxScale::from(word.font_size as f32),
                &font,
                &word.word,
            );
        }

        let image = if self.display_scale > 1 {
            imageops::resize(
                &canvas,
                self.width * self.display_scale,
                self.height * self.display_scale,
                FilterType::Triangle,
            )
        } else {
            canvas
        };

        info!(
            words = words.len(),
            width = image.width(),
            height = image.height(),
            "Rendered word cloud"
        );

        Ok(RenderedCloud { image, words })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_cloud() -> WordCloud {
        WordCloud {
            width: 200,
            height: 100,
            max_words: 50,
            min_font_size: 8,
            max_font_size: 32,
            display_scale: 1,
        }
    }

    #[test]
    fn frequencies_rank_by_count_then_alphabet() {
        let ranked = word_frequencies("b a c a b a");
        assert_eq!(
            ranked,
            vec![
                ("a".to_string(), 3),
                ("b".to_string(), 2),
                ("c".to_string(), 1)
            ]
        );
    }

    #[test]
    fn most_frequent_word_gets_largest_size() {
        let words = small_cloud().layout("news news news news good").unwrap();
        assert_eq!(words[0].word, "news");
        assert_eq!(words[0].font_size, 32);
        assert_eq!(words[1].word, "good");
        assert!(words[1].font_size < words[0].font_size);
    }

    #[test]
    fn shrinking_sizes_end_at_the_minimum() {
        assert_eq!(shrinking_sizes(8, 8), [8]);
        let sizes = shrinking_sizes(32, 8);
        assert_eq!(sizes.first(), Some(&32));
        assert_eq!(sizes.last(), Some(&8));
        assert!(sizes.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn placed_words_stay_inside_and_apart() {
        let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa alpha beta alpha";
        let cloud = small_cloud();
        let words = cloud.layout(text).unwrap();
        assert!(!words.is_empty());
        for (i, a) in words.iter().enumerate() {
            assert!(a.x + a.width <= cloud.width && a.y + a.height <= cloud.height);
            for b in &words[i + 1..] {
                assert!(
                    !a.overlaps(b.x, b.y, b.width, b.height),
                    "{} overlaps {}",
                    a.word,
                    b.word
                );
            }
        }
    }

    #[test]
    fn max_words_caps_the_layout() {
        let mut cloud = small_cloud();
        cloud.max_words = 2;
        let words = cloud.layout("one two three four").unwrap();
        assert!(words.len() <= 2);
    }

    #[test]
    fn oversized_word_is_dropped() {
        let mut cloud = small_cloud();
        cloud.width = 40;
        let words = cloud.layout("extraordinarily").unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn empty_text_is_an_error() {
        assert!(small_cloud().layout("").is_err());
        assert!(small_cloud().render("   ").is_err());
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let mut cloud = small_cloud();
        cloud.min_font_size = 40;
        assert!(cloud.layout("word").is_err());
    }

    #[test]
    fn render_upscales_by_display_scale() {
        let mut cloud = small_cloud();
        cloud.display_scale = 2;
        let rendered = cloud.render("hello world hello").unwrap();
        assert_eq!(rendered.image.dimensions(), (400, 200));
    }

    #[test]
    fn render_draws_on_white_background() {
        let rendered = small_cloud().render("hello").unwrap();
        assert_eq!(*rendered.image.get_pixel(0, 0), BACKGROUND);
        let word = &rendered.words[0];
        let inked = (word.y..word.y + word.height)
            .flat_map(|y| (word.x..word.x + word.width).map(move |x| (x, y)))
            .any(|(x, y)| *rendered.image.get_pixel(x, y) != BACKGROUND);
        assert!(inked);
    }

    #[test]
    fn accented_words_are_drawn_like_plain_ones() {
        let font = cloud_font().unwrap();
        assert!("café".chars().all(|c| has_glyph(&font, c)));

        let plain = small_cloud().render("cafe").unwrap();
        let accented = small_cloud().render("café").unwrap();
        assert_eq!(accented.words[0].word, "café");
        // The accent is drawn, not replaced by a fallback box.
        let ink = |image: &RgbImage| image.pixels().filter(|p| **p != BACKGROUND).count();
        assert!(ink(&accented.image) > ink(&plain.image));
    }
}
