// Word cloud: frequency layout, raster rendering and display.
//
// The layout is computed first (which words, how big, where), then drawn
// onto a white canvas with the bundled typeface, then smoothed and handed
// to an ImageDisplay.

pub mod display;
pub mod font;
pub mod layout;

pub use display::{display_for, ImageDisplay, PngFile, SystemViewer};
pub use layout::{word_frequencies, PlacedWord, RenderedCloud, WordCloud};
