// Text cleanup: tokenization and normalization ahead of scoring.

pub mod normalize;
pub mod tokenizer;

pub use normalize::{normalize, Normalizer};
pub use tokenizer::word_tokenize;
