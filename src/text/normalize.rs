// Text normalizer: turns fetched prose into a space-joined list of
// meaningful lowercase words.
//
// Step order matters: whitespace is collapsed before digits are removed, and
// the text is lowercased before tokenizing so stopword matching is exact.

use std::collections::HashSet;
use std::sync::LazyLock;

use anyhow::Result;
use stop_words::{get, LANGUAGE};
use tracing::debug;

use super::tokenizer::word_tokenize;
use crate::models::TextUnit;

static ENGLISH: LazyLock<Normalizer> = LazyLock::new(Normalizer::english);

/// Normalize text with the English stopword set.
pub fn normalize(text: &str) -> String {
    ENGLISH.normalize(text)
}

/// Deterministic text cleaner over a fixed stopword set.
#[derive(Debug, Clone)]
pub struct Normalizer {
    stopwords: HashSet<String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::english()
    }
}

impl Normalizer {
    /// Normalizer using the NLTK English stopword list.
    pub fn english() -> Self {
        Self::with_stopwords(get(LANGUAGE::English))
    }

    /// Normalizer over a custom stopword set. Words are lowercased on the way in.
    pub fn with_stopwords<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stopwords: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Clean one piece of text:
    ///
    /// 1. collapse whitespace runs to one space
    /// 2. drop numeric characters
    /// 3. lowercase
    /// 4. tokenize
    /// 5. keep purely alphabetic, non-stopword tokens
    /// 6. rejoin with single spaces
    pub fn normalize(&self, text: &str) -> String {
        let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
        let digitless: String = collapsed.chars().filter(|c| !c.is_numeric()).collect();
        let lowered = digitless.to_lowercase();

        word_tokenize(&lowered)
            .into_iter()
            .filter(|token| is_alphabetic_word(token) && !self.is_stopword(token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Normalize every unit in place.
    pub fn normalize_units(&self, units: &mut [TextUnit]) -> Result<()> {
        for (index, unit) in units.iter_mut().enumerate() {
            let normalized = self.normalize(&unit.raw);
            debug!(unit = index, text = %normalized, "Normalized text unit");
            unit.set_normalized(normalized)?;
        }
        Ok(())
    }
}

fn is_alphabetic_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_reference_example() {
        assert_eq!(normalize("The 3 Cats ran  FAST"), "cats ran fast");
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\n "), "");
    }

    #[test]
    fn digits_inside_words_are_removed() {
        let n = Normalizer::with_stopwords(Vec::<String>::new());
        assert_eq!(n.normalize("covid19 b2b"), "covid bb");
    }

    #[test]
    fn punctuation_tokens_are_dropped() {
        let n = Normalizer::with_stopwords(["is"]);
        assert_eq!(n.normalize("Markets, it is said, rallied!"), "markets it said rallied");
    }

    #[test]
    fn hyphenated_words_are_dropped() {
        let n = Normalizer::with_stopwords(Vec::<String>::new());
        assert_eq!(n.normalize("a well-known fact"), "a fact");
    }

    #[test]
    fn custom_stopwords_are_lowercased() {
        let n = Normalizer::with_stopwords(["FAST"]);
        assert_eq!(n.normalize("ran fast"), "ran");
    }

    #[test]
    fn normalize_units_sets_normalized_and_keeps_raw() {
        let n = Normalizer::english();
        let mut units = vec![TextUnit::new("The 3 Cats ran  FAST")];
        n.normalize_units(&mut units).unwrap();
        assert_eq!(units[0].raw, "The 3 Cats ran  FAST");
        assert_eq!(units[0].normalized.as_deref(), Some("cats ran fast"));
    }
}
