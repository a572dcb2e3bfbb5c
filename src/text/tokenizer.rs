// Treebank-style word tokenizer.
//
// Splits English text the way the Penn Treebank conventions do: punctuation
// becomes its own token, clitics ("n't", "'s", "'ll", ...) are split from
// their host word, fused forms like "cannot" and "gonna" are split in two,
// and hyphenated or dotted words stay whole. Only a chunk-final period is
// split off, and only when the chunk has no other period and is not a known
// abbreviation, so "u.s." and "Mr." survive intact.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Punctuation that always forms its own token wherever it appears.
const ALWAYS_SPLIT: &[char] = &[
    ';', '@', '#', '$', '%', '&', '?', '!', '(', ')', '[', ']', '{', '}', '<', '>', '"', '`',
];

/// Punctuation peeled off the front of a chunk.
const OPENING: &[char] = &['"', '\'', '`', '(', '[', '{', '<', '“', '‘'];

/// Punctuation peeled off the end of a chunk.
const CLOSING: &[char] = &[
    '"', '\'', '`', ')', ']', '}', '>', ',', ';', ':', '!', '?', '”', '’', '…',
];

/// Titles and short forms that keep their trailing period.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "inc", "ltd", "corp", "gen",
    "gov", "sen", "rep", "rev", "lt", "col", "capt", "sgt", "mt", "ave", "dept", "fig", "approx",
];

/// Fused words split into two tokens: "cannot" -> "can" "not".
static FUSED: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)^(can)(not)$",
        r"(?i)^(d)('ye)$",
        r"(?i)^(gim)(me)$",
        r"(?i)^(gon)(na)$",
        r"(?i)^(got)(ta)$",
        r"(?i)^(lem)(me)$",
        r"(?i)^(more)('n)$",
        r"(?i)^(wan)(na)$",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("valid fused word regex"))
    .collect()
});

/// "'tis" and "'twas" at the start of a chunk.
static LEADING_T: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^('t)(?:is|was)(?:[^a-z]|$)").expect("valid leading 't regex")
});

static NEGATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(.+)(n't)$").expect("valid negation regex"));

static CLITIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.+)('s|'m|'d|'ll|'re|'ve)$").expect("valid clitic regex")
});

/// Split text into word and punctuation tokens.
pub fn word_tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for chunk in text.split_whitespace() {
        tokenize_chunk(chunk, &mut tokens);
    }
    tokens
}

fn tokenize_chunk(chunk: &str, tokens: &mut Vec<String>) {
    let mut rest = chunk;

    if let Some(m) = LEADING_T.captures(rest) {
        tokens.push(m[1].to_string());
        rest = &rest[m[1].len()..];
    }

    // Leading quotes and brackets
    while let Some(c) = rest.chars().next() {
        if !OPENING.contains(&c) {
            break;
        }
        tokens.push(c.to_string());
        rest = &rest[c.len_utf8()..];
    }

    // Trailing punctuation, collected back to front
    let mut trailing = Vec::new();
    loop {
        if let Some(stripped) = rest.strip_suffix("...") {
            trailing.push("...".to_string());
            rest = stripped;
            continue;
        }
        let Some(c) = rest.chars().next_back() else {
            break;
        };
        let body = &rest[..rest.len() - c.len_utf8()];
        let final_period = c == '.' && !body.contains('.') && !is_abbreviation(body);
        if CLOSING.contains(&c) || final_period {
            trailing.push(c.to_string());
            rest = body;
        } else {
            break;
        }
    }

    split_inner(rest, tokens);
    tokens.extend(trailing.into_iter().rev());
}

fn is_abbreviation(word: &str) -> bool {
    ABBREVIATIONS.iter().any(|a| a.eq_ignore_ascii_case(word))
}

/// Split the body of a chunk on inner punctuation, then split clitics off
/// each resulting word.
fn split_inner(body: &str, tokens: &mut Vec<String>) {
    let chars: Vec<char> = body.chars().collect();
    let mut word = String::new();

    for (i, &c) in chars.iter().enumerate() {
        let between_digits = i > 0
            && i + 1 < chars.len()
            && chars[i - 1].is_ascii_digit()
            && chars[i + 1].is_ascii_digit();
        let splits = ALWAYS_SPLIT.contains(&c) || ((c == ',' || c == ':') && !between_digits);

        if splits {
            push_word(&mut word, tokens);
            tokens.push(c.to_string());
        } else {
            word.push(c);
        }
    }
    push_word(&mut word, tokens);
}

fn push_word(word: &mut String, tokens: &mut Vec<String>) {
    if word.is_empty() {
        return;
    }
    let taken = std::mem::take(word);
    for caps in FUSED.iter().chain([&*NEGATION, &*CLITIC]) {
        if let Some(m) = caps.captures(&taken) {
            tokens.push(m[1].to_string());
            tokens.push(m[2].to_string());
            return;
        }
    }
    tokens.push(taken);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(text: &str) -> Vec<String> {
        word_tokenize(text)
    }

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(tok("the  cats\tran\nfast"), ["the", "cats", "ran", "fast"]);
    }

    #[test]
    fn separates_punctuation_from_words() {
        assert_eq!(
            tok("Hello, world! How are you?"),
            ["Hello", ",", "world", "!", "How", "are", "you", "?"]
        );
    }

    #[test]
    fn splits_final_period_only() {
        assert_eq!(tok("went home."), ["went", "home", "."]);
        assert_eq!(tok("the u.s. economy"), ["the", "u.s.", "economy"]);
    }

    #[test]
    fn splits_ellipsis_as_one_token() {
        assert_eq!(tok("wait..."), ["wait", "..."]);
    }

    #[test]
    fn splits_contractions() {
        assert_eq!(tok("don't"), ["do", "n't"]);
        assert_eq!(tok("it's"), ["it", "'s"]);
        assert_eq!(tok("they'll"), ["they", "'ll"]);
    }

    #[test]
    fn splits_fused_words() {
        assert_eq!(tok("cannot"), ["can", "not"]);
        assert_eq!(tok("Gonna"), ["Gon", "na"]);
        assert_eq!(tok("gotta wanna"), ["got", "ta", "wan", "na"]);
        assert_eq!(tok("lemme gimme"), ["lem", "me", "gim", "me"]);
        assert_eq!(tok("more'n d'ye"), ["more", "'n", "d", "'ye"]);
        assert_eq!(tok("cannoli"), ["cannoli"]);
    }

    #[test]
    fn splits_leading_t() {
        assert_eq!(tok("'Tis true"), ["'T", "is", "true"]);
        assert_eq!(tok("'twas,"), ["'t", "was", ","]);
        assert_eq!(tok("'tisket"), ["'", "tisket"]);
    }

    #[test]
    fn known_abbreviations_keep_their_period() {
        assert_eq!(tok("Mr. Smith"), ["Mr.", "Smith"]);
        assert_eq!(tok("see Dr., then"), ["see", "Dr.", ",", "then"]);
        assert_eq!(tok("the mister."), ["the", "mister", "."]);
    }

    #[test]
    fn keeps_hyphenated_words_whole() {
        assert_eq!(tok("well-known"), ["well-known"]);
    }

    #[test]
    fn peels_quotes_and_brackets() {
        assert_eq!(tok("(\"quoted\")"), ["(", "\"", "quoted", "\"", ")"]);
    }

    #[test]
    fn keeps_numbers_with_separators() {
        assert_eq!(tok("1,000 at 10:30"), ["1,000", "at", "10:30"]);
        assert_eq!(tok("a,b"), ["a", ",", "b"]);
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tok("").is_empty());
        assert!(tok("   ").is_empty());
    }
}
