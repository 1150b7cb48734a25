//! # peerlens-tokenize
//!
//! **Tier 1 (Leaf)**
//!
//! Shared text plumbing for every peerlens analyzer:
//! 1. `normalize` strips bold markup and collapses whitespace
//! 2. `tokenize` splits on non-alphanumeric/underscore boundaries
//! 3. `stem` reduces a token to its Snowball (Porter2) English root
//! 4. `sentences`, `chunk_words` and the syllable counter feed the
//!    readability and span-localization passes
//!
//! Empty or whitespace-only input always yields empty output.

#![forbid(unsafe_code)]

use std::sync::LazyLock;

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

static BOLD_MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("valid regex"));

static ENGLISH_STEMMER: LazyLock<Stemmer> = LazyLock::new(|| Stemmer::create(Algorithm::English));

const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];
const VOWELS: &str = "aeiouy";

/// Strip `**bold**` delimiters, collapse whitespace runs and trim.
pub fn normalize(text: &str) -> String {
    collapse_whitespace(&BOLD_MARKUP.replace_all(text, "$1"))
}

/// Collapse every whitespace run to a single space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lower-case then collapse whitespace.
pub fn lower_collapse(text: &str) -> String {
    collapse_whitespace(&text.to_lowercase())
}

fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split text into word tokens: maximal runs of alphanumerics or `_`.
///
/// Case is preserved; lower-case the input first when case-insensitive
/// tokens are needed.
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (i, c) in text.char_indices() {
        match (start, is_token_char(c)) {
            (None, true) => start = Some(i),
            (Some(s), false) => {
                tokens.push(&text[s..i]);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        tokens.push(&text[s..]);
    }
    tokens
}

/// Lower-cased tokens as owned strings.
pub fn lower_tokens(text: &str) -> Vec<String> {
    tokenize(&text.to_lowercase())
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Reduce a token to its stem.
pub fn stem(token: &str) -> String {
    ENGLISH_STEMMER.stem(token).into_owned()
}

/// Lower-case, tokenize and stem.
pub fn stems(text: &str) -> Vec<String> {
    tokenize(&text.to_lowercase())
        .into_iter()
        .map(stem)
        .collect()
}

/// Split on sentence terminators, dropping fragments that are blank.
///
/// Fragments are returned untrimmed.
pub fn sentences(text: &str) -> Vec<&str> {
    text.split(SENTENCE_TERMINATORS)
        .filter(|s| !s.trim().is_empty())
        .collect()
}

/// Group whitespace-separated words into chunks of `size` words.
///
/// Chunks keep the original casing; words inside a chunk are joined by a
/// single space. A `size` of zero is treated as one.
pub fn chunk_words(text: &str, size: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    words.chunks(size.max(1)).map(|c| c.join(" ")).collect()
}

/// Vowel-group syllable estimate for a single word.
///
/// Counts entries into runs of `aeiouy`, subtracts one for a trailing `e`,
/// and floors at one. An empty word has zero syllables.
pub fn count_syllables(word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }
    let lower = word.to_lowercase();
    let mut count = 0usize;
    let mut previous_was_vowel = false;
    for c in lower.chars() {
        let is_vowel = VOWELS.contains(c);
        if is_vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = is_vowel;
    }
    if lower.ends_with('e') {
        count = count.saturating_sub(1);
    }
    count.max(1)
}

/// Total syllables over whitespace-separated words (punctuation included).
pub fn count_text_syllables(text: &str) -> usize {
    text.split_whitespace().map(count_syllables).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_basic() {
        let tokens = tokenize("fn hello_world() { let x = 42; }");
        assert_eq!(tokens, vec!["fn", "hello_world", "let", "x", "42"]);
    }

    #[test]
    fn tokenize_splits_apostrophes() {
        assert_eq!(tokenize("don't stop"), vec!["don", "t", "stop"]);
    }

    #[test]
    fn tokenize_keeps_unicode_letters() {
        assert_eq!(tokenize("café naïve"), vec!["café", "naïve"]);
    }

    #[test]
    fn normalize_strips_bold_and_whitespace() {
        assert_eq!(normalize("  **Bold**\n\n text\t here "), "Bold text here");
    }

    #[test]
    fn normalize_leaves_unbalanced_markup() {
        assert_eq!(normalize("**open only"), "**open only");
    }

    #[test]
    fn syllables_of_common_words() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("table"), 1);
        assert_eq!(count_syllables("reading"), 2);
        assert_eq!(count_syllables("the"), 1);
        assert_eq!(count_syllables("rhythm"), 1);
        assert_eq!(count_syllables(""), 0);
    }

    #[test]
    fn sentences_drop_blank_fragments() {
        let s = sentences("One. Two!! Three?  ");
        assert_eq!(s, vec!["One", " Two", " Three"]);
    }
}
