//! Frequency-ranked keywords.

use peerlens_settings::{MIN_KEYWORD_LEN, TextSettings};
use peerlens_tokenize::tokenize;
use peerlens_types::Keyword;
use rustc_hash::FxHashMap;

use crate::lexicon::STOP_WORDS;

fn is_candidate(word: &str, min_len: usize) -> bool {
    word.chars().count() >= min_len.max(MIN_KEYWORD_LEN)
        && word.chars().all(|c| c.is_ascii_alphabetic())
        && !STOP_WORDS.contains(word)
}

/// Most frequent non-stop-words, ties broken by first appearance.
pub fn extract_keywords(text: &str, settings: &TextSettings) -> Vec<Keyword> {
    let lower = text.to_lowercase();
    let mut order: Vec<&str> = Vec::new();
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();

    for word in tokenize(&lower) {
        if !is_candidate(word, settings.min_keyword_len) {
            continue;
        }
        let count = counts.entry(word).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }

    let mut keywords: Vec<Keyword> = order
        .into_iter()
        .map(|word| Keyword {
            word: word.to_string(),
            frequency: counts.get(word).copied().unwrap_or(0),
        })
        .collect();
    // Stable sort keeps first-seen order among equal frequencies.
    keywords.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    keywords.truncate(settings.keyword_limit);
    keywords
}
