//! Fuzz target for tokenization, stemming and syllable counting.
//!
//! Validates:
//! - No panics on arbitrary UTF-8
//! - Tokens are non-empty slices free of whitespace
//! - Normalized text is trimmed with single spaces

#![no_main]

use libfuzzer_sys::fuzz_target;
use peerlens_tokenize::{chunk_words, count_text_syllables, normalize, stems, tokenize};

const MAX_INPUT_SIZE: usize = 64 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    for token in tokenize(input) {
        assert!(!token.is_empty());
        assert!(!token.chars().any(char::is_whitespace));
    }

    let clean = normalize(input);
    assert_eq!(clean.trim(), clean);
    assert!(!clean.contains("  "));

    let _ = stems(&clean);
    let _ = count_text_syllables(input);
    for chunk in chunk_words(input, 7) {
        assert!(chunk.split_whitespace().count() <= 7);
    }
});
