//! Fuzz target for the prose analyzers.
//!
//! Every metric must stay finite and complexity must stay in 0..=100,
//! whatever the input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use peerlens_text::analyze_text;

const MAX_INPUT_SIZE: usize = 16 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let m = analyze_text(input);
    assert!(m.sentiment.comparative.is_finite());
    assert!(m.readability.avg_words_per_sentence.is_finite());
    assert!(m.complexity.score <= 100);
    assert!(m.complexity.lexical_diversity.is_finite());
    assert!(m.grammar.score <= 100);
});
