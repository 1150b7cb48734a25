//! Lexical complexity: diversity, word length and sentence length.

use peerlens_math::{ratio, round_f64};
use peerlens_tokenize::{sentences, tokenize};
use peerlens_types::{ComplexityLevel, TextComplexity};
use rustc_hash::FxHashSet;

pub fn analyze_complexity(text: &str) -> TextComplexity {
    let lower = text.to_lowercase();
    let words = tokenize(&lower);
    let total = words.len();
    let unique: FxHashSet<&str> = words.iter().copied().collect();

    let lexical_diversity = ratio(unique.len(), total);
    let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
    let avg_word_length = ratio(total_chars, total);
    let avg_words_per_sentence = ratio(total, sentences(text).len().max(1));

    // Level is decided on unrounded ratios.
    let level = if lexical_diversity > 0.7 && avg_word_length > 5.0 {
        ComplexityLevel::High
    } else if lexical_diversity > 0.5 && avg_word_length > 4.0 {
        ComplexityLevel::Medium
    } else {
        ComplexityLevel::Low
    };

    TextComplexity {
        score: (lexical_diversity * 100.0).round() as u32,
        level,
        lexical_diversity: round_f64(lexical_diversity, 2),
        avg_word_length: round_f64(avg_word_length, 2),
        avg_words_per_sentence: round_f64(avg_words_per_sentence, 2),
    }
}
