//! Flesch Reading Ease.

use peerlens_math::{finite_or_zero, ratio, round_f64};
use peerlens_tokenize::{count_text_syllables, sentences, tokenize};
use peerlens_types::{Readability, ReadabilityLevel};

const FLESCH_BASE: f64 = 206.835;
const SENTENCE_LENGTH_WEIGHT: f64 = 1.015;
const SYLLABLE_WEIGHT: f64 = 84.6;

/// Score prose with the Flesch formula.
///
/// Zero sentences or zero words count as one for the ratios, so empty text
/// scores the formula's ceiling rather than `NaN`.
pub fn analyze_readability(text: &str) -> Readability {
    let sentence_count = sentences(text).len().max(1);
    let word_count = tokenize(text).len();
    let syllables = count_text_syllables(text);

    let words_per_sentence = ratio(word_count, sentence_count);
    let syllables_per_word = ratio(syllables, word_count.max(1));

    let flesch = finite_or_zero(
        FLESCH_BASE
            - SENTENCE_LENGTH_WEIGHT * words_per_sentence
            - SYLLABLE_WEIGHT * syllables_per_word,
    );
    let score = flesch.round() as i64;

    Readability {
        score,
        level: ReadabilityLevel::from_score(score),
        avg_words_per_sentence: round_f64(words_per_sentence, 2),
        avg_syllables_per_word: round_f64(syllables_per_word, 2),
    }
}
