//! Chunk-level localization of shared passages.

use peerlens_math::round_f64;
use peerlens_settings::SimilaritySettings;
use peerlens_tokenize::{chunk_words, lower_collapse, tokenize};
use peerlens_types::MatchingSpan;

use crate::composite_similarity;

/// Compare every chunk of `source` with every chunk of `target`.
///
/// Chunks are compared on lower-cased, un-stemmed tokens; the returned
/// chunks keep their original text. At most `max_spans` spans are kept,
/// highest similarity first, ties in chunk order.
pub fn find_matching_text(
    source: &str,
    target: &str,
    settings: &SimilaritySettings,
) -> Vec<MatchingSpan> {
    let source_chunks = chunk_words(source, settings.chunk_words);
    let target_chunks = chunk_words(target, settings.chunk_words);

    let target_lower: Vec<String> = target_chunks.iter().map(|c| lower_collapse(c)).collect();
    let target_tokens: Vec<Vec<&str>> = target_lower.iter().map(|l| tokenize(l)).collect();

    let mut spans = Vec::new();
    for source_chunk in &source_chunks {
        let source_lower = lower_collapse(source_chunk);
        let source_tokens = tokenize(&source_lower);
        for (target_chunk, tokens) in target_chunks.iter().zip(&target_tokens) {
            let similarity = composite_similarity(&source_tokens, tokens, &settings.weights);
            if similarity > settings.span_threshold {
                spans.push(MatchingSpan {
                    source_chunk: source_chunk.clone(),
                    target_chunk: target_chunk.clone(),
                    similarity: round_f64(similarity, 2),
                });
            }
        }
    }

    spans.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    spans.truncate(settings.max_spans);
    spans
}
