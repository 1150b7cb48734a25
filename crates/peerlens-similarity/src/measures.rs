//! Component similarity measures over token sequences.

use peerlens_math::{finite_or_zero, ratio};
use peerlens_settings::SimilarityWeights;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// The three component measures and their weighted blend.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityBreakdown {
    pub jaccard: f64,
    pub sequence: f64,
    pub overlap: f64,
    pub composite: f64,
}

/// Adjacent token pairs, in order, duplicates kept.
pub fn bigrams<S: AsRef<str>>(tokens: &[S]) -> Vec<(&str, &str)> {
    tokens
        .windows(2)
        .map(|w| (w[0].as_ref(), w[1].as_ref()))
        .collect()
}

fn token_set<S: AsRef<str>>(tokens: &[S]) -> FxHashSet<&str> {
    tokens.iter().map(|t| t.as_ref()).collect()
}

/// Share of `a`'s bigrams that occur anywhere in `b`, over the larger bigram count.
///
/// Not symmetric when one side repeats bigrams.
fn sequence_similarity<S: AsRef<str>>(a: &[S], b: &[S]) -> f64 {
    let grams_a = bigrams(a);
    let grams_b = bigrams(b);
    if grams_a.is_empty() && grams_b.is_empty() {
        return 0.0;
    }
    let lookup: FxHashSet<(&str, &str)> = grams_b.iter().copied().collect();
    let shared = grams_a.iter().filter(|g| lookup.contains(*g)).count();
    ratio(shared, grams_a.len().max(grams_b.len()).max(1))
}

/// Compare two token sequences and report every component.
pub fn compare_documents<S: AsRef<str>>(
    a: &[S],
    b: &[S],
    weights: &SimilarityWeights,
) -> SimilarityBreakdown {
    let set_a = token_set(a);
    let set_b = token_set(b);
    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.len() + set_b.len() - intersection;

    let jaccard = ratio(intersection, union);
    let sequence = sequence_similarity(a, b);
    // Normalized by the shorter side so a short excerpt of a long source still scores.
    let overlap = if a.is_empty() || b.is_empty() {
        0.0
    } else {
        ratio(intersection, a.len().min(b.len()))
    };
    // Weights are relative: the blend is divided by their total so it stays in 0..=1.
    let total = weights.total();
    let composite = if total > 0.0 {
        finite_or_zero(
            (weights.jaccard * jaccard + weights.sequence * sequence + weights.overlap * overlap)
                / total,
        )
    } else {
        0.0
    };

    SimilarityBreakdown {
        jaccard,
        sequence,
        overlap,
        composite,
    }
}

/// Weighted composite similarity of two token sequences.
pub fn composite_similarity<S: AsRef<str>>(a: &[S], b: &[S], weights: &SimilarityWeights) -> f64 {
    compare_documents(a, b, weights).composite
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_bigrams_count_on_the_left_side() {
        let a = ["x", "y", "x", "y"];
        let b = ["x", "y"];
        // a has 3 bigrams (xy, yx, xy); two of them are in b.
        assert!((sequence_similarity(&a, &b) - 2.0 / 3.0).abs() < 1e-12);
        assert!((sequence_similarity(&b, &a) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn zero_weights_blend_to_zero() {
        let zero = SimilarityWeights {
            jaccard: 0.0,
            sequence: 0.0,
            overlap: 0.0,
        };
        assert_eq!(compare_documents(&["a", "b"], &["a", "b"], &zero).composite, 0.0);
    }

    #[test]
    fn single_tokens_have_no_bigrams() {
        assert_eq!(sequence_similarity(&["a"], &["a"]), 0.0);
    }
}
