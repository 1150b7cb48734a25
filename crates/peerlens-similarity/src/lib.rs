//! # peerlens-similarity
//!
//! **Tier 2 (Analyzer)**
//!
//! Plagiarism scan of a candidate text against a corpus of prior submissions:
//! 1. Normalize and stem the candidate (empty or token-free input is rejected
//!    with an `error` marker, never a panic)
//! 2. Normalize each corpus entry; skip empty entries and entries whose
//!    normalized content equals the candidate's (self-match)
//! 3. Blend Jaccard, bigram sequence and overlap coefficient into a
//!    composite similarity
//! 4. Report entries above the match threshold, localize shared passages
//!    by chunk, and rank highest similarity first
//!
//! ## What belongs here
//! * Similarity measures and the corpus scan
//! * Corpus narrowing by content kind
//!
//! ## What does NOT belong here
//! * Loading or storing the corpus
//! * Text or code metrics

#![forbid(unsafe_code)]

mod measures;
mod spans;

use peerlens_math::{finite_or_zero, round_f64};
use peerlens_settings::SimilaritySettings;
use peerlens_tokenize::{normalize, stems};
use peerlens_types::{ContentKind, DocumentRef, PlagiarismReport, SimilarityMatch};

pub use measures::{SimilarityBreakdown, bigrams, compare_documents, composite_similarity};
pub use spans::find_matching_text;

/// Error marker for a candidate that is empty after normalization.
pub const INVALID_TEXT: &str = "Invalid text provided";
/// Error marker for a candidate with no word tokens.
pub const NO_VALID_CONTENT: &str = "No valid text content";

/// Scan `corpus` for documents similar to `candidate`.
#[tracing::instrument(skip_all, fields(corpus = corpus.len()))]
pub fn detect_similarity(
    candidate: &str,
    corpus: &[DocumentRef],
    settings: &SimilaritySettings,
) -> PlagiarismReport {
    let clean = normalize(candidate);
    if clean.is_empty() {
        tracing::warn!("candidate is empty after normalization");
        return PlagiarismReport::rejected(INVALID_TEXT, 0);
    }

    let candidate_stems = stems(&clean);
    if candidate_stems.is_empty() {
        tracing::warn!("candidate has no word tokens");
        return PlagiarismReport::rejected(NO_VALID_CONTENT, corpus.len());
    }
    tracing::debug!(tokens = candidate_stems.len(), "candidate stemmed");

    let mut sources = Vec::new();
    for doc in corpus {
        let doc_clean = normalize(doc.content_str());
        if doc_clean.is_empty() {
            tracing::debug!(id = %doc.id, "skipping document without content");
            continue;
        }
        if doc_clean == clean {
            tracing::debug!(id = %doc.id, "skipping self-match");
            continue;
        }
        let doc_stems = stems(&doc_clean);
        if doc_stems.is_empty() {
            tracing::debug!(id = %doc.id, "skipping document without tokens");
            continue;
        }

        let breakdown = compare_documents(&candidate_stems, &doc_stems, &settings.weights);
        tracing::debug!(
            id = %doc.id,
            jaccard = breakdown.jaccard,
            sequence = breakdown.sequence,
            overlap = breakdown.overlap,
            composite = breakdown.composite,
            "compared document"
        );

        if breakdown.composite > settings.match_threshold {
            sources.push(SimilarityMatch {
                document_id: doc.id.clone(),
                title: doc.title.clone(),
                author: doc.author.clone(),
                similarity: round_f64(breakdown.composite, 2),
                matching_spans: find_matching_text(candidate, doc.content_str(), settings),
            });
        }
    }

    // Stable: equal similarities keep corpus order.
    sources.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

    let best = sources.first().map_or(0.0, |s| s.similarity);
    let score = finite_or_zero(best * 100.0).round().clamp(0.0, 100.0) as u32;

    let report = PlagiarismReport {
        score,
        total_sources: corpus.len(),
        checked_sources: corpus.iter().filter(|d| d.has_content()).count(),
        sources,
        error: None,
    };
    tracing::debug!(
        score = report.score,
        matches = report.sources.len(),
        checked = report.checked_sources,
        "similarity scan finished"
    );
    report
}

/// Keep documents comparable with a candidate of `kind`.
///
/// A document qualifies when its kind matches, when it is `mixed`, or when
/// it carries no kind at all. A `mixed` candidate therefore only meets
/// `mixed` and unkinded documents.
pub fn select_corpus(kind: ContentKind, docs: Vec<DocumentRef>) -> Vec<DocumentRef> {
    docs.into_iter()
        .filter(|d| match d.kind {
            None | Some(ContentKind::Mixed) => true,
            Some(k) => k == kind,
        })
        .collect()
}
