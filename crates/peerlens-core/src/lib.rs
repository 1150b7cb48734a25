//! # peerlens-core
//!
//! **Tier 4 (Façade)**
//!
//! This crate is the **primary library interface** for `peerlens`. It routes
//! content to the text and code analyzers by declared kind, runs the
//! similarity scan when a corpus is supplied, and bundles feedback.
//!
//! If you are embedding `peerlens` into another Rust application, depend on
//! this crate and `peerlens-types`. Language bindings should use
//! [`ffi::run_json`].
//!
//! ## Example
//!
//! ```rust
//! use peerlens_core::{analyze_submission, types::{ContentKind, DocumentRef}};
//!
//! let corpus = vec![DocumentRef::new("d1", "Earlier essay", "Ada", "Rust makes systems programming safe.")];
//! let result = analyze_submission(
//!     "Rust makes systems programming safe and fast.",
//!     ContentKind::Text,
//!     None,
//!     Some(&corpus),
//! );
//! assert!(result.feedback.is_some());
//! assert!(result.plagiarism.is_some_and(|p| p.score > 0));
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod ffi;

pub use peerlens_settings as settings;
pub use peerlens_types as types;

use peerlens_code::Language;
use peerlens_settings::{EngineSettings, SimilaritySettings};
use peerlens_types::{
    BatchItem, BatchResult, ContentAnalysis, ContentKind, DocumentRef, FeedbackReport,
    PlagiarismReport, SubmissionAnalysis, TextMetrics,
};

/// Analyze `content` with the analyzers its `kind` calls for.
///
/// `language` only matters for code; unknown names fall back to generic
/// comment and debug-call rules.
pub fn analyze_content(
    content: &str,
    kind: ContentKind,
    language: Option<&str>,
) -> ContentAnalysis {
    analyze_content_with(content, kind, language, &EngineSettings::default())
}

#[tracing::instrument(skip_all, fields(kind = %kind))]
pub fn analyze_content_with(
    content: &str,
    kind: ContentKind,
    language: Option<&str>,
    settings: &EngineSettings,
) -> ContentAnalysis {
    let text = kind
        .includes_text()
        .then(|| peerlens_text::analyze_text_with(content, &settings.text));
    let code = kind.includes_code().then(|| {
        let language = Language::resolve(language, &settings.code.default_language);
        peerlens_code::analyze_code_with(content, language, &settings.code)
    });
    ContentAnalysis { text, code }
}

/// Scan `corpus` for documents similar to `content` using default settings.
pub fn detect_similarity(content: &str, corpus: &[DocumentRef]) -> PlagiarismReport {
    detect_similarity_with(content, corpus, &SimilaritySettings::default())
}

pub fn detect_similarity_with(
    content: &str,
    corpus: &[DocumentRef],
    settings: &SimilaritySettings,
) -> PlagiarismReport {
    peerlens_similarity::detect_similarity(content, corpus, settings)
}

pub fn synthesize_feedback(metrics: &TextMetrics) -> FeedbackReport {
    peerlens_feedback::synthesize(metrics)
}

/// Comprehensive analysis of one submission.
///
/// Feedback is produced whenever text metrics exist. The similarity scan
/// runs only when a corpus is given, and only against documents whose kind
/// is comparable with `kind`.
pub fn analyze_submission(
    content: &str,
    kind: ContentKind,
    language: Option<&str>,
    corpus: Option<&[DocumentRef]>,
) -> SubmissionAnalysis {
    analyze_submission_with(content, kind, language, corpus, &EngineSettings::default())
}

pub fn analyze_submission_with(
    content: &str,
    kind: ContentKind,
    language: Option<&str>,
    corpus: Option<&[DocumentRef]>,
    settings: &EngineSettings,
) -> SubmissionAnalysis {
    let analysis = analyze_content_with(content, kind, language, settings);
    let feedback = analysis.text.as_ref().map(synthesize_feedback);
    let plagiarism = corpus.map(|docs| {
        let selected = peerlens_similarity::select_corpus(kind, docs.to_vec());
        tracing::debug!(
            supplied = docs.len(),
            selected = selected.len(),
            "narrowed corpus by kind"
        );
        detect_similarity_with(content, &selected, &settings.similarity)
    });

    SubmissionAnalysis {
        complexity_score: analysis.primary_complexity_score(),
        analysis,
        plagiarism,
        feedback,
    }
}

/// Analyze each item independently, in input order.
pub fn analyze_batch(items: &[BatchItem]) -> Vec<BatchResult> {
    analyze_batch_with(items, &EngineSettings::default())
}

#[tracing::instrument(skip_all, fields(items = items.len()))]
pub fn analyze_batch_with(items: &[BatchItem], settings: &EngineSettings) -> Vec<BatchResult> {
    items
        .iter()
        .map(|item| BatchResult {
            document_id: item.id.clone(),
            title: item.title.clone(),
            analysis: analyze_content_with(
                &item.content,
                item.kind,
                item.language.as_deref(),
                settings,
            ),
        })
        .collect()
}
