//! # peerlens-text
//!
//! **Tier 2 (Analyzer)**
//!
//! Explainable prose metrics. Each analyzer is a pure function of the input
//! text; [`analyze_text`] runs all six.
//!
//! ## What belongs here
//! * Sentiment (AFINN lexicon with negation)
//! * Flesch readability, lexical complexity, grammar heuristics
//! * Keyword frequency and best-effort entity recognition
//!
//! ## What does NOT belong here
//! * Similarity scoring (use peerlens-similarity)
//! * Feedback rules (use peerlens-feedback)

#![forbid(unsafe_code)]

mod complexity;
mod entities;
mod grammar;
mod keywords;
mod lexicon;
mod readability;
mod sentiment;

use peerlens_settings::TextSettings;
use peerlens_types::TextMetrics;

pub use complexity::analyze_complexity;
pub use entities::extract_entities;
pub use grammar::analyze_grammar;
pub use keywords::extract_keywords;
pub use readability::analyze_readability;
pub use sentiment::analyze_sentiment;

/// Run every prose analyzer with default settings.
pub fn analyze_text(text: &str) -> TextMetrics {
    analyze_text_with(text, &TextSettings::default())
}

#[tracing::instrument(skip_all, fields(chars = text.len()))]
pub fn analyze_text_with(text: &str, settings: &TextSettings) -> TextMetrics {
    let metrics = TextMetrics {
        sentiment: analyze_sentiment(text),
        readability: analyze_readability(text),
        complexity: analyze_complexity(text),
        grammar: analyze_grammar(text),
        keywords: extract_keywords(text, settings),
        entities: extract_entities(text),
    };
    tracing::debug!(
        sentiment = metrics.sentiment.score,
        readability = metrics.readability.score,
        complexity = metrics.complexity.score,
        keywords = metrics.keywords.len(),
        "analyzed text"
    );
    metrics
}
