//! # peerlens-feedback
//!
//! **Tier 3 (Synthesis)**
//!
//! Turns [`TextMetrics`] into reviewer-facing feedback with a fixed rule
//! table. No I/O and no lexicon lookups; every statement traces back to one
//! metric threshold.

#![forbid(unsafe_code)]

use peerlens_math::mean;
use peerlens_types::{ComplexityLevel, FeedbackReport, TextMetrics};

pub const POSITIVE_TONE: &str = "Positive tone and engagement";
pub const NEGATIVE_TONE: &str = "Negative tone may affect readability";
pub const SOFTEN_TONE: &str = "Consider using more neutral or positive language";
pub const HARD_TO_READ: &str = "Text is difficult to read";
pub const SIMPLIFY: &str = "Simplify sentence structure and use shorter words";
pub const GOOD_READABILITY: &str = "Good readability level";
pub const RICH_VOCABULARY: &str = "Rich vocabulary and complex ideas";
pub const VARY_VOCABULARY: &str = "Consider using more varied vocabulary";

const NEGATIVE_SENTIMENT_LIMIT: i32 = -2;
const DIFFICULT_READABILITY: i64 = 30;
const EASY_READABILITY: i64 = 70;

/// Build feedback from prose metrics.
pub fn synthesize(metrics: &TextMetrics) -> FeedbackReport {
    let mut report = FeedbackReport::default();
    let sentiment = metrics.sentiment.score;
    let readability = metrics.readability.score;

    if sentiment > 0 {
        report.strengths.push(POSITIVE_TONE.to_string());
    } else if sentiment < NEGATIVE_SENTIMENT_LIMIT {
        report.weaknesses.push(NEGATIVE_TONE.to_string());
        report.suggestions.push(SOFTEN_TONE.to_string());
    }

    if readability < DIFFICULT_READABILITY {
        report.weaknesses.push(HARD_TO_READ.to_string());
        report.suggestions.push(SIMPLIFY.to_string());
    } else if readability > EASY_READABILITY {
        report.strengths.push(GOOD_READABILITY.to_string());
    }

    match metrics.complexity.level {
        ComplexityLevel::High => report.strengths.push(RICH_VOCABULARY.to_string()),
        ComplexityLevel::Low => report.suggestions.push(VARY_VOCABULARY.to_string()),
        ComplexityLevel::Medium => {}
    }

    let tone = if sentiment > 0 { 80.0 } else { 60.0 };
    report.overall_score = mean(&[
        tone,
        readability as f64,
        f64::from(metrics.complexity.score),
    ])
    .round() as i64;

    report
}
