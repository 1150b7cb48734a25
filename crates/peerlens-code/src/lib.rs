//! # peerlens-code
//!
//! **Tier 2 (Analyzer)**
//!
//! Line-oriented heuristics for source-code submissions. Lines are the
//! `\n`-separated pieces of the input, so empty input is a single empty line.
//!
//! ## What belongs here
//! * Control-flow complexity, nesting and line-length checks
//! * Quality hints (commented code, TODOs, debug output)
//! * Style checks and size metrics
//! * Language aliases, comment markers and debug-call tables
//!
//! ## What does NOT belong here
//! * Parsing or AST work
//! * Prose metrics (use peerlens-text)

#![forbid(unsafe_code)]

mod complexity;
mod language;
mod metrics;
mod quality;
mod style;

use peerlens_settings::CodeSettings;
use peerlens_types::CodeMetrics;

pub use complexity::analyze_code_complexity;
pub use language::{CallMatch, DebugCall, Language};
pub use metrics::line_metrics;
pub use quality::analyze_code_quality;
pub use style::analyze_code_style;

/// Analyze code with default limits.
pub fn analyze_code(code: &str, language: Language) -> CodeMetrics {
    analyze_code_with(code, language, &CodeSettings::default())
}

#[tracing::instrument(skip_all, fields(language = %language, lines = code.split('\n').count()))]
pub fn analyze_code_with(code: &str, language: Language, settings: &CodeSettings) -> CodeMetrics {
    CodeMetrics {
        complexity: analyze_code_complexity(code, settings),
        quality: analyze_code_quality(code, language),
        style: analyze_code_style(code),
        metrics: line_metrics(code, language),
    }
}
