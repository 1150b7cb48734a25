//! Line counts and comment density.

use peerlens_math::{ratio, safe_ratio};
use peerlens_types::LineMetrics;

use crate::Language;

/// Size and comment-density counts over `\n`-separated lines.
pub fn line_metrics(code: &str, language: Language) -> LineMetrics {
    let lines: Vec<&str> = code.split('\n').collect();
    let total_lines = lines.len();

    let non_empty_lines = lines.iter().filter(|l| !l.trim().is_empty()).count();
    let comment_lines = lines
        .iter()
        .map(|l| l.trim())
        .filter(|t| language.is_line_comment(t) || t.starts_with("/*"))
        .count();
    let character_count = code.chars().count();

    LineMetrics {
        total_lines,
        non_empty_lines,
        comment_lines,
        comment_ratio: safe_ratio(comment_lines, total_lines, 2),
        word_count: code.split_whitespace().count(),
        character_count,
        avg_line_length: ratio(character_count, total_lines).round() as usize,
    }
}
