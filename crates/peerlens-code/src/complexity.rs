//! Control-flow keyword weighting plus nesting and line-length checks.

use peerlens_settings::CodeSettings;
use peerlens_types::{CodeComplexity, ComplexityLevel};

/// Keyword groups and their weight. A group counts once per line.
const KEYWORD_WEIGHTS: &[(&[&str], u32)] = &[
    (&["if", "else"], 1),
    (&["for", "while"], 2),
    (&["switch", "case"], 2),
    (&["try", "catch"], 1),
];

const MEDIUM_THRESHOLD: u32 = 10;
const HIGH_THRESHOLD: u32 = 20;

/// Weight contributed by one trimmed line. Matching is a plain substring test,
/// so `format` counts as `for`.
fn line_weight(trimmed: &str) -> u32 {
    KEYWORD_WEIGHTS
        .iter()
        .filter(|(words, _)| words.iter().any(|w| trimmed.contains(w)))
        .map(|(_, weight)| weight)
        .sum()
}

fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

pub fn level_for(score: u32) -> ComplexityLevel {
    if score > HIGH_THRESHOLD {
        ComplexityLevel::High
    } else if score > MEDIUM_THRESHOLD {
        ComplexityLevel::Medium
    } else {
        ComplexityLevel::Low
    }
}

pub fn analyze_code_complexity(code: &str, settings: &CodeSettings) -> CodeComplexity {
    let mut score = 0u32;
    let mut issues = Vec::new();

    for (index, line) in code.split('\n').enumerate() {
        let n = index + 1;
        score += line_weight(line.trim());

        if indent_width(line) > settings.max_indent {
            issues.push(format!("Line {n}: Deep nesting detected"));
        }
        let length = line.chars().count();
        if length > settings.max_line_length {
            issues.push(format!("Line {n}: Line too long ({length} characters)"));
        }
    }

    CodeComplexity {
        score,
        level: level_for(score),
        issues,
    }
}
