//! Indentation and trailing-whitespace checks.

use peerlens_math::penalty_score;
use peerlens_types::CodeStyle;

/// A single leading space that is not followed by another space.
fn odd_indent(line: &str) -> bool {
    let mut chars = line.chars();
    chars.next() == Some(' ') && chars.next() != Some(' ')
}

pub fn analyze_code_style(code: &str) -> CodeStyle {
    let mut issues = Vec::new();

    for (index, line) in code.split('\n').enumerate() {
        let n = index + 1;
        if odd_indent(line) {
            issues.push(format!("Line {n}: Inconsistent indentation"));
        }
        if line.ends_with([' ', '\t']) {
            issues.push(format!("Line {n}: Trailing whitespace"));
        }
    }

    CodeStyle {
        score: penalty_score(issues.len() * 5),
        issues,
    }
}
