//! Commented-out code, TODO markers and leftover debug output.

use peerlens_math::penalty_score;
use peerlens_types::CodeQuality;

use crate::Language;

const ISSUE_PENALTY: usize = 5;
const SUGGESTION_PENALTY: usize = 2;

pub fn analyze_code_quality(code: &str, language: Language) -> CodeQuality {
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();

    for (index, line) in code.split('\n').enumerate() {
        let n = index + 1;
        let trimmed = line.trim();

        if language.is_line_comment(trimmed) && trimmed.chars().count() > 2 {
            suggestions.push(format!("Line {n}: Consider removing commented code"));
        }
        if trimmed.to_lowercase().contains("todo") {
            issues.push(format!("Line {n}: TODO comment found"));
        }
        if let Some(call) = language.debug_calls().iter().find(|c| c.matches(trimmed)) {
            suggestions.push(format!("Line {n}: Remove {} statements", call.name));
        }
    }

    CodeQuality {
        score: penalty_score(issues.len() * ISSUE_PENALTY + suggestions.len() * SUGGESTION_PENALTY),
        issues,
        suggestions,
    }
}
