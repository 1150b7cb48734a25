//! Sentence-level capitalization and spacing checks.

use peerlens_math::penalty_score;
use peerlens_tokenize::sentences;
use peerlens_types::GrammarReport;

const CAPITALIZE_HINT: &str = "Start each sentence with a capital letter";
const SPACING_HINT: &str = "Use a single space between words";

fn starts_lowercase(sentence: &str) -> bool {
    let Some(first) = sentence.chars().next() else {
        return false;
    };
    !first.to_uppercase().eq(std::iter::once(first))
}

pub fn analyze_grammar(text: &str) -> GrammarReport {
    let mut issues = Vec::new();
    let mut saw_capitalization = false;
    let mut saw_spacing = false;

    for (index, sentence) in sentences(text).into_iter().enumerate() {
        let n = index + 1;
        let trimmed = sentence.trim();
        if starts_lowercase(trimmed) {
            issues.push(format!("Sentence {n}: Should start with capital letter"));
            saw_capitalization = true;
        }
        if trimmed.contains("  ") {
            issues.push(format!("Sentence {n}: Contains double spaces"));
            saw_spacing = true;
        }
    }

    let mut suggestions = Vec::new();
    if saw_capitalization {
        suggestions.push(CAPITALIZE_HINT.to_string());
    }
    if saw_spacing {
        suggestions.push(SPACING_HINT.to_string());
    }

    GrammarReport {
        score: penalty_score(issues.len() * 10),
        issues,
        suggestions,
    }
}
