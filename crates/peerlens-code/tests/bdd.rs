//! BDD-style scenarios for the code analyzer.

use peerlens_code::*;
use peerlens_settings::CodeSettings;
use peerlens_types::ComplexityLevel;

const SNIPPET: &str = "function f() {\n  // old code here\n  console.log('x'); // TODO remove\n}\n";

// ── Complexity ───────────────────────────────────────────────────

mod complexity {
    use super::*;

    #[test]
    fn given_fifteen_if_lines_then_medium() {
        let code = "if (x) { y(); }\n".repeat(15);
        let c = analyze_code_complexity(&code, &CodeSettings::default());
        assert_eq!(c.score, 15);
        assert_eq!(c.level, ComplexityLevel::Medium);
    }

    #[test]
    fn given_fifteen_mixed_if_and_for_lines_then_high() {
        let code: String = (0..15)
            .map(|i| if i % 2 == 0 { "if (a) b();\n" } else { "for (;;) b();\n" })
            .collect();
        let c = analyze_code_complexity(&code, &CodeSettings::default());
        assert_eq!(c.score, 22);
        assert_eq!(c.level, ComplexityLevel::High);
    }

    #[test]
    fn given_same_input_twice_then_same_level() {
        let code = "while (x) {}\n".repeat(15);
        let a = analyze_code_complexity(&code, &CodeSettings::default());
        let b = analyze_code_complexity(&code, &CodeSettings::default());
        assert_eq!(a, b);
    }

    #[test]
    fn given_deep_indent_and_long_line_then_issues_name_the_line() {
        let code = format!("         deep();\n{}", "a".repeat(121));
        let c = analyze_code_complexity(&code, &CodeSettings::default());
        assert_eq!(
            c.issues,
            vec![
                "Line 1: Deep nesting detected",
                "Line 2: Line too long (121 characters)",
            ]
        );
    }

    #[test]
    fn given_tighter_limits_then_more_issues() {
        let settings = CodeSettings {
            max_indent: 2,
            max_line_length: 10,
            ..Default::default()
        };
        let c = analyze_code_complexity("    short();", &settings);
        assert_eq!(c.issues.len(), 2);
    }
}

// ── Quality ──────────────────────────────────────────────────────

mod quality {
    use super::*;

    #[test]
    fn given_javascript_snippet_then_comment_todo_and_console_are_flagged() {
        let q = analyze_code_quality(SNIPPET, Language::JavaScript);
        assert_eq!(q.issues, vec!["Line 3: TODO comment found"]);
        assert_eq!(
            q.suggestions,
            vec![
                "Line 2: Consider removing commented code",
                "Line 3: Remove console.log statements",
            ]
        );
        assert_eq!(q.score, 91);
    }

    #[test]
    fn given_python_then_hash_comments_and_print_are_flagged() {
        let q = analyze_code_quality("# print('debug')\nprint('hi')", Language::Python);
        assert_eq!(
            q.suggestions,
            vec![
                "Line 1: Consider removing commented code",
                "Line 1: Remove print statements",
                "Line 2: Remove print statements",
            ]
        );
        assert_eq!(q.score, 94);
    }

    #[test]
    fn given_bare_comment_marker_then_not_flagged() {
        let q = analyze_code_quality("//\nlet x = 1;", Language::Rust);
        assert!(q.suggestions.is_empty());
        assert_eq!(q.score, 100);
    }

    #[test]
    fn given_many_todos_then_score_floors_at_zero() {
        let code = "// todo\n".repeat(30);
        let q = analyze_code_quality(&code, Language::JavaScript);
        assert_eq!(q.score, 0);
    }
}

// ── Style ────────────────────────────────────────────────────────

mod style {
    use super::*;

    #[test]
    fn given_single_space_indent_and_trailing_space_then_two_issues() {
        let s = analyze_code_style(" x\ny \n");
        assert_eq!(
            s.issues,
            vec!["Line 1: Inconsistent indentation", "Line 2: Trailing whitespace"]
        );
        assert_eq!(s.score, 90);
    }

    #[test]
    fn given_trailing_tab_then_flagged() {
        let s = analyze_code_style("x\t");
        assert_eq!(s.issues, vec!["Line 1: Trailing whitespace"]);
    }

    #[test]
    fn given_clean_code_then_perfect_score() {
        assert_eq!(analyze_code_style(SNIPPET).score, 100);
    }
}

// ── Metrics ──────────────────────────────────────────────────────

mod metrics {
    use super::*;

    #[test]
    fn given_snippet_then_counts_match() {
        let m = line_metrics(SNIPPET, Language::JavaScript);
        assert_eq!(m.total_lines, 5);
        assert_eq!(m.non_empty_lines, 4);
        assert_eq!(m.comment_lines, 1);
        assert_eq!(m.comment_ratio, 0.2);
        assert_eq!(m.word_count, 12);
        assert_eq!(m.character_count, 71);
        assert_eq!(m.avg_line_length, 14);
    }

    #[test]
    fn given_empty_code_then_one_empty_line() {
        let m = line_metrics("", Language::JavaScript);
        assert_eq!(m.total_lines, 1);
        assert_eq!(m.non_empty_lines, 0);
        assert_eq!(m.comment_ratio, 0.0);
        assert_eq!(m.avg_line_length, 0);
    }

    #[test]
    fn given_block_comment_then_counted_for_any_language() {
        let m = line_metrics("/* header */\nx = 1", Language::Python);
        assert_eq!(m.comment_lines, 1);
    }
}

// ── Full analysis ────────────────────────────────────────────────

mod full_analysis {
    use super::*;

    #[test]
    fn given_snippet_then_sections_match_individual_passes() {
        let m = analyze_code(SNIPPET, Language::JavaScript);
        assert_eq!(m.complexity.level, ComplexityLevel::Low);
        assert_eq!(m.quality, analyze_code_quality(SNIPPET, Language::JavaScript));
        assert_eq!(m.style, analyze_code_style(SNIPPET));
        assert_eq!(m.metrics, line_metrics(SNIPPET, Language::JavaScript));
    }

    #[test]
    fn given_language_alias_then_resolved() {
        let lang = Language::resolve(Some("py"), "javascript");
        let m = analyze_code("print(1)", lang);
        assert_eq!(m.quality.suggestions, vec!["Line 1: Remove print statements"]);
    }
}
