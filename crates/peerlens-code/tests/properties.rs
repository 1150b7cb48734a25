//! Property-based tests for the code analyzer.

use peerlens_code::*;
use proptest::prelude::*;

fn any_language() -> impl Strategy<Value = Language> {
    prop::sample::select(vec![
        Language::JavaScript,
        Language::Python,
        Language::Rust,
        Language::Ruby,
        Language::Php,
        Language::Other,
    ])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn scores_stay_in_range(code in "\\PC{0,400}", lang in any_language()) {
        let m = analyze_code(&code, lang);
        prop_assert!(m.quality.score <= 100);
        prop_assert!(m.style.score <= 100);
        prop_assert!((0.0..=1.0).contains(&m.metrics.comment_ratio));
    }

    #[test]
    fn line_counts_are_consistent(lines in prop::collection::vec("[ a-z/#{}();]{0,30}", 1..40)) {
        let code = lines.join("\n");
        let m = line_metrics(&code, Language::JavaScript);
        prop_assert_eq!(m.total_lines, lines.len());
        prop_assert!(m.non_empty_lines <= m.total_lines);
        prop_assert!(m.comment_lines <= m.total_lines);
    }

    #[test]
    fn complexity_is_monotone_in_appended_lines(base in "[a-z(){} ]{0,40}", extra in 0usize..10) {
        let settings = peerlens_settings::CodeSettings::default();
        let before = analyze_code_complexity(&base, &settings).score;
        let code = format!("{base}\n{}", "for (;;) {}\n".repeat(extra));
        let after = analyze_code_complexity(&code, &settings).score;
        prop_assert!(after >= before + 2 * extra as u32);
    }
}
