//! Property-based tests for peerlens-settings.

use peerlens_settings::*;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn toml_round_trip_preserves_settings(
        jaccard in 0.0f64..1.0,
        sequence in 0.01f64..1.0,
        overlap in 0.0f64..1.0,
        match_threshold in 0.0f64..1.0,
        chunk_words in 1usize..100,
        keyword_limit in 0usize..50,
    ) {
        let mut settings = EngineSettings::default();
        settings.similarity.weights = SimilarityWeights { jaccard, sequence, overlap };
        settings.similarity.match_threshold = match_threshold;
        settings.similarity.chunk_words = chunk_words;
        settings.text.keyword_limit = keyword_limit;

        let text = toml::to_string(&settings).expect("serialize");
        let back = EngineSettings::from_toml_str(&text).expect("parse");
        prop_assert_eq!(back, settings);
    }

    #[test]
    fn validation_accepts_any_in_range_thresholds(
        match_threshold in 0.0f64..=1.0,
        span_threshold in 0.0f64..=1.0,
    ) {
        let settings = SimilaritySettings {
            match_threshold,
            span_threshold,
            ..Default::default()
        };
        prop_assert!(settings.validate().is_ok());
    }
}
