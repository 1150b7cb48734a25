//! BDD-style scenarios for feedback synthesis.

use peerlens_feedback::*;
use peerlens_types::*;

fn metrics(sentiment: i32, readability: i64, level: ComplexityLevel, complexity: u32) -> TextMetrics {
    TextMetrics {
        sentiment: Sentiment {
            score: sentiment,
            magnitude: sentiment.unsigned_abs(),
            label: SentimentLabel::Neutral,
            comparative: 0.0,
        },
        readability: Readability {
            score: readability,
            level: ReadabilityLevel::from_score(readability),
            avg_words_per_sentence: 0.0,
            avg_syllables_per_word: 0.0,
        },
        complexity: TextComplexity {
            score: complexity,
            level,
            lexical_diversity: 0.0,
            avg_word_length: 0.0,
            avg_words_per_sentence: 0.0,
        },
        grammar: GrammarReport::default(),
        keywords: Vec::new(),
        entities: Entities::default(),
    }
}

// ── Tone ─────────────────────────────────────────────────────────

mod tone {
    use super::*;

    #[test]
    fn given_positive_sentiment_then_strength_and_tone_80() {
        let f = synthesize(&metrics(3, 50, ComplexityLevel::Medium, 70));
        assert_eq!(f.strengths, vec![POSITIVE_TONE]);
        assert!(f.weaknesses.is_empty());
        assert_eq!(f.overall_score, 67);
    }

    #[test]
    fn given_strongly_negative_sentiment_then_weakness_and_suggestion() {
        let f = synthesize(&metrics(-3, 50, ComplexityLevel::Medium, 70));
        assert_eq!(f.weaknesses, vec![NEGATIVE_TONE]);
        assert_eq!(f.suggestions, vec![SOFTEN_TONE]);
        assert_eq!(f.overall_score, 60);
    }

    #[test]
    fn given_mildly_negative_sentiment_then_no_tone_feedback() {
        let f = synthesize(&metrics(-2, 50, ComplexityLevel::Medium, 70));
        assert!(f.strengths.is_empty());
        assert!(f.weaknesses.is_empty());
        assert!(f.suggestions.is_empty());
    }
}

// ── Readability ──────────────────────────────────────────────────

mod readability {
    use super::*;

    #[test]
    fn given_difficult_text_then_simplify() {
        let f = synthesize(&metrics(0, 20, ComplexityLevel::Medium, 50));
        assert_eq!(f.weaknesses, vec![HARD_TO_READ]);
        assert_eq!(f.suggestions, vec![SIMPLIFY]);
    }

    #[test]
    fn given_easy_text_then_strength() {
        let f = synthesize(&metrics(0, 80, ComplexityLevel::Medium, 50));
        assert_eq!(f.strengths, vec![GOOD_READABILITY]);
    }

    #[test]
    fn given_boundaries_30_and_70_then_silent() {
        for score in [30, 70] {
            let f = synthesize(&metrics(0, score, ComplexityLevel::Medium, 50));
            assert!(f.strengths.is_empty() && f.weaknesses.is_empty(), "score {score}");
        }
    }
}

// ── Vocabulary ───────────────────────────────────────────────────

mod vocabulary {
    use super::*;

    #[test]
    fn given_high_complexity_then_rich_vocabulary() {
        let f = synthesize(&metrics(0, 50, ComplexityLevel::High, 90));
        assert_eq!(f.strengths, vec![RICH_VOCABULARY]);
    }

    #[test]
    fn given_low_complexity_then_vary_vocabulary() {
        let f = synthesize(&metrics(0, 50, ComplexityLevel::Low, 30));
        assert_eq!(f.suggestions, vec![VARY_VOCABULARY]);
    }
}

// ── Overall score ────────────────────────────────────────────────

mod overall_score {
    use super::*;

    #[test]
    fn given_all_rules_firing_then_order_is_tone_readability_vocabulary() {
        let f = synthesize(&metrics(5, 90, ComplexityLevel::High, 85));
        assert_eq!(
            f.strengths,
            vec![POSITIVE_TONE, GOOD_READABILITY, RICH_VOCABULARY]
        );
        // (80 + 90 + 85) / 3 = 85
        assert_eq!(f.overall_score, 85);
    }

    #[test]
    fn given_negative_readability_then_score_can_go_negative() {
        let f = synthesize(&metrics(0, -200, ComplexityLevel::Low, 10));
        // (60 - 200 + 10) / 3 = -43.33
        assert_eq!(f.overall_score, -43);
    }

    #[test]
    fn given_real_text_then_feedback_follows_metrics() {
        let text = "This wonderful essay is clear. It helps readers.";
        let m = peerlens_text::analyze_text(text);
        let f = synthesize(&m);
        assert!(f.strengths.iter().any(|s| s == POSITIVE_TONE));
    }
}
