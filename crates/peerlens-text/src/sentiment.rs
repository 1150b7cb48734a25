//! Lexicon polarity with single-word negation.

use peerlens_math::finite_or_zero;
use peerlens_types::{Sentiment, SentimentLabel};

use crate::lexicon::{AFINN, NEGATORS};

/// Lower-case, drop punctuation other than apostrophes and hyphens, split on whitespace.
///
/// Keeping apostrophes lets contractions such as `don't` act as negators.
fn sentiment_tokens(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|raw| {
            raw.chars()
                .filter(|c| c.is_alphanumeric() || *c == '\'' || *c == '-')
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|t| !t.is_empty())
        .collect()
}

/// Polarity of a single token, negated when the previous token is a negator.
fn token_score(tokens: &[String], i: usize) -> i32 {
    let Some(&valence) = AFINN.get(tokens[i].as_str()) else {
        return 0;
    };
    let negated = i > 0 && NEGATORS.contains(tokens[i - 1].as_str());
    if negated { -valence } else { valence }
}

pub fn analyze_sentiment(text: &str) -> Sentiment {
    let tokens = sentiment_tokens(text);
    let score: i32 = (0..tokens.len()).map(|i| token_score(&tokens, i)).sum();

    let label = match score {
        s if s > 0 => SentimentLabel::Positive,
        s if s < 0 => SentimentLabel::Negative,
        _ => SentimentLabel::Neutral,
    };
    let comparative = if tokens.is_empty() {
        0.0
    } else {
        finite_or_zero(f64::from(score) / tokens.len() as f64)
    };

    Sentiment {
        score,
        magnitude: score.unsigned_abs(),
        label,
        comparative,
    }
}
