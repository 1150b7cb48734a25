//! # peerlens-settings
//!
//! **Tier 0 (Pure Settings)**
//!
//! Clap-free tuning knobs for the analyzers and the similarity engine.
//! Every field has a default equal to the documented engine constant, so a
//! partial TOML file only needs to name what it overrides.
//!
//! ## What belongs here
//! * Pure data types with Serde derive
//! * Similarity weights and thresholds, keyword and code-lint limits
//! * Default values, TOML loading and validation
//!
//! ## What does NOT belong here
//! * Clap parsing (use the peerlens CLI crate)
//! * Scoring logic

#![forbid(unsafe_code)]

use std::path::Path;

use anyhow::{Context, Result, bail, ensure};
use serde::{Deserialize, Serialize};

/// Keywords are always longer than three characters; settings may only raise this.
pub const MIN_KEYWORD_LEN: usize = 4;

/// Blend of the three component measures that make up composite similarity.
///
/// Weights are relative; the blend is divided by [`SimilarityWeights::total`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityWeights {
    /// Weight of token-set Jaccard.
    pub jaccard: f64,
    /// Weight of bigram sequence containment.
    pub sequence: f64,
    /// Weight of the overlap coefficient.
    pub overlap: f64,
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            jaccard: 0.3,
            sequence: 0.5,
            overlap: 0.2,
        }
    }
}

impl SimilarityWeights {
    pub fn total(&self) -> f64 {
        self.jaccard + self.sequence + self.overlap
    }
}

/// Settings for `detect_similarity` and span localization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilaritySettings {
    pub weights: SimilarityWeights,

    /// A corpus document is reported when its composite exceeds this.
    pub match_threshold: f64,

    /// A chunk pair is reported as a span when its composite exceeds this.
    pub span_threshold: f64,

    /// Words per chunk when localizing spans.
    pub chunk_words: usize,

    /// Maximum spans kept per matching document.
    pub max_spans: usize,
}

impl Default for SimilaritySettings {
    fn default() -> Self {
        Self {
            weights: SimilarityWeights::default(),
            match_threshold: default_match_threshold(),
            span_threshold: default_span_threshold(),
            chunk_words: default_chunk_words(),
            max_spans: default_max_spans(),
        }
    }
}

fn default_match_threshold() -> f64 {
    0.05
}

fn default_span_threshold() -> f64 {
    0.3
}

fn default_chunk_words() -> usize {
    25
}

fn default_max_spans() -> usize {
    5
}

/// Settings for the prose analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextSettings {
    /// Keywords reported, most frequent first.
    pub keyword_limit: usize,

    /// Shortest token (in chars) eligible as a keyword. Never below
    /// [`MIN_KEYWORD_LEN`].
    pub min_keyword_len: usize,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            keyword_limit: 10,
            min_keyword_len: MIN_KEYWORD_LEN,
        }
    }
}

/// Settings for the source-code analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeSettings {
    /// Leading whitespace beyond this many chars is flagged as deep nesting.
    pub max_indent: usize,

    /// Lines longer than this many chars are flagged.
    pub max_line_length: usize,

    /// Language assumed when the caller does not name one.
    pub default_language: String,
}

impl Default for CodeSettings {
    fn default() -> Self {
        Self {
            max_indent: 8,
            max_line_length: 120,
            default_language: "javascript".to_string(),
        }
    }
}

/// Top-level settings document (`peerlens.toml`).
///
/// ```toml
/// [similarity]
/// match_threshold = 0.1
///
/// [similarity.weights]
/// sequence = 0.6
///
/// [text]
/// keyword_limit = 5
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub similarity: SimilaritySettings,
    pub text: TextSettings,
    pub code: CodeSettings,
}

impl EngineSettings {
    /// Parse settings from TOML text without validating them.
    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let settings = Self::parse(s).context("parsing peerlens settings")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a settings file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("loading settings from {}", path.display()))
    }

    /// Reject values that would make scores meaningless.
    pub fn validate(&self) -> Result<()> {
        self.similarity.validate()?;
        ensure!(
            self.text.min_keyword_len >= MIN_KEYWORD_LEN,
            "text.min_keyword_len must be at least {MIN_KEYWORD_LEN}, got {}",
            self.text.min_keyword_len
        );
        ensure!(
            self.code.max_line_length >= 1,
            "code.max_line_length must be at least 1"
        );
        Ok(())
    }
}

impl SimilaritySettings {
    pub fn validate(&self) -> Result<()> {
        let w = &self.weights;
        for (name, value) in [
            ("jaccard", w.jaccard),
            ("sequence", w.sequence),
            ("overlap", w.overlap),
        ] {
            if !value.is_finite() || value < 0.0 {
                bail!("similarity.weights.{name} must be a finite non-negative number, got {value}");
            }
        }
        ensure!(
            w.total() > 0.0,
            "similarity.weights must not all be zero"
        );
        for (name, value) in [
            ("match_threshold", self.match_threshold),
            ("span_threshold", self.span_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                bail!("similarity.{name} must be within 0..=1, got {value}");
            }
        }
        ensure!(
            self.chunk_words >= 1,
            "similarity.chunk_words must be at least 1"
        );
        Ok(())
    }
}
