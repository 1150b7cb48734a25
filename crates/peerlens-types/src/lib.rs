//! # peerlens-types
//!
//! **Tier 0 (Result Contracts)**
//!
//! Pure data structures produced and consumed by the peerlens engine.
//! No I/O, no scoring logic.
//!
//! ## Stability Policy
//!
//! The JSON shape is the contract. Field names serialize in camelCase because
//! the request layer that stores these results speaks camelCase; removing or
//! renaming a field bumps [`SCHEMA_VERSION`].
//!
//! ## What belongs here
//! * Metric and report structs with Serde derives
//! * Classification enums (levels, labels, content kinds)
//! * Corpus document references
//!
//! ## What does NOT belong here
//! * Tokenization or scoring (use the analyzer crates)
//! * Settings (use peerlens-settings)
//! * CLI parsing

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The current schema version for all result envelopes.
pub const SCHEMA_VERSION: u32 = 1;

// -----------------------------------------------------------------------------
// Classification enums
// -----------------------------------------------------------------------------

/// Declared kind of a submission's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Prose: essays, reports, review feedback.
    #[default]
    Text,
    /// Source code.
    Code,
    /// Prose with embedded code; both analyzers run.
    Mixed,
}

impl ContentKind {
    pub fn includes_text(self) -> bool {
        matches!(self, ContentKind::Text | ContentKind::Mixed)
    }

    pub fn includes_code(self) -> bool {
        matches!(self, ContentKind::Code | ContentKind::Mixed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Code => "code",
            ContentKind::Mixed => "mixed",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ContentKind::Text),
            "code" => Ok(ContentKind::Code),
            "mixed" => Ok(ContentKind::Mixed),
            other => Err(format!("unknown content kind: {other}")),
        }
    }
}

/// Three-step complexity scale shared by text and code analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ComplexityLevel::Low => "Low",
            ComplexityLevel::Medium => "Medium",
            ComplexityLevel::High => "High",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

/// Seven-level Flesch Reading Ease band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadabilityLevel {
    #[serde(rename = "Very Easy")]
    VeryEasy,
    #[serde(rename = "Easy")]
    Easy,
    #[serde(rename = "Fairly Easy")]
    FairlyEasy,
    #[serde(rename = "Standard")]
    Standard,
    #[serde(rename = "Fairly Difficult")]
    FairlyDifficult,
    #[serde(rename = "Difficult")]
    Difficult,
    #[serde(rename = "Very Difficult")]
    VeryDifficult,
}

impl ReadabilityLevel {
    /// Band for a rounded Flesch score.
    pub fn from_score(score: i64) -> Self {
        match score {
            s if s >= 90 => ReadabilityLevel::VeryEasy,
            s if s >= 80 => ReadabilityLevel::Easy,
            s if s >= 70 => ReadabilityLevel::FairlyEasy,
            s if s >= 60 => ReadabilityLevel::Standard,
            s if s >= 50 => ReadabilityLevel::FairlyDifficult,
            s if s >= 30 => ReadabilityLevel::Difficult,
            _ => ReadabilityLevel::VeryDifficult,
        }
    }
}

// -----------------------------------------------------------------------------
// Text metrics
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentiment {
    /// Sum of lexicon polarities.
    pub score: i32,
    pub magnitude: u32,
    pub label: SentimentLabel,
    /// `score / token count`.
    pub comparative: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Readability {
    /// Rounded Flesch Reading Ease; unbounded in both directions.
    pub score: i64,
    pub level: ReadabilityLevel,
    pub avg_words_per_sentence: f64,
    pub avg_syllables_per_word: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextComplexity {
    /// Lexical diversity as a percentage, 0..=100.
    pub score: u32,
    pub level: ComplexityLevel,
    pub lexical_diversity: f64,
    pub avg_word_length: f64,
    pub avg_words_per_sentence: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarReport {
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyword {
    pub word: String,
    pub frequency: usize,
}

/// Best-effort named entities. Each category is deduplicated and sorted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entities {
    pub people: BTreeSet<String>,
    pub places: BTreeSet<String>,
    pub organizations: BTreeSet<String>,
    pub dates: BTreeSet<String>,
    pub money: BTreeSet<String>,
    pub percentages: BTreeSet<String>,
}

impl Entities {
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
            && self.places.is_empty()
            && self.organizations.is_empty()
            && self.dates.is_empty()
            && self.money.is_empty()
            && self.percentages.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextMetrics {
    pub sentiment: Sentiment,
    pub readability: Readability,
    pub complexity: TextComplexity,
    pub grammar: GrammarReport,
    pub keywords: Vec<Keyword>,
    pub entities: Entities,
}

// -----------------------------------------------------------------------------
// Code metrics
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeComplexity {
    /// Weighted count of control-flow lines.
    pub score: u32,
    pub level: ComplexityLevel,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeQuality {
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeStyle {
    pub issues: Vec<String>,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineMetrics {
    pub total_lines: usize,
    pub non_empty_lines: usize,
    pub comment_lines: usize,
    pub comment_ratio: f64,
    pub word_count: usize,
    pub character_count: usize,
    pub avg_line_length: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeMetrics {
    pub complexity: CodeComplexity,
    pub quality: CodeQuality,
    pub style: CodeStyle,
    pub metrics: LineMetrics,
}

/// Output of `analyze_content`: one section per analyzer that ran.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextMetrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeMetrics>,
}

impl ContentAnalysis {
    /// The complexity score a dashboard shows for a submission: text first, then code.
    pub fn primary_complexity_score(&self) -> u32 {
        self.text
            .as_ref()
            .map(|t| t.complexity.score)
            .or_else(|| self.code.as_ref().map(|c| c.complexity.score))
            .unwrap_or(0)
    }
}

// -----------------------------------------------------------------------------
// Similarity
// -----------------------------------------------------------------------------

/// A prior submission supplied by the caller for comparison.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRef {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    /// Missing content is treated as empty and skipped.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ContentKind>,
}

impl DocumentRef {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            content: Some(content.into()),
            kind: None,
        }
    }

    pub fn with_kind(mut self, kind: ContentKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn content_str(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    /// True when the entry carries a non-empty content string.
    pub fn has_content(&self) -> bool {
        self.content.as_deref().is_some_and(|c| !c.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingSpan {
    pub source_chunk: String,
    pub target_chunk: String,
    pub similarity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityMatch {
    pub document_id: String,
    pub title: String,
    pub author: String,
    pub similarity: f64,
    pub matching_spans: Vec<MatchingSpan>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlagiarismReport {
    /// Highest match similarity as an integer percentage.
    pub score: u32,
    pub sources: Vec<SimilarityMatch>,
    pub total_sources: usize,
    pub checked_sources: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PlagiarismReport {
    /// Zero-score report annotated with why the candidate could not be checked.
    pub fn rejected(error: impl Into<String>, total_sources: usize) -> Self {
        Self {
            score: 0,
            sources: Vec::new(),
            total_sources,
            checked_sources: 0,
            error: Some(error.into()),
        }
    }
}

// -----------------------------------------------------------------------------
// Feedback and bundles
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackReport {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
    pub overall_score: i64,
}

/// Analysis, similarity and feedback for one submission in a single result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionAnalysis {
    pub analysis: ContentAnalysis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plagiarism: Option<PlagiarismReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<FeedbackReport>,
    pub complexity_score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItem {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub kind: ContentKind,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    pub document_id: String,
    pub title: String,
    pub analysis: ContentAnalysis,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readability_bands_follow_thresholds() {
        assert_eq!(ReadabilityLevel::from_score(95), ReadabilityLevel::VeryEasy);
        assert_eq!(ReadabilityLevel::from_score(90), ReadabilityLevel::VeryEasy);
        assert_eq!(ReadabilityLevel::from_score(89), ReadabilityLevel::Easy);
        assert_eq!(ReadabilityLevel::from_score(60), ReadabilityLevel::Standard);
        assert_eq!(ReadabilityLevel::from_score(30), ReadabilityLevel::Difficult);
        assert_eq!(
            ReadabilityLevel::from_score(29),
            ReadabilityLevel::VeryDifficult
        );
        assert_eq!(
            ReadabilityLevel::from_score(-40),
            ReadabilityLevel::VeryDifficult
        );
    }

    #[test]
    fn content_kind_flags() {
        assert!(ContentKind::Text.includes_text());
        assert!(!ContentKind::Text.includes_code());
        assert!(ContentKind::Mixed.includes_text());
        assert!(ContentKind::Mixed.includes_code());
        assert!(!ContentKind::Code.includes_text());
    }

    #[test]
    fn primary_complexity_prefers_text() {
        let analysis = ContentAnalysis {
            text: None,
            code: Some(CodeMetrics {
                complexity: CodeComplexity {
                    score: 14,
                    level: ComplexityLevel::Medium,
                    issues: vec![],
                },
                quality: CodeQuality::default(),
                style: CodeStyle::default(),
                metrics: LineMetrics::default(),
            }),
        };
        assert_eq!(analysis.primary_complexity_score(), 14);
        assert_eq!(ContentAnalysis::default().primary_complexity_score(), 0);
    }

    #[test]
    fn document_without_content_reads_as_empty() {
        let doc = DocumentRef {
            id: "d1".into(),
            ..Default::default()
        };
        assert_eq!(doc.content_str(), "");
        assert!(!doc.has_content());
    }
}
