use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use peerlens_types::ContentKind;

/// `peerlens`: explainable metrics and similarity reports for submissions.
///
/// Every command prints one JSON document on stdout.
#[derive(Parser, Debug)]
#[command(name = "peerlens", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Settings file (TOML). Keys not named keep their defaults.
    #[arg(long, value_name = "TOML", global = true)]
    pub config: Option<PathBuf>,

    /// Verbose logging on stderr (repeat for more detail).
    ///
    /// `PEERLENS_LOG` takes precedence when set.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Pretty-print the JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Text and/or code metrics for one file.
    Analyze(AnalyzeArgs),
    /// Compare one file against a corpus of prior submissions.
    Similarity(SimilarityArgs),
    /// Strengths, weaknesses and suggestions for a piece of prose.
    Feedback(InputArgs),
    /// Metrics, feedback and (with --corpus) a plagiarism report in one result.
    Submission(SubmissionArgs),
    /// Analyze a JSON array of `{id, title, content, kind, language}` items.
    Batch(InputArgs),
}

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Input file, or `-` for stdin.
    #[arg(value_name = "FILE", default_value = "-")]
    pub input: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct ContentArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Declared content kind.
    #[arg(long, value_enum, default_value_t = ContentKind::Text)]
    pub kind: ContentKind,

    /// Source language for code (e.g. rust, python). Defaults to the
    /// configured `code.default_language`.
    #[arg(long, value_name = "NAME")]
    pub language: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub content: ContentArgs,
}

#[derive(Args, Debug, Clone)]
pub struct SimilarityArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// JSON array of `{id, title, author, content, kind}` documents.
    #[arg(long, value_name = "JSON")]
    pub corpus: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct SubmissionArgs {
    #[command(flatten)]
    pub content: ContentArgs,

    /// Optional corpus; only documents of a comparable kind are scanned.
    #[arg(long, value_name = "JSON")]
    pub corpus: Option<PathBuf>,
}
