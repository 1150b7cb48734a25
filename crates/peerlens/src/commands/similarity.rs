use anyhow::Result;
use peerlens_settings::EngineSettings;

use crate::cli::{GlobalArgs, SimilarityArgs};
use crate::input::{emit, load_corpus, read_content};

pub(crate) fn handle(
    args: SimilarityArgs,
    global: &GlobalArgs,
    settings: &EngineSettings,
) -> Result<()> {
    let content = read_content(&args.input.input)?;
    let corpus = load_corpus(&args.corpus)?;
    let report = peerlens_core::detect_similarity_with(&content, &corpus, &settings.similarity);
    if let Some(reason) = &report.error {
        tracing::warn!(%reason, "candidate could not be checked");
    }
    emit(&report, global.pretty)
}
