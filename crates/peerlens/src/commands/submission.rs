use anyhow::Result;
use peerlens_settings::EngineSettings;

use crate::cli::{GlobalArgs, SubmissionArgs};
use crate::input::{emit, load_corpus, read_content};

pub(crate) fn handle(
    args: SubmissionArgs,
    global: &GlobalArgs,
    settings: &EngineSettings,
) -> Result<()> {
    let content = read_content(&args.content.input.input)?;
    let corpus = args.corpus.as_deref().map(load_corpus).transpose()?;
    let result = peerlens_core::analyze_submission_with(
        &content,
        args.content.kind,
        args.content.language.as_deref(),
        corpus.as_deref(),
        settings,
    );
    emit(&result, global.pretty)
}
