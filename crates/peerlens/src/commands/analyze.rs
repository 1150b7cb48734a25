use anyhow::Result;
use peerlens_settings::EngineSettings;

use crate::cli::{AnalyzeArgs, GlobalArgs};
use crate::input::{emit, read_content};

pub(crate) fn handle(
    args: AnalyzeArgs,
    global: &GlobalArgs,
    settings: &EngineSettings,
) -> Result<()> {
    let content = read_content(&args.content.input.input)?;
    let analysis = peerlens_core::analyze_content_with(
        &content,
        args.content.kind,
        args.content.language.as_deref(),
        settings,
    );
    emit(&analysis, global.pretty)
}
