use anyhow::Result;
use peerlens_settings::EngineSettings;
use peerlens_types::ContentKind;

use crate::cli::{GlobalArgs, InputArgs};
use crate::input::{emit, read_content};

pub(crate) fn handle(
    args: InputArgs,
    global: &GlobalArgs,
    settings: &EngineSettings,
) -> Result<()> {
    let content = read_content(&args.input)?;
    let analysis =
        peerlens_core::analyze_content_with(&content, ContentKind::Text, None, settings);
    let Some(metrics) = analysis.text else {
        anyhow::bail!("text analysis produced no metrics");
    };
    emit(&peerlens_core::synthesize_feedback(&metrics), global.pretty)
}
