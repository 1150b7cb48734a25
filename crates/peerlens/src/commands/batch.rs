use anyhow::Result;
use peerlens_settings::EngineSettings;

use crate::cli::{GlobalArgs, InputArgs};
use crate::input::{emit, load_batch};

pub(crate) fn handle(
    args: InputArgs,
    global: &GlobalArgs,
    settings: &EngineSettings,
) -> Result<()> {
    let items = load_batch(&args.input)?;
    tracing::info!(items = items.len(), "analyzing batch");
    let results = peerlens_core::analyze_batch_with(&items, settings);
    emit(&results, global.pretty)
}
