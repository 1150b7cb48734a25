pub(crate) mod analyze;
pub(crate) mod batch;
pub(crate) mod feedback;
pub(crate) mod similarity;
pub(crate) mod submission;

use anyhow::Result;
use peerlens_settings::EngineSettings;

use crate::cli::{Commands, GlobalArgs};

pub(crate) fn dispatch(
    command: Commands,
    global: &GlobalArgs,
    settings: &EngineSettings,
) -> Result<()> {
    match command {
        Commands::Analyze(args) => analyze::handle(args, global, settings),
        Commands::Similarity(args) => similarity::handle(args, global, settings),
        Commands::Feedback(args) => feedback::handle(args, global, settings),
        Commands::Submission(args) => submission::handle(args, global, settings),
        Commands::Batch(args) => batch::handle(args, global, settings),
    }
}
