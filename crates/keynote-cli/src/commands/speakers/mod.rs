mod get;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SpeakersCommands;
use crate::context::AppContext;

/// Handle `keynote speakers`.
pub async fn handle(
    action: &SpeakersCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SpeakersCommands::List(args) => list::run(args, ctx, flags).await,
        SpeakersCommands::Get { id } => get::run(id, ctx, flags).await,
    }
}
