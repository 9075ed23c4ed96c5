mod create;
mod delete;
mod get;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::context::AppContext;

/// Handle `keynote project`. Every subcommand needs a signed-in account.
pub async fn handle(
    action: &ProjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_identity()?;
    match action {
        ProjectCommands::Create { name, fields } => create::run(name, fields, ctx, flags).await,
        ProjectCommands::List { limit } => list::run(*limit, ctx, flags).await,
        ProjectCommands::Get { id } => get::run(id, ctx, flags).await,
        ProjectCommands::Update { id, name, fields } => {
            update::run(id, name.as_deref(), fields, ctx, flags).await
        }
        ProjectCommands::Delete { id, yes } => delete::run(id, *yes, ctx, flags).await,
    }
}
