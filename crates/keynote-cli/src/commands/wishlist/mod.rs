mod add;
mod available;
mod edit;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::WishlistCommands;
use crate::context::AppContext;

/// Handle `keynote wishlist`. Entries are reachable only through projects the
/// signed-in account owns.
pub async fn handle(
    action: &WishlistCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_identity()?;
    match action {
        WishlistCommands::List { project_id } => list::run(project_id, ctx, flags).await,
        WishlistCommands::Add {
            project_id,
            speaker_id,
        } => add::run(project_id, speaker_id, ctx, flags).await,
        WishlistCommands::Status { entry_id, status } => {
            edit::status(entry_id, status, ctx, flags).await
        }
        WishlistCommands::Priority { entry_id, priority } => {
            edit::priority(entry_id, priority, ctx, flags).await
        }
        WishlistCommands::Notes {
            entry_id,
            text,
            clear,
        } => {
            let notes = if *clear { None } else { text.clone() };
            edit::notes(entry_id, notes, ctx, flags).await
        }
        WishlistCommands::Remove { entry_id, yes } => edit::remove(entry_id, *yes, ctx, flags).await,
        WishlistCommands::Available { project_id, search } => {
            available::run(project_id, search, ctx, flags).await
        }
    }
}
