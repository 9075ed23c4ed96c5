use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct DeleteResponse<'a> {
    id: &'a str,
    deleted: bool,
}

pub async fn run(id: &str, yes: bool, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !yes {
        anyhow::bail!("deleting project '{id}' also removes its wishlist; re-run with --yes to confirm");
    }
    if !ctx.gateway().delete_project(id).await {
        anyhow::bail!("could not delete project '{id}': it may not exist, or the database failed");
    }
    output(&DeleteResponse { id, deleted: true }, flags.format)
}
