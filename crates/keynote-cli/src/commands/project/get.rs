use keynote_core::entities::{Project, WishlistEntryWithSpeaker};
use keynote_core::wishlist::sort_for_display;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ProjectDetailResponse {
    project: Project,
    wishlist: Vec<WishlistEntryWithSpeaker>,
}

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let gateway = ctx.gateway();
    let Some(project) = gateway.project(id).await else {
        anyhow::bail!("project '{id}' not found");
    };
    let mut wishlist = gateway.wishlist(id).await;
    sort_for_display(&mut wishlist);
    output(&ProjectDetailResponse { project, wishlist }, flags.format)
}
