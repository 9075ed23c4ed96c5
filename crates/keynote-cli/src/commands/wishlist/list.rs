use keynote_core::entities::WishlistEntryWithSpeaker;
use keynote_core::wishlist::sort_for_display;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct WishlistResponse {
    entries: Vec<WishlistEntryWithSpeaker>,
}

pub async fn run(project_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let gateway = ctx.gateway();
    if gateway.project(project_id).await.is_none() {
        anyhow::bail!("project '{project_id}' not found");
    }
    let mut entries = gateway.wishlist(project_id).await;
    sort_for_display(&mut entries);
    output(&WishlistResponse { entries }, flags.format)
}
