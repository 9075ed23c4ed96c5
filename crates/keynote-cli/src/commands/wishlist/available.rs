use keynote_core::entities::Speaker;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AvailableResponse {
    speakers: Vec<Speaker>,
}

pub async fn run(
    project_id: &str,
    search: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let gateway = ctx.gateway();
    if gateway.project(project_id).await.is_none() {
        anyhow::bail!("project '{project_id}' not found");
    }
    let speakers = gateway.available_speakers(project_id, search).await;
    output(&AvailableResponse { speakers }, flags.format)
}
