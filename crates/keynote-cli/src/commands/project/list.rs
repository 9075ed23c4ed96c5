use keynote_core::entities::Project;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ProjectListResponse {
    projects: Vec<Project>,
}

pub async fn run(limit: Option<u32>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let projects = ctx.gateway().projects(Some(limit)).await;
    output(&ProjectListResponse { projects }, flags.format)
}
