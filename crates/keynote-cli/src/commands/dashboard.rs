use keynote_core::entities::Project;
use keynote_core::responses::ProjectStats;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DashboardResponse {
    welcome: String,
    stats: ProjectStats,
    recent_projects: Vec<Project>,
}

/// Handle `keynote dashboard`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let identity = ctx.require_identity()?;
    let gateway = ctx.gateway();
    let limit = effective_limit(None, flags.limit, ctx.config.general.default_limit);

    let response = DashboardResponse {
        welcome: format!("Welcome back, {}", identity.greeting_name()),
        stats: gateway.project_stats().await,
        recent_projects: gateway.projects(Some(limit)).await,
    };
    output(&response, flags.format)
}
