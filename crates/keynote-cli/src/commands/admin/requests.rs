use keynote_core::entities::QualificationRequest;
use keynote_core::enums::QualificationStatus;
use serde::Serialize;

use super::describe;
use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::{parse_enum, parse_optional_enum};
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct RequestListResponse {
    requests: Vec<QualificationRequest>,
}

#[derive(Serialize)]
struct StatusResponse<'a> {
    id: &'a str,
    status: QualificationStatus,
}

pub async fn list(
    status: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = parse_optional_enum::<QualificationStatus>(status, "status")?;
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let requests = ctx.service.list_qualification_requests(status, limit).await?;
    output(&RequestListResponse { requests }, flags.format)
}

pub async fn set_status(
    id: &str,
    raw: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = parse_enum::<QualificationStatus>(raw, "status")?;
    ctx.service
        .update_qualification_status(id, status)
        .await
        .map_err(|error| describe(error, "qualification request", id))?;
    output(&StatusResponse { id, status }, flags.format)
}
