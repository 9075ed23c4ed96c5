use keynote_core::entities::Speaker;
use keynote_core::filter::{SpeakerFilterBuilder, SpeakerPredicate};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SpeakerListArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SpeakerListResponse {
    speakers: Vec<Speaker>,
}

pub async fn run(
    args: &SpeakerListArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(args.limit, flags.limit, ctx.config.general.default_limit);
    let predicate = build_predicate(args);
    tracing::debug!(?predicate, limit, "listing speakers");

    let speakers = ctx.gateway().speakers(&predicate, Some(limit)).await;
    output(&SpeakerListResponse { speakers }, flags.format)
}

/// Blank and "all" inputs leave their filter unset.
fn build_predicate(args: &SpeakerListArgs) -> SpeakerPredicate {
    let mut builder = SpeakerFilterBuilder::new()
        .search(args.search.as_deref().unwrap_or_default())
        .topic(args.topic.as_deref().unwrap_or_default())
        .budget(args.budget.as_deref().unwrap_or_default())
        .location(args.location.as_deref().unwrap_or_default())
        .expertise(args.expertise.iter().map(String::as_str))
        .speaking_topics(args.speaking_topic.iter().map(String::as_str));
    if let Some(min) = args.min_fee {
        builder = builder.min_fee(min);
    }
    if let Some(max) = args.max_fee {
        builder = builder.max_fee(max);
    }
    builder.build()
}
