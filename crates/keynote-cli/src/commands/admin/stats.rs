use crate::cli::GlobalFlags;
use crate::commands::RETRY_MESSAGE;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(stats) = ctx.gateway().catalog_stats().await else {
        anyhow::bail!("could not load catalog stats: {RETRY_MESSAGE}");
    };
    output(&stats, flags.format)
}
