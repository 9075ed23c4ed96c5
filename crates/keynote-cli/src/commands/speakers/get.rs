use keynote_db::gateway::Lookup;

use crate::cli::GlobalFlags;
use crate::commands::RETRY_MESSAGE;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match ctx.gateway().speaker(id).await {
        Lookup::Found(detail) => output(&detail, flags.format),
        Lookup::Missing => anyhow::bail!("speaker '{id}' not found"),
        Lookup::Failed => anyhow::bail!("could not load speaker '{id}': {RETRY_MESSAGE}"),
    }
}
