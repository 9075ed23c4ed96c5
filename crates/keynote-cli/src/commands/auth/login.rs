use crate::cli::GlobalFlags;
use crate::cli::subcommands::CredentialArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &CredentialArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let credentials = super::credentials(args, None)?;
    let response = super::open_session(ctx, &credentials).await?;
    output(&response, flags.format)
}
