use crate::cli::GlobalFlags;
use crate::cli::subcommands::CredentialArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &CredentialArgs,
    name: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let credentials = super::credentials(args, name)?;
    let is_admin = ctx.config.auth.is_admin_email(&credentials.email);
    ctx.service.sign_up(&credentials, is_admin).await?;
    let response = super::open_session(ctx, &credentials).await?;
    output(&response, flags.format)
}
