use keynote_auth::token_store::TOKEN_ENV;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct LogoutResponse {
    signed_out: bool,
    note: Option<String>,
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(token) = &ctx.auth_token
        && let Err(error) = ctx.service.sign_out(token).await
    {
        tracing::warn!(%error, "failed to delete server-side session; clearing local token anyway");
    }
    keynote_auth::logout()?;

    let note = std::env::var_os(TOKEN_ENV)
        .map(|_| format!("{TOKEN_ENV} is still set; unset it to stay signed out"));
    output(
        &LogoutResponse {
            signed_out: true,
            note,
        },
        flags.format,
    )
}
