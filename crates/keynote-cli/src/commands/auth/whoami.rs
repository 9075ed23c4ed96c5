use keynote_core::entities::Account;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct WhoamiResponse {
    authenticated: bool,
    is_admin: bool,
    account: Option<Account>,
    note: Option<&'static str>,
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = match &ctx.identity {
        Some(identity) => WhoamiResponse {
            authenticated: true,
            is_admin: identity.is_admin,
            account: Some(ctx.service.current_account().await?),
            note: None,
        },
        None => WhoamiResponse {
            authenticated: false,
            is_admin: false,
            account: None,
            note: Some("not signed in: run `keynote auth login`"),
        },
    };
    output(&response, flags.format)
}
