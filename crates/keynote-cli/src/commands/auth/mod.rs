mod login;
mod logout;
mod profile;
mod signup;
mod whoami;

use chrono::{DateTime, Utc};
use keynote_core::entities::Account;
use keynote_core::forms::{Credentials, CredentialsForm, FieldErrors};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{AuthCommands, CredentialArgs};
use crate::commands::apply::field_report;
use crate::context::AppContext;

/// Handle `keynote auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Signup { credentials, name } => {
            signup::handle(credentials, name.as_deref(), ctx, flags).await
        }
        AuthCommands::Login { credentials } => login::handle(credentials, ctx, flags).await,
        AuthCommands::Logout => logout::handle(ctx, flags).await,
        AuthCommands::Whoami => whoami::handle(ctx, flags).await,
        AuthCommands::Profile {
            name,
            company,
            title,
            phone,
        } => {
            profile::handle(
                name.as_deref(),
                company.as_deref(),
                title.as_deref(),
                phone.as_deref(),
                ctx,
                flags,
            )
            .await
        }
    }
}

#[derive(Debug, Serialize)]
struct SessionResponse {
    account: Account,
    expires_at: DateTime<Utc>,
}

/// Validate both fields and normalize the email.
fn credentials(args: &CredentialArgs, name: Option<&str>) -> anyhow::Result<Credentials> {
    let form = CredentialsForm {
        email: args.email.clone(),
        password: args.password.clone(),
        full_name: name.unwrap_or_default().to_string(),
    };
    let errors = form.validate();
    if !errors.is_empty() {
        return Err(field_report(&errors));
    }
    Ok(form.to_credentials()?)
}

/// Sign in and persist the raw token for later invocations.
async fn open_session(
    ctx: &AppContext,
    credentials: &Credentials,
) -> anyhow::Result<SessionResponse> {
    let (account, session) = ctx
        .service
        .sign_in(credentials, ctx.config.auth.session_ttl_hours)
        .await?;
    keynote_auth::token_store::store(&session.token)?;
    match ctx.service.purge_expired_sessions().await {
        Ok(0) => {}
        Ok(removed) => tracing::debug!(removed, "purged expired sessions"),
        Err(error) => tracing::warn!(%error, "failed to purge expired sessions"),
    }
    Ok(SessionResponse {
        account,
        expires_at: session.expires_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(email: &str, password: &str) -> CredentialArgs {
        CredentialArgs {
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn credentials_report_both_fields() {
        let err = credentials(&args("nope", "123"), None).expect_err("should fail");
        let text = err.to_string();
        assert!(text.contains("email: Please enter a valid email"), "{text}");
        assert!(text.contains("password: Password must be at least 6 characters"), "{text}");
    }

    #[test]
    fn credentials_normalize_email_and_name() {
        let creds = credentials(&args(" Ada@Example.com ", "secret1"), Some("Ada"))
            .expect("credentials should validate");
        assert_eq!(creds.email, "ada@example.com");
        assert_eq!(creds.full_name.as_deref(), Some("Ada"));
    }
}
