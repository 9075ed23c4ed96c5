mod requests;
mod speaker;
mod stats;
mod testimonial;

use keynote_db::error::DatabaseError;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminCommands;
use crate::context::AppContext;

/// Handle `keynote admin`. Checked here for a clear message; the repositories
/// enforce the same rule.
pub async fn handle(
    action: &AdminCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.require_admin()?;
    match action {
        AdminCommands::SpeakerCreate(args) => speaker::create(args, ctx, flags).await,
        AdminCommands::SpeakerUpdate { id, .. } => {
            let update = speaker::build_update(action)?;
            speaker::update(id, update, ctx, flags).await
        }
        AdminCommands::SpeakerDelete { id, yes } => speaker::delete(id, *yes, ctx, flags).await,
        AdminCommands::TestimonialAdd { .. } => testimonial::run(action, ctx, flags).await,
        AdminCommands::Requests { status, limit } => {
            requests::list(status.as_deref(), *limit, ctx, flags).await
        }
        AdminCommands::RequestStatus { id, status } => {
            requests::set_status(id, status, ctx, flags).await
        }
        AdminCommands::Stats => stats::run(ctx, flags).await,
    }
}

/// Turn a repository error into a message naming the missing record.
fn describe(error: DatabaseError, what: &str, id: &str) -> anyhow::Error {
    match error {
        DatabaseError::NoResult => anyhow::anyhow!("{what} '{id}' not found"),
        DatabaseError::InvalidState(message) => anyhow::anyhow!("{message}"),
        other => anyhow::Error::new(other).context(format!("{what} '{id}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::describe;
    use keynote_db::error::DatabaseError;

    #[test]
    fn missing_rows_name_the_record() {
        let text = describe(DatabaseError::NoResult, "speaker", "spk-00000009").to_string();
        assert_eq!(text, "speaker 'spk-00000009' not found");
    }

    #[test]
    fn invalid_state_passes_through() {
        let text = describe(
            DatabaseError::InvalidState("rating must be between 1 and 5".into()),
            "testimonial for speaker",
            "spk-1",
        )
        .to_string();
        assert_eq!(text, "rating must be between 1 and 5");
    }
}
