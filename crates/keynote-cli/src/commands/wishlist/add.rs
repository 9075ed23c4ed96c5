use keynote_core::entities::WishlistEntry;
use keynote_core::wishlist::AddOutcome;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AddResponse {
    added: bool,
    message: &'static str,
    entry: Option<WishlistEntry>,
}

impl AddResponse {
    /// `None` for outcomes that should fail the command.
    fn from_outcome(outcome: AddOutcome) -> Option<Self> {
        let message = outcome.message();
        match outcome {
            AddOutcome::Added { entry } => Some(Self {
                added: true,
                message,
                entry: Some(entry),
            }),
            AddOutcome::AlreadyListed | AddOutcome::Duplicate => Some(Self {
                added: false,
                message,
                entry: None,
            }),
            AddOutcome::Failed => None,
        }
    }
}

pub async fn run(
    project_id: &str,
    speaker_id: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let gateway = ctx.gateway();
    if gateway.project(project_id).await.is_none() {
        anyhow::bail!("project '{project_id}' not found");
    }
    let loaded = gateway.wishlist(project_id).await;
    let outcome = gateway.add_speaker(&loaded, project_id, speaker_id).await;
    let message = outcome.message();
    let Some(response) = AddResponse::from_outcome(outcome) else {
        anyhow::bail!("{message}");
    };
    output(&response, flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_is_a_normal_response() {
        let response = AddResponse::from_outcome(AddOutcome::Duplicate).expect("not an error");
        assert!(!response.added);
        assert_eq!(response.message, "Speaker is already on this wishlist");
    }

    #[test]
    fn failure_fails_the_command() {
        assert!(AddResponse::from_outcome(AddOutcome::Failed).is_none());
    }
}
