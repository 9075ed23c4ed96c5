use keynote_core::entities::NewTestimonial;
use keynote_core::forms::blank_to_none;

use super::describe;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminCommands;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(action: &AdminCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let AdminCommands::TestimonialAdd {
        speaker_id,
        client,
        company,
        content,
        rating,
        event_type,
    } = action
    else {
        anyhow::bail!("not a testimonial");
    };

    if client.trim().is_empty() {
        anyhow::bail!("client name is required");
    }
    if content.trim().is_empty() {
        anyhow::bail!("testimonial content is required");
    }

    let new = NewTestimonial {
        speaker_id: speaker_id.clone(),
        client_name: client.trim().to_string(),
        client_company: company.as_deref().and_then(blank_to_none),
        content: content.trim().to_string(),
        rating: *rating,
        event_type: event_type.as_deref().and_then(blank_to_none),
    };
    let testimonial = ctx
        .service
        .add_testimonial(&new)
        .await
        .map_err(|error| describe(error, "speaker", speaker_id))?;
    output(&testimonial, flags.format)
}
