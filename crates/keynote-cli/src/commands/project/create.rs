use keynote_core::entities::NewProject;
use keynote_core::enums::{EventType, Industry};
use keynote_core::forms::{FieldErrors, ProjectForm};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectFieldArgs;
use crate::commands::RETRY_MESSAGE;
use crate::commands::apply::field_report;
use crate::commands::shared::parse::{parse_audience_size, parse_enum, parse_optional_enum};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    name: &str,
    fields: &ProjectFieldArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let new = validated_project(name, fields)?;
    let Some(project) = ctx.gateway().create_project(&new).await else {
        anyhow::bail!("could not create project: {RETRY_MESSAGE}");
    };
    output(&project, flags.format)
}

fn validated_project(name: &str, fields: &ProjectFieldArgs) -> anyhow::Result<NewProject> {
    let form = ProjectForm {
        name: name.to_string(),
        description: fields.description.clone().unwrap_or_default(),
        event_date: fields.event_date.clone().unwrap_or_default(),
        location: fields.location.clone().unwrap_or_default(),
        budget: fields.budget.clone().unwrap_or_default(),
        audience_size: fields
            .audience_size
            .as_deref()
            .map(parse_audience_size)
            .transpose()?,
        event_type: parse_optional_enum::<EventType>(fields.event_type.as_deref(), "event type")?,
        industry: parse_optional_enum::<Industry>(fields.industry.as_deref(), "industry")?,
        status: fields
            .status
            .as_deref()
            .map(|raw| parse_enum(raw, "status"))
            .transpose()?
            .unwrap_or_default(),
    };
    let errors = form.validate();
    if !errors.is_empty() {
        return Err(field_report(&errors));
    }
    Ok(form.to_new_project()?)
}
