use keynote_core::enums::{EventType, Industry, ProjectStatus};
use keynote_db::updates::project::{ProjectUpdate, ProjectUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectFieldArgs;
use crate::commands::shared::parse::{
    clearable, clearable_amount, clearable_date, parse_audience_size, parse_enum,
};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    name: Option<&str>,
    fields: &ProjectFieldArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let update = build_update(name, fields)?;
    let Some(project) = ctx.gateway().update_project(id, update).await else {
        anyhow::bail!("could not update project '{id}': it may not exist, or the database failed");
    };
    output(&project, flags.format)
}

fn build_update(name: Option<&str>, fields: &ProjectFieldArgs) -> anyhow::Result<ProjectUpdate> {
    let mut builder = ProjectUpdateBuilder::new();
    let mut touched = false;

    if let Some(name) = name {
        if name.trim().is_empty() {
            anyhow::bail!("Project name is required");
        }
        builder = builder.name(name.trim());
        touched = true;
    }
    if let Some(description) = clearable(fields.description.as_deref()) {
        builder = builder.description(description);
        touched = true;
    }
    if let Some(date) = clearable_date(fields.event_date.as_deref(), "event date")? {
        builder = builder.event_date(date);
        touched = true;
    }
    if let Some(location) = clearable(fields.location.as_deref()) {
        builder = builder.location(location);
        touched = true;
    }
    if let Some(budget) = clearable_amount(fields.budget.as_deref(), "budget")? {
        if budget.is_some_and(|b| b < 0) {
            anyhow::bail!("Budget cannot be negative");
        }
        builder = builder.budget(budget);
        touched = true;
    }
    if let Some(raw) = clearable(fields.audience_size.as_deref()) {
        builder = builder.audience_size(raw.as_deref().map(parse_audience_size).transpose()?);
        touched = true;
    }
    if let Some(raw) = clearable(fields.event_type.as_deref()) {
        let event_type = raw
            .as_deref()
            .map(|v| parse_enum::<EventType>(v, "event type"))
            .transpose()?;
        builder = builder.event_type(event_type);
        touched = true;
    }
    if let Some(raw) = clearable(fields.industry.as_deref()) {
        let industry = raw
            .as_deref()
            .map(|v| parse_enum::<Industry>(v, "industry"))
            .transpose()?;
        builder = builder.industry(industry);
        touched = true;
    }
    if let Some(status) = &fields.status {
        builder = builder.status(parse_enum::<ProjectStatus>(status, "status")?);
        touched = true;
    }

    if !touched {
        anyhow::bail!("Nothing to update: pass at least one field flag");
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_update_is_rejected() {
        assert!(build_update(None, &ProjectFieldArgs::default()).is_err());
    }

    #[test]
    fn empty_string_clears_nullable_fields() {
        let fields = ProjectFieldArgs {
            location: Some(String::new()),
            budget: Some(String::new()),
            status: Some("active".into()),
            ..ProjectFieldArgs::default()
        };
        let update = build_update(None, &fields).expect("update should build");
        assert_eq!(update.location, Some(None));
        assert_eq!(update.budget, Some(None));
        assert_eq!(update.status, Some(ProjectStatus::Active));
        assert_eq!(update.name, None);
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(build_update(Some(" "), &ProjectFieldArgs::default()).is_err());
    }
}
