use keynote_core::entities::NewQualificationRequest;
use keynote_core::enums::{EventType, Industry};
use keynote_core::forms::{QualificationErrors, QualificationForm, WizardStep};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::QualifyArgs;
use crate::commands::RETRY_MESSAGE;
use crate::commands::apply::field_report;
use crate::commands::shared::parse::{parse_audience_size, parse_optional_enum};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct QualifyResponse {
    submitted: bool,
    organization_name: String,
    steps_completed: u8,
    message: &'static str,
}

/// Handle `keynote qualify`. Open to everyone; no sign-in needed.
pub async fn handle(args: &QualifyArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let new = complete_wizard(args)?;
    if !ctx.gateway().submit_qualification(&new).await {
        anyhow::bail!("could not submit your request: {RETRY_MESSAGE}");
    }
    output(
        &QualifyResponse {
            submitted: true,
            organization_name: new.organization_name,
            steps_completed: WizardStep::COUNT,
            message: "Request received. Our team will contact you with matching speakers.",
        },
        flags.format,
    )
}

/// Walk the wizard step by step with the given flags.
///
/// Stops at the first step that fails, reporting only that step's fields.
pub fn complete_wizard(args: &QualifyArgs) -> anyhow::Result<NewQualificationRequest> {
    let mut form = QualificationForm::new();

    form.set_organization_name(&args.organization);
    form.set_contact_email(&args.email);
    if let Some(phone) = &args.phone {
        form.set_contact_phone(phone);
    }
    advance(&mut form)?;

    form.set_event_type(parse_optional_enum::<EventType>(
        args.event_type.as_deref(),
        "event type",
    )?);
    form.set_industry(parse_optional_enum::<Industry>(
        args.industry.as_deref(),
        "industry",
    )?);
    form.set_audience_size(
        args.audience_size
            .as_deref()
            .map(parse_audience_size)
            .transpose()?,
    );
    advance(&mut form)?;

    form.set_budget(&args.budget);
    form.set_event_date(&args.date);
    form.set_location(&args.location);
    advance(&mut form)?;

    let mut seen: Vec<String> = Vec::new();
    for topic in &args.topic {
        let key = topic.trim().to_ascii_lowercase();
        if !seen.contains(&key) {
            form.toggle_topic(topic)?;
            seen.push(key);
        }
    }
    if let Some(requirements) = &args.requirements {
        form.set_additional_requirements(requirements);
    }

    let step = form.step();
    match form.submit() {
        Ok(new) => Ok(new),
        Err(_) => Err(step_report(step, form.errors())),
    }
}

fn advance(form: &mut QualificationForm) -> anyhow::Result<()> {
    let step = form.step();
    if form.next() {
        Ok(())
    } else {
        Err(step_report(step, form.errors()))
    }
}

fn step_report(step: WizardStep, errors: &QualificationErrors) -> anyhow::Error {
    field_report(errors).context(format!(
        "step {} of {} ({})",
        step.number(),
        WizardStep::COUNT,
        step.title()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use keynote_core::enums::AudienceSize;
    use pretty_assertions::assert_eq;

    fn args() -> QualifyArgs {
        QualifyArgs {
            organization: "Acme Corp".into(),
            email: "events@acme.com".into(),
            phone: None,
            event_type: Some("conference".into()),
            industry: Some("technology".into()),
            audience_size: Some("250-500".into()),
            budget: "10000".into(),
            date: "2026-11-03".into(),
            location: "Chicago, IL".into(),
            topic: vec!["leadership".into()],
            requirements: None,
        }
    }

    fn report(a: &QualifyArgs) -> String {
        format!("{:#}", complete_wizard(a).expect_err("should fail"))
    }

    #[test]
    fn complete_flags_submit() {
        let new = complete_wizard(&args()).expect("wizard should complete");
        assert_eq!(new.organization_name, "Acme Corp");
        assert_eq!(new.audience_size, AudienceSize::UpTo500);
        assert_eq!(new.budget, 10_000);
        assert_eq!(new.event_date, NaiveDate::from_ymd_opt(2026, 11, 3).unwrap());
        assert_eq!(new.topic_areas, vec!["Leadership".to_string()]);
    }

    #[test]
    fn first_failing_step_is_reported_alone() {
        let mut a = args();
        a.email = "not-an-email".into();
        a.budget = "5".into();
        let text = report(&a);
        assert!(text.starts_with("step 1 of 4 (Contact Information)"), "{text}");
        assert!(text.contains("contact_email: Please enter a valid email"));
        assert!(!text.contains("budget"));
    }

    #[test]
    fn missing_event_type_stops_at_step_two() {
        let mut a = args();
        a.event_type = None;
        let text = report(&a);
        assert!(text.starts_with("step 2 of 4"), "{text}");
        assert!(text.contains("Event type is required"));
    }

    #[test]
    fn budget_below_minimum_is_rejected() {
        let mut a = args();
        a.budget = "9999".into();
        let text = report(&a);
        assert!(text.contains("Minimum budget is $10,000"), "{text}");
    }

    #[test]
    fn no_topics_fails_final_step() {
        let mut a = args();
        a.topic.clear();
        let text = report(&a);
        assert!(text.starts_with("step 4 of 4"), "{text}");
    }

    #[test]
    fn repeated_topic_is_selected_once() {
        let mut a = args();
        a.topic = vec!["Leadership".into(), "leadership".into()];
        let new = complete_wizard(&a).expect("wizard should complete");
        assert_eq!(new.topic_areas, vec!["Leadership".to_string()]);
    }
}
