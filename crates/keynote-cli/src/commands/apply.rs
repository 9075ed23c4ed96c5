use keynote_core::entities::NewSpeaker;
use keynote_core::forms::{FieldErrors, SpeakerApplicationForm};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ApplicationArgs;
use crate::commands::RETRY_MESSAGE;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ApplicationResponse {
    submitted: bool,
    name: String,
    message: &'static str,
}

/// Handle `keynote apply`. Open to everyone; no sign-in needed.
pub async fn handle(
    args: &ApplicationArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let new = validated_application(args)?;
    if !ctx.gateway().submit_application(&new).await {
        anyhow::bail!("could not submit your application: {RETRY_MESSAGE}");
    }
    output(
        &ApplicationResponse {
            submitted: true,
            name: new.name,
            message: "Thanks for applying. We'll review your profile and be in touch.",
        },
        flags.format,
    )
}

/// Fill the application form from flags and validate every field at once.
pub fn validated_application(args: &ApplicationArgs) -> anyhow::Result<NewSpeaker> {
    let mut form = SpeakerApplicationForm::new();
    for tag in &args.expertise {
        form.toggle_expertise(tag)?;
    }

    let fields = &mut form.fields;
    fields.name.clone_from(&args.name);
    fields.title.clone_from(&args.title);
    fields.bio.clone_from(&args.bio);
    fields.speaking_topics.clone_from(&args.topics);
    fields.location.clone_from(&args.location);
    if let Some(fee) = &args.fee {
        fields.fee.clone_from(fee);
    }
    if let Some(years) = &args.years {
        fields.years_experience.clone_from(years);
    }
    if let Some(languages) = &args.languages {
        fields.languages.clone_from(languages);
    }
    let optional = [
        (&mut fields.website, &args.website),
        (&mut fields.linkedin, &args.linkedin),
        (&mut fields.twitter, &args.twitter),
        (&mut fields.instagram, &args.instagram),
        (&mut fields.video_url, &args.video_url),
    ];
    for (slot, value) in optional {
        if let Some(value) = value {
            slot.clone_from(value);
        }
    }

    match form.submit() {
        Ok(new) => Ok(new),
        Err(_) => Err(field_report(form.errors())),
    }
}

/// One line per failing field.
pub fn field_report(errors: &impl FieldErrors) -> anyhow::Error {
    let lines = errors
        .messages()
        .into_iter()
        .map(|(field, message)| format!("  {field}: {message}"))
        .collect::<Vec<_>>()
        .join("\n");
    anyhow::anyhow!("please fix the following:\n{lines}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args() -> ApplicationArgs {
        ApplicationArgs {
            name: "Dr. Ada Obi".into(),
            title: "Futurist".into(),
            bio: "b".repeat(100),
            expertise: vec!["technology".into()],
            topics: "Future of Work, AI Ethics".into(),
            fee: None,
            location: "Lagos".into(),
            years: Some("12".into()),
            languages: None,
            website: Some("https://ada.example.com".into()),
            linkedin: None,
            twitter: None,
            instagram: None,
            video_url: None,
        }
    }

    #[test]
    fn valid_flags_produce_speaker_with_defaults() {
        let new = validated_application(&args()).expect("application should validate");
        assert_eq!(new.fee, 10_000);
        assert_eq!(new.years_experience, 12);
        assert_eq!(new.languages, vec!["English".to_string()]);
        assert_eq!(new.expertise, vec!["Technology".to_string()]);
        assert_eq!(new.speaking_topics.len(), 2);
    }

    #[test]
    fn every_failing_field_is_reported() {
        let mut a = args();
        a.name = String::new();
        a.bio = "b".repeat(99);
        a.fee = Some("9999".into());
        let err = validated_application(&a).expect_err("should fail");
        let text = err.to_string();
        assert!(text.contains("name:"), "{text}");
        assert!(text.contains("bio:"), "{text}");
        assert!(text.contains("fee:"), "{text}");
    }

    #[test]
    fn unknown_expertise_tag_is_rejected() {
        let mut a = args();
        a.expertise = vec!["Juggling".into()];
        let err = validated_application(&a).expect_err("should fail");
        assert!(err.to_string().contains("Juggling"));
    }
}
