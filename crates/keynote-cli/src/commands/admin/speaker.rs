use keynote_core::forms::parse_amount;
use keynote_core::vocab::split_list;
use keynote_db::updates::speaker::{SpeakerUpdate, SpeakerUpdateBuilder};
use serde::Serialize;

use super::describe;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::ApplicationArgs;
use crate::cli::subcommands::AdminCommands;
use crate::commands::apply::validated_application;
use crate::commands::shared::parse::clearable;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct DeleteResponse<'a> {
    id: &'a str,
    deleted: bool,
}

/// Same validation as a public application, but written straight to the catalog.
pub async fn create(args: &ApplicationArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let new = validated_application(args)?;
    let speaker = ctx
        .service
        .create_speaker(&new)
        .await
        .map_err(|error| describe(error, "speaker", &new.name))?;
    tracing::info!(speaker_id = %speaker.id, "speaker created");
    output(&speaker, flags.format)
}

pub async fn update(
    id: &str,
    update: SpeakerUpdate,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let speaker = ctx
        .service
        .update_speaker(id, update)
        .await
        .map_err(|error| describe(error, "speaker", id))?;
    output(&speaker, flags.format)
}

pub async fn delete(id: &str, yes: bool, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !yes {
        anyhow::bail!(
            "deleting speaker '{id}' also removes their testimonials and wishlist entries; \
             re-run with --yes to confirm"
        );
    }
    ctx.service
        .delete_speaker(id)
        .await
        .map_err(|error| describe(error, "speaker", id))?;
    output(&DeleteResponse { id, deleted: true }, flags.format)
}

/// Collect the `speaker-update` flags. Lists replace the stored list whole.
pub fn build_update(action: &AdminCommands) -> anyhow::Result<SpeakerUpdate> {
    let AdminCommands::SpeakerUpdate {
        name,
        title,
        bio,
        expertise,
        topics,
        fee,
        location,
        availability,
        years,
        languages,
        website,
        linkedin,
        twitter,
        instagram,
        video_url,
        profile_image,
        ..
    } = action
    else {
        anyhow::bail!("not a speaker update");
    };

    let mut builder = SpeakerUpdateBuilder::new();
    for (value, field) in [(name, "name"), (title, "title"), (bio, "bio"), (location, "location")] {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            anyhow::bail!("{field} cannot be blank");
        }
    }
    if let Some(name) = name {
        builder = builder.name(name.trim());
    }
    if let Some(title) = title {
        builder = builder.title(title.trim());
    }
    if let Some(bio) = bio {
        builder = builder.bio(bio.trim());
    }
    if !expertise.is_empty() {
        builder = builder.expertise(expertise.iter().map(|e| e.trim().to_string()).collect());
    }
    if let Some(topics) = topics {
        builder = builder.speaking_topics(split_list(topics));
    }
    if let Some(raw) = fee {
        let Some(amount) = parse_amount(raw) else {
            anyhow::bail!("invalid fee '{raw}': expected a whole number");
        };
        builder = builder.fee(amount);
    }
    if let Some(location) = location {
        builder = builder.location(location.trim());
    }
    if let Some(availability) = availability {
        builder = builder.availability(split_list(availability));
    }
    if let Some(years) = years {
        builder = builder.years_experience(*years);
    }
    if let Some(languages) = languages {
        builder = builder.languages(split_list(languages));
    }
    if let Some(website) = clearable(website.as_deref()) {
        if website.as_deref().is_some_and(|url| !url.starts_with("http")) {
            anyhow::bail!("website must start with http");
        }
        builder = builder.website(website);
    }
    if let Some(url) = clearable(linkedin.as_deref()) {
        if url.as_deref().is_some_and(|url| !url.contains("linkedin.com")) {
            anyhow::bail!("Please enter a valid LinkedIn URL");
        }
        builder = builder.linkedin(url);
    }
    if let Some(handle) = clearable(twitter.as_deref()) {
        builder = builder.twitter(handle);
    }
    if let Some(handle) = clearable(instagram.as_deref()) {
        builder = builder.instagram(handle);
    }
    if let Some(url) = clearable(video_url.as_deref()) {
        builder = builder.video_url(url);
    }
    if let Some(url) = clearable(profile_image.as_deref()) {
        builder = builder.profile_image(url);
    }

    let update = builder.build();
    if update.is_empty() {
        anyhow::bail!("nothing to update; pass at least one field flag");
    }
    Ok(update)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn blank() -> AdminCommands {
        AdminCommands::SpeakerUpdate {
            id: "spk-1".into(),
            name: None,
            title: None,
            bio: None,
            expertise: Vec::new(),
            topics: None,
            fee: None,
            location: None,
            availability: None,
            years: None,
            languages: None,
            website: None,
            linkedin: None,
            twitter: None,
            instagram: None,
            video_url: None,
            profile_image: None,
        }
    }

    #[test]
    fn empty_update_is_rejected() {
        let error = build_update(&blank()).expect_err("no flags");
        assert!(error.to_string().contains("nothing to update"));
    }

    #[test]
    fn lists_split_and_urls_clear() {
        let mut action = blank();
        if let AdminCommands::SpeakerUpdate {
            topics,
            fee,
            website,
            ..
        } = &mut action
        {
            *topics = Some("Leadership, AI ,".into());
            *fee = Some("$15,000".into());
            *website = Some(String::new());
        }
        let update = build_update(&action).expect("valid update");
        assert_eq!(
            update.speaking_topics,
            Some(vec!["Leadership".to_string(), "AI".to_string()])
        );
        assert_eq!(update.fee, Some(15_000));
        assert_eq!(update.website, Some(None));
        assert_eq!(update.video_url, None);
    }

    #[test]
    fn social_links_set_and_clear() {
        let mut action = blank();
        if let AdminCommands::SpeakerUpdate {
            linkedin,
            twitter,
            instagram,
            ..
        } = &mut action
        {
            *linkedin = Some("https://www.linkedin.com/in/ada".into());
            *twitter = Some(" ".into());
            *instagram = Some("ada.speaks".into());
        }
        let update = build_update(&action).expect("valid update");
        assert_eq!(
            update.linkedin,
            Some(Some("https://www.linkedin.com/in/ada".to_string()))
        );
        assert_eq!(update.twitter, Some(None));
        assert_eq!(update.instagram, Some(Some("ada.speaks".to_string())));
    }

    #[test]
    fn linkedin_must_point_at_linkedin() {
        let mut action = blank();
        if let AdminCommands::SpeakerUpdate { linkedin, .. } = &mut action {
            *linkedin = Some("https://example.com/ada".into());
        }
        let error = build_update(&action).expect_err("wrong host");
        assert_eq!(error.to_string(), "Please enter a valid LinkedIn URL");
    }

    #[test]
    fn non_numeric_fee_fails() {
        let mut action = blank();
        if let AdminCommands::SpeakerUpdate { fee, .. } = &mut action {
            *fee = Some("lots".into());
        }
        assert!(build_update(&action).is_err());
    }

    #[test]
    fn blank_name_fails() {
        let mut action = blank();
        if let AdminCommands::SpeakerUpdate { name, .. } = &mut action {
            *name = Some("  ".into());
        }
        let error = build_update(&action).expect_err("blank name");
        assert_eq!(error.to_string(), "name cannot be blank");
    }
}
