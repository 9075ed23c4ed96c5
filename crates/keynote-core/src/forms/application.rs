//! Single-page speaker application form. Every field validates at once.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{FieldErrors, blank_to_none, collect, parse_amount, toggle};
use crate::entities::NewSpeaker;
use crate::errors::CoreError;
use crate::vocab::{self, EXPERTISE_OPTIONS, MIN_BIO_CHARS, MIN_FEE, split_list};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ApplicationFields {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub expertise: Vec<String>,
    /// Comma-separated.
    pub speaking_topics: String,
    pub fee: String,
    pub location: String,
    pub years_experience: String,
    /// Comma-separated.
    pub languages: String,
    pub website: String,
    pub linkedin: String,
    pub twitter: String,
    pub instagram: String,
    pub video_url: String,
}

impl Default for ApplicationFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            title: String::new(),
            bio: String::new(),
            expertise: Vec::new(),
            speaking_topics: String::new(),
            fee: MIN_FEE.to_string(),
            location: String::new(),
            years_experience: "0".into(),
            languages: "English".into(),
            website: String::new(),
            linkedin: String::new(),
            twitter: String::new(),
            instagram: String::new(),
            video_url: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ApplicationErrors {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub expertise: Option<String>,
    pub speaking_topics: Option<String>,
    pub fee: Option<String>,
    pub location: Option<String>,
    pub years_experience: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
}

impl FieldErrors for ApplicationErrors {
    fn messages(&self) -> Vec<(&'static str, &str)> {
        let mut out = Vec::new();
        collect(&mut out, "name", &self.name);
        collect(&mut out, "title", &self.title);
        collect(&mut out, "bio", &self.bio);
        collect(&mut out, "expertise", &self.expertise);
        collect(&mut out, "speaking_topics", &self.speaking_topics);
        collect(&mut out, "fee", &self.fee);
        collect(&mut out, "location", &self.location);
        collect(&mut out, "years_experience", &self.years_experience);
        collect(&mut out, "website", &self.website);
        collect(&mut out, "linkedin", &self.linkedin);
        out
    }
}

/// Years of experience; blank counts as zero.
fn parse_years(raw: &str) -> Result<u32, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    match trimmed.parse::<i64>() {
        Ok(n) if n < 0 => Err("Years of experience cannot be negative"),
        Ok(n) => u32::try_from(n).map_err(|_| "Years of experience is out of range"),
        Err(_) => Err("Years of experience must be a whole number"),
    }
}

impl ApplicationFields {
    #[must_use]
    pub fn validate(&self) -> ApplicationErrors {
        let mut errors = ApplicationErrors::default();
        if self.name.trim().is_empty() {
            errors.name = Some("Name is required".into());
        }
        if self.title.trim().is_empty() {
            errors.title = Some("Professional title is required".into());
        }
        if self.bio.trim().is_empty() {
            errors.bio = Some("Bio is required".into());
        } else if self.bio.chars().count() < MIN_BIO_CHARS {
            errors.bio = Some("Bio must be at least 100 characters".into());
        }
        if self.expertise.is_empty() {
            errors.expertise = Some("Please select at least one area of expertise".into());
        }
        if split_list(&self.speaking_topics).is_empty() {
            errors.speaking_topics = Some("Speaking topics are required".into());
        }
        if self.location.trim().is_empty() {
            errors.location = Some("Location is required".into());
        }
        if !parse_amount(&self.fee).is_some_and(|fee| fee >= MIN_FEE) {
            errors.fee = Some("Minimum speaking fee is $10,000".into());
        }
        if let Err(message) = parse_years(&self.years_experience) {
            errors.years_experience = Some(message.into());
        }
        let website = self.website.trim();
        if !website.is_empty() && !website.starts_with("http") {
            errors.website = Some("Website must be a valid URL".into());
        }
        let linkedin = self.linkedin.trim();
        if !linkedin.is_empty() && !linkedin.contains("linkedin.com") {
            errors.linkedin = Some("Please enter a valid LinkedIn URL".into());
        }
        errors
    }

    fn assemble(&self) -> Option<NewSpeaker> {
        Some(NewSpeaker {
            name: self.name.trim().to_string(),
            title: self.title.trim().to_string(),
            bio: self.bio.clone(),
            expertise: self.expertise.clone(),
            speaking_topics: split_list(&self.speaking_topics),
            fee: parse_amount(&self.fee)?,
            location: self.location.trim().to_string(),
            availability: Vec::new(),
            profile_image: None,
            video_url: blank_to_none(&self.video_url),
            years_experience: parse_years(&self.years_experience).ok()?,
            languages: split_list(&self.languages),
            website: blank_to_none(&self.website),
            linkedin: blank_to_none(&self.linkedin),
            twitter: blank_to_none(&self.twitter),
            instagram: blank_to_none(&self.instagram),
        })
    }
}

/// Application form state. Fields are public; the error record is owned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeakerApplicationForm {
    pub fields: ApplicationFields,
    errors: ApplicationErrors,
}

impl SpeakerApplicationForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn errors(&self) -> &ApplicationErrors {
        &self.errors
    }

    /// Select or deselect an expertise tag (toggle semantics).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for tags outside the expertise vocabulary.
    pub fn toggle_expertise(&mut self, raw: &str) -> Result<bool, CoreError> {
        let tag = vocab::canonical(EXPERTISE_OPTIONS, raw).ok_or_else(|| {
            CoreError::Validation(format!("Unknown area of expertise '{}'", raw.trim()))
        })?;
        self.errors.expertise = None;
        Ok(toggle(&mut self.fields.expertise, tag))
    }

    /// Validate every field and produce the insert payload.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` with the first failing message; the
    /// full error record is available through [`errors`](Self::errors).
    pub fn submit(&mut self) -> Result<NewSpeaker, CoreError> {
        self.errors = self.fields.validate();
        if let Some(message) = self.errors.first() {
            return Err(CoreError::Validation(message));
        }
        self.fields
            .assemble()
            .ok_or_else(|| CoreError::Validation("speaker application is incomplete".into()))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn valid() -> SpeakerApplicationForm {
        let mut form = SpeakerApplicationForm::new();
        form.fields.name = "Dr. Ada Obi".into();
        form.fields.title = "Futurist".into();
        form.fields.bio = "x".repeat(100);
        form.fields.speaking_topics = "Future of Work, , AI Ethics".into();
        form.fields.location = "Lagos".into();
        form.toggle_expertise("Technology").unwrap();
        form
    }

    #[test]
    fn defaults_prefill_fee_years_and_language() {
        let fields = ApplicationFields::default();
        assert_eq!(fields.fee, "10000");
        assert_eq!(fields.years_experience, "0");
        assert_eq!(fields.languages, "English");
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = ApplicationFields::default().validate();
        let fields: Vec<&str> = errors.messages().iter().map(|(f, _)| *f).collect();
        assert_eq!(
            fields,
            vec!["name", "title", "bio", "expertise", "speaking_topics", "location"]
        );
    }

    #[rstest]
    #[case(99, Some("Bio must be at least 100 characters"))]
    #[case(100, None)]
    fn bio_length_boundary(#[case] len: usize, #[case] expected: Option<&str>) {
        let mut form = valid();
        form.fields.bio = "b".repeat(len);
        assert_eq!(form.fields.validate().bio.as_deref(), expected);
    }

    #[test]
    fn bio_length_counts_characters_not_bytes() {
        let mut form = valid();
        form.fields.bio = "é".repeat(100);
        assert_eq!(form.fields.validate().bio, None);
    }

    #[test]
    fn toggling_expertise_twice_restores_selection() {
        let mut form = valid();
        let before = form.fields.expertise.clone();
        assert!(form.toggle_expertise("sports").unwrap());
        assert!(!form.toggle_expertise("Sports").unwrap());
        assert_eq!(form.fields.expertise, before);
    }

    #[test]
    fn unknown_expertise_is_rejected() {
        let mut form = valid();
        assert!(form.toggle_expertise("Astrology").is_err());
        assert_eq!(form.fields.expertise, vec!["Technology"]);
    }

    #[rstest]
    #[case("9999", true)]
    #[case("0", true)]
    #[case("lots", true)]
    #[case("", true)]
    #[case("10000", false)]
    #[case("$12,500", false)]
    fn fee_minimum(#[case] fee: &str, #[case] fails: bool) {
        let mut form = valid();
        form.fields.fee = fee.into();
        assert_eq!(form.fields.validate().fee.is_some(), fails);
    }

    #[rstest]
    #[case("-1", Some("Years of experience cannot be negative"))]
    #[case("seven", Some("Years of experience must be a whole number"))]
    #[case("", None)]
    #[case("12", None)]
    fn years_of_experience(#[case] raw: &str, #[case] expected: Option<&str>) {
        let mut form = valid();
        form.fields.years_experience = raw.into();
        assert_eq!(form.fields.validate().years_experience.as_deref(), expected);
    }

    #[test]
    fn link_rules() {
        let mut form = valid();
        form.fields.website = "www.example.com".into();
        form.fields.linkedin = "https://example.com/in/ada".into();
        let errors = form.fields.validate();
        assert_eq!(errors.website.as_deref(), Some("Website must be a valid URL"));
        assert_eq!(
            errors.linkedin.as_deref(),
            Some("Please enter a valid LinkedIn URL")
        );

        form.fields.website = "https://ada.example.com".into();
        form.fields.linkedin = "https://www.linkedin.com/in/ada".into();
        assert!(form.fields.validate().is_empty());
    }

    #[test]
    fn submit_splits_lists_and_blanks_optional_links() {
        let mut form = valid();
        form.fields.languages = "English, Yoruba,".into();
        form.fields.twitter = "  ".into();
        let speaker = form.submit().unwrap();
        assert_eq!(speaker.speaking_topics, vec!["Future of Work", "AI Ethics"]);
        assert_eq!(speaker.languages, vec!["English", "Yoruba"]);
        assert_eq!(speaker.fee, 10_000);
        assert_eq!(speaker.years_experience, 0);
        assert_eq!(speaker.twitter, None);
    }

    #[test]
    fn failed_submit_keeps_fields_and_records_errors() {
        let mut form = valid();
        form.fields.location = String::new();
        let err = form.submit().unwrap_err();
        assert!(err.to_string().contains("Location is required"));
        assert_eq!(form.fields.name, "Dr. Ada Obi");
        assert!(form.errors().location.is_some());
    }
}
