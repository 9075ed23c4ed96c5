//! Admin-side speaker edits.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SpeakerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expertise: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaking_topics: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_experience: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<Option<String>>,
}

impl SpeakerUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.title.is_none()
            && self.bio.is_none()
            && self.expertise.is_none()
            && self.speaking_topics.is_none()
            && self.fee.is_none()
            && self.location.is_none()
            && self.availability.is_none()
            && self.profile_image.is_none()
            && self.video_url.is_none()
            && self.years_experience.is_none()
            && self.languages.is_none()
            && self.website.is_none()
            && self.linkedin.is_none()
            && self.twitter.is_none()
            && self.instagram.is_none()
    }
}

#[derive(Default)]
pub struct SpeakerUpdateBuilder(SpeakerUpdate);

impl SpeakerUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.0.bio = Some(bio.into());
        self
    }

    #[must_use]
    pub fn expertise(mut self, expertise: Vec<String>) -> Self {
        self.0.expertise = Some(expertise);
        self
    }

    #[must_use]
    pub fn speaking_topics(mut self, topics: Vec<String>) -> Self {
        self.0.speaking_topics = Some(topics);
        self
    }

    #[must_use]
    pub const fn fee(mut self, fee: i64) -> Self {
        self.0.fee = Some(fee);
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.0.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn availability(mut self, availability: Vec<String>) -> Self {
        self.0.availability = Some(availability);
        self
    }

    #[must_use]
    pub fn profile_image(mut self, url: Option<String>) -> Self {
        self.0.profile_image = Some(url);
        self
    }

    #[must_use]
    pub fn video_url(mut self, url: Option<String>) -> Self {
        self.0.video_url = Some(url);
        self
    }

    #[must_use]
    pub const fn years_experience(mut self, years: u32) -> Self {
        self.0.years_experience = Some(years);
        self
    }

    #[must_use]
    pub fn languages(mut self, languages: Vec<String>) -> Self {
        self.0.languages = Some(languages);
        self
    }

    #[must_use]
    pub fn website(mut self, url: Option<String>) -> Self {
        self.0.website = Some(url);
        self
    }

    #[must_use]
    pub fn linkedin(mut self, url: Option<String>) -> Self {
        self.0.linkedin = Some(url);
        self
    }

    #[must_use]
    pub fn twitter(mut self, handle: Option<String>) -> Self {
        self.0.twitter = Some(handle);
        self
    }

    #[must_use]
    pub fn instagram(mut self, handle: Option<String>) -> Self {
        self.0.instagram = Some(handle);
        self
    }

    #[must_use]
    pub fn build(self) -> SpeakerUpdate {
        self.0
    }
}
