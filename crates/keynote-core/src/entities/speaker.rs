use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Testimonial;

/// A bookable professional profile in the catalog. Shared reference data.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Speaker {
    pub id: String,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub expertise: Vec<String>,
    pub speaking_topics: Vec<String>,
    /// Whole US dollars, never below `vocab::MIN_FEE`.
    pub fee: i64,
    pub location: String,
    pub availability: Vec<String>,
    pub profile_image: Option<String>,
    pub video_url: Option<String>,
    pub years_experience: u32,
    pub languages: Vec<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a speaker: everything but the generated id and timestamps.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewSpeaker {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub expertise: Vec<String>,
    pub speaking_topics: Vec<String>,
    pub fee: i64,
    pub location: String,
    pub availability: Vec<String>,
    pub profile_image: Option<String>,
    pub video_url: Option<String>,
    pub years_experience: u32,
    pub languages: Vec<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
}

/// Speaker detail view: the profile plus its testimonials, newest first.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SpeakerWithTestimonials {
    #[serde(flatten)]
    pub speaker: Speaker,
    pub testimonials: Vec<Testimonial>,
}
