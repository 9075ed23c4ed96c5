use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{WishlistPriority, WishlistStatus};

/// Association between a project and a speaker.
///
/// At most one entry exists per `(project_id, speaker_id)` pair.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WishlistEntry {
    pub id: String,
    pub project_id: String,
    pub speaker_id: String,
    pub status: WishlistStatus,
    pub priority: WishlistPriority,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public speaker fields joined onto a wishlist entry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SpeakerSummary {
    pub id: String,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub expertise: Vec<String>,
    pub fee: i64,
    pub location: String,
    pub profile_image: Option<String>,
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WishlistEntryWithSpeaker {
    #[serde(flatten)]
    pub entry: WishlistEntry,
    pub speaker: SpeakerSummary,
}
