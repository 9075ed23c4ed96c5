use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AudienceSize, EventType, Industry, ProjectStatus};

/// A user-owned event-planning container grouping a speaker wishlist.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    /// Owning account.
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub budget: Option<i64>,
    pub audience_size: Option<AudienceSize>,
    pub event_type: Option<EventType>,
    pub industry: Option<Industry>,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a project. The owner comes from the session identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub budget: Option<i64>,
    pub audience_size: Option<AudienceSize>,
    pub event_type: Option<EventType>,
    pub industry: Option<Industry>,
    pub status: ProjectStatus,
}
