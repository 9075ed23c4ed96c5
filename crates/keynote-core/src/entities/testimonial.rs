use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Client feedback attached to a speaker.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Testimonial {
    pub id: String,
    pub speaker_id: String,
    pub client_name: String,
    pub client_company: Option<String>,
    pub content: String,
    /// 1 through 5.
    pub rating: u8,
    pub event_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewTestimonial {
    pub speaker_id: String,
    pub client_name: String,
    pub client_company: Option<String>,
    pub content: String,
    pub rating: u8,
    pub event_type: Option<String>,
}
