use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AudienceSize, EventType, Industry, QualificationStatus};

/// A lead-generation submission describing an event's speaker needs.
///
/// Created once by the qualification wizard; only admins change `status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QualificationRequest {
    pub id: String,
    pub organization_name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub event_type: EventType,
    pub industry: Industry,
    pub audience_size: AudienceSize,
    pub budget: i64,
    pub event_date: NaiveDate,
    pub location: String,
    pub topic_areas: Vec<String>,
    pub additional_requirements: Option<String>,
    pub status: QualificationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated wizard output, ready for insertion.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewQualificationRequest {
    pub organization_name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub event_type: EventType,
    pub industry: Industry,
    pub audience_size: AudienceSize,
    pub budget: i64,
    pub event_date: NaiveDate,
    pub location: String,
    pub topic_areas: Vec<String>,
    pub additional_requirements: Option<String>,
}
