//! Project edits by the owner.

use chrono::NaiveDate;
use keynote_core::enums::{AudienceSize, EventType, Industry, ProjectStatus};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience_size: Option<Option<AudienceSize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<Option<EventType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<Option<Industry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
}

#[derive(Default)]
pub struct ProjectUpdateBuilder(ProjectUpdate);

impl ProjectUpdateBuilder {
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
    pub fn description(mut self, description: Option<String>) -> Self {
        self.0.description = Some(description);
        self
    }

    #[must_use]
    pub const fn event_date(mut self, date: Option<NaiveDate>) -> Self {
        self.0.event_date = Some(date);
        self
    }

    #[must_use]
    pub fn location(mut self, location: Option<String>) -> Self {
        self.0.location = Some(location);
        self
    }

    #[must_use]
    pub const fn budget(mut self, budget: Option<i64>) -> Self {
        self.0.budget = Some(budget);
        self
    }

    #[must_use]
    pub const fn audience_size(mut self, size: Option<AudienceSize>) -> Self {
        self.0.audience_size = Some(size);
        self
    }

    #[must_use]
    pub const fn event_type(mut self, event_type: Option<EventType>) -> Self {
        self.0.event_type = Some(event_type);
        self
    }

    #[must_use]
    pub const fn industry(mut self, industry: Option<Industry>) -> Self {
        self.0.industry = Some(industry);
        self
    }

    #[must_use]
    pub const fn status(mut self, status: ProjectStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn build(self) -> ProjectUpdate {
        self.0
    }
}
