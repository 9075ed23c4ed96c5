//! Profile fields an account holder may edit.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Option<String>>,
}

#[derive(Default)]
pub struct ProfileUpdateBuilder(ProfileUpdate);

impl ProfileUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn full_name(mut self, value: Option<String>) -> Self {
        self.0.full_name = Some(value);
        self
    }

    #[must_use]
    pub fn company(mut self, value: Option<String>) -> Self {
        self.0.company = Some(value);
        self
    }

    #[must_use]
    pub fn title(mut self, value: Option<String>) -> Self {
        self.0.title = Some(value);
        self
    }

    #[must_use]
    pub fn phone(mut self, value: Option<String>) -> Self {
        self.0.phone = Some(value);
        self
    }

    #[must_use]
    pub fn build(self) -> ProfileUpdate {
        self.0
    }
}
