//! Project create/edit form.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{FieldErrors, blank_to_none, collect, parse_amount, parse_date};
use crate::entities::NewProject;
use crate::enums::{AudienceSize, EventType, Industry, ProjectStatus};
use crate::errors::CoreError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProjectForm {
    pub name: String,
    pub description: String,
    pub event_date: String,
    pub location: String,
    pub budget: String,
    pub audience_size: Option<AudienceSize>,
    pub event_type: Option<EventType>,
    pub industry: Option<Industry>,
    pub status: ProjectStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProjectErrors {
    pub name: Option<String>,
    pub event_date: Option<String>,
    pub budget: Option<String>,
}

impl FieldErrors for ProjectErrors {
    fn messages(&self) -> Vec<(&'static str, &str)> {
        let mut out = Vec::new();
        collect(&mut out, "name", &self.name);
        collect(&mut out, "event_date", &self.event_date);
        collect(&mut out, "budget", &self.budget);
        out
    }
}

impl ProjectForm {
    #[must_use]
    pub fn validate(&self) -> ProjectErrors {
        let mut errors = ProjectErrors::default();
        if self.name.trim().is_empty() {
            errors.name = Some("Project name is required".into());
        }
        if !self.event_date.trim().is_empty() && parse_date(&self.event_date).is_none() {
            errors.event_date = Some("Event date must be a valid date (YYYY-MM-DD)".into());
        }
        if !self.budget.trim().is_empty() {
            match parse_amount(&self.budget) {
                None => errors.budget = Some("Budget must be a whole number".into()),
                Some(n) if n < 0 => errors.budget = Some("Budget cannot be negative".into()),
                Some(_) => {}
            }
        }
        errors
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` with the first failing field.
    pub fn to_new_project(&self) -> Result<NewProject, CoreError> {
        if let Some(message) = self.validate().first() {
            return Err(CoreError::Validation(message));
        }
        Ok(NewProject {
            name: self.name.trim().to_string(),
            description: blank_to_none(&self.description),
            event_date: parse_date(&self.event_date),
            location: blank_to_none(&self.location),
            budget: parse_amount(&self.budget),
            audience_size: self.audience_size,
            event_type: self.event_type,
            industry: self.industry,
            status: self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_the_only_required_field() {
        let form = ProjectForm {
            name: "Annual Summit".into(),
            ..Default::default()
        };
        let project = form.to_new_project().unwrap();
        assert_eq!(project.name, "Annual Summit");
        assert_eq!(project.status, ProjectStatus::Planning);
        assert_eq!(project.budget, None);
        assert_eq!(project.event_date, None);
    }

    #[test]
    fn blank_name_fails() {
        let form = ProjectForm::default();
        assert_eq!(
            form.validate().name.as_deref(),
            Some("Project name is required")
        );
        assert!(form.to_new_project().is_err());
    }

    #[test]
    fn optional_fields_are_checked_when_present() {
        let form = ProjectForm {
            name: "Kickoff".into(),
            event_date: "soon".into(),
            budget: "-10".into(),
            ..Default::default()
        };
        let errors = form.validate();
        assert!(errors.event_date.is_some());
        assert_eq!(errors.budget.as_deref(), Some("Budget cannot be negative"));
    }
}
