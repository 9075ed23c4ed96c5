//! Four-step event qualification wizard.
//!
//! ```text
//! ContactInfo → EventDetails → BudgetLogistics → TopicsRequirements → submit
//! ```
//!
//! `next` advances only when the current step validates; `back` always
//! succeeds and never validates. Editing a field clears that field's error.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{FieldErrors, blank_to_none, collect, is_valid_email, parse_amount, parse_date, toggle};
use crate::entities::NewQualificationRequest;
use crate::enums::{AudienceSize, EventType, Industry};
use crate::errors::CoreError;
use crate::vocab::{self, MIN_FEE, TOPIC_OPTIONS};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    ContactInfo,
    EventDetails,
    BudgetLogistics,
    TopicsRequirements,
}

impl WizardStep {
    pub const FIRST: Self = Self::ContactInfo;
    pub const LAST: Self = Self::TopicsRequirements;
    pub const COUNT: u8 = 4;

    /// 1-based position.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::ContactInfo => 1,
            Self::EventDetails => 2,
            Self::BudgetLogistics => 3,
            Self::TopicsRequirements => 4,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ContactInfo => "Contact Information",
            Self::EventDetails => "Event Details",
            Self::BudgetLogistics => "Budget & Logistics",
            Self::TopicsRequirements => "Topics & Requirements",
        }
    }

    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::ContactInfo => Some(Self::EventDetails),
            Self::EventDetails => Some(Self::BudgetLogistics),
            Self::BudgetLogistics => Some(Self::TopicsRequirements),
            Self::TopicsRequirements => None,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Option<Self> {
        match self {
            Self::ContactInfo => None,
            Self::EventDetails => Some(Self::ContactInfo),
            Self::BudgetLogistics => Some(Self::EventDetails),
            Self::TopicsRequirements => Some(Self::BudgetLogistics),
        }
    }
}

/// Raw wizard inputs, one field per control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct QualificationFields {
    pub organization_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub event_type: Option<EventType>,
    pub industry: Option<Industry>,
    pub audience_size: Option<AudienceSize>,
    pub budget: String,
    pub event_date: String,
    pub location: String,
    pub topic_areas: Vec<String>,
    pub additional_requirements: String,
}

/// Per-field messages, same shape as the validated subset of [`QualificationFields`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct QualificationErrors {
    pub organization_name: Option<String>,
    pub contact_email: Option<String>,
    pub event_type: Option<String>,
    pub industry: Option<String>,
    pub audience_size: Option<String>,
    pub budget: Option<String>,
    pub event_date: Option<String>,
    pub location: Option<String>,
    pub topic_areas: Option<String>,
}

impl FieldErrors for QualificationErrors {
    fn messages(&self) -> Vec<(&'static str, &str)> {
        let mut out = Vec::new();
        collect(&mut out, "organization_name", &self.organization_name);
        collect(&mut out, "contact_email", &self.contact_email);
        collect(&mut out, "event_type", &self.event_type);
        collect(&mut out, "industry", &self.industry);
        collect(&mut out, "audience_size", &self.audience_size);
        collect(&mut out, "budget", &self.budget);
        collect(&mut out, "event_date", &self.event_date);
        collect(&mut out, "location", &self.location);
        collect(&mut out, "topic_areas", &self.topic_areas);
        out
    }
}

fn required(message: &str) -> Option<String> {
    Some(message.to_string())
}

impl QualificationFields {
    /// Validate only the fields owned by `step`.
    #[must_use]
    pub fn validate_step(&self, step: WizardStep) -> QualificationErrors {
        let mut errors = QualificationErrors::default();
        match step {
            WizardStep::ContactInfo => {
                if self.organization_name.trim().is_empty() {
                    errors.organization_name = required("Organization name is required");
                }
                if self.contact_email.trim().is_empty() {
                    errors.contact_email = required("Email is required");
                } else if !is_valid_email(&self.contact_email) {
                    errors.contact_email = required("Please enter a valid email");
                }
            }
            WizardStep::EventDetails => {
                if self.event_type.is_none() {
                    errors.event_type = required("Event type is required");
                }
                if self.industry.is_none() {
                    errors.industry = required("Industry is required");
                }
                if self.audience_size.is_none() {
                    errors.audience_size = required("Audience size is required");
                }
            }
            WizardStep::BudgetLogistics => {
                if self.budget.trim().is_empty() {
                    errors.budget = required("Budget is required");
                } else {
                    match parse_amount(&self.budget) {
                        None => errors.budget = required("Budget must be a whole number"),
                        Some(amount) if amount < MIN_FEE => {
                            errors.budget = required("Minimum budget is $10,000");
                        }
                        Some(_) => {}
                    }
                }
                if self.event_date.trim().is_empty() {
                    errors.event_date = required("Event date is required");
                } else if parse_date(&self.event_date).is_none() {
                    errors.event_date = required("Event date must be a valid date (YYYY-MM-DD)");
                }
                if self.location.trim().is_empty() {
                    errors.location = required("Event location is required");
                }
            }
            WizardStep::TopicsRequirements => {
                if self.topic_areas.is_empty() {
                    errors.topic_areas = required("Please select at least one topic area");
                }
            }
        }
        errors
    }

    /// Build the insert payload, or `None` if any required field is unusable.
    fn assemble(&self) -> Option<NewQualificationRequest> {
        Some(NewQualificationRequest {
            organization_name: self.organization_name.trim().to_string(),
            contact_email: self.contact_email.trim().to_string(),
            contact_phone: blank_to_none(&self.contact_phone),
            event_type: self.event_type?,
            industry: self.industry?,
            audience_size: self.audience_size?,
            budget: parse_amount(&self.budget)?,
            event_date: parse_date(&self.event_date)?,
            location: self.location.trim().to_string(),
            topic_areas: self.topic_areas.clone(),
            additional_requirements: blank_to_none(&self.additional_requirements),
        })
    }
}

/// Wizard state: current step, inputs, and the error record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QualificationForm {
    step: WizardStep,
    fields: QualificationFields,
    errors: QualificationErrors,
}

impl QualificationForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    #[must_use]
    pub const fn fields(&self) -> &QualificationFields {
        &self.fields
    }

    #[must_use]
    pub const fn errors(&self) -> &QualificationErrors {
        &self.errors
    }

    pub fn set_organization_name(&mut self, val: impl Into<String>) {
        self.fields.organization_name = val.into();
        self.errors.organization_name = None;
    }

    pub fn set_contact_email(&mut self, val: impl Into<String>) {
        self.fields.contact_email = val.into();
        self.errors.contact_email = None;
    }

    pub fn set_contact_phone(&mut self, val: impl Into<String>) {
        self.fields.contact_phone = val.into();
    }

    pub fn set_event_type(&mut self, val: Option<EventType>) {
        self.fields.event_type = val;
        self.errors.event_type = None;
    }

    pub fn set_industry(&mut self, val: Option<Industry>) {
        self.fields.industry = val;
        self.errors.industry = None;
    }

    pub fn set_audience_size(&mut self, val: Option<AudienceSize>) {
        self.fields.audience_size = val;
        self.errors.audience_size = None;
    }

    pub fn set_budget(&mut self, val: impl Into<String>) {
        self.fields.budget = val.into();
        self.errors.budget = None;
    }

    pub fn set_event_date(&mut self, val: impl Into<String>) {
        self.fields.event_date = val.into();
        self.errors.event_date = None;
    }

    pub fn set_location(&mut self, val: impl Into<String>) {
        self.fields.location = val.into();
        self.errors.location = None;
    }

    pub fn set_additional_requirements(&mut self, val: impl Into<String>) {
        self.fields.additional_requirements = val.into();
    }

    /// Select or deselect a topic from the fixed vocabulary.
    ///
    /// Returns whether the topic is selected afterwards.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `raw` is not in the topic vocabulary.
    pub fn toggle_topic(&mut self, raw: &str) -> Result<bool, CoreError> {
        let topic = vocab::canonical(TOPIC_OPTIONS, raw)
            .ok_or_else(|| CoreError::Validation(format!("Unknown topic area '{}'", raw.trim())))?;
        self.errors.topic_areas = None;
        Ok(toggle(&mut self.fields.topic_areas, topic))
    }

    /// Validate the current step and advance if it passes.
    ///
    /// Returns `true` when the step changed. On the last step this only
    /// validates.
    pub fn next(&mut self) -> bool {
        let errors = self.fields.validate_step(self.step);
        let ok = errors.is_empty();
        self.errors = errors;
        if !ok {
            return false;
        }
        match self.step.next() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Go back one step without validating. No-op on the first step.
    pub fn back(&mut self) {
        if let Some(step) = self.step.prev() {
            self.step = step;
        }
    }

    /// Re-validate the final step and produce the insert payload.
    ///
    /// The form is left untouched apart from its error record; callers
    /// [`reset`](Self::reset) it once the payload has been persisted.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if called before the last step, or if
    /// any field fails validation.
    pub fn submit(&mut self) -> Result<NewQualificationRequest, CoreError> {
        if self.step != WizardStep::LAST {
            return Err(CoreError::Validation(format!(
                "complete step {} of {} before submitting",
                self.step.number(),
                WizardStep::COUNT
            )));
        }
        let errors = self.fields.validate_step(WizardStep::LAST);
        if let Some(message) = errors.first() {
            self.errors = errors;
            return Err(CoreError::Validation(message));
        }

        // Earlier steps can be edited after they were passed.
        let mut step = Some(WizardStep::FIRST);
        while let Some(current) = step {
            let errors = self.fields.validate_step(current);
            if let Some(message) = errors.first() {
                self.errors = errors;
                return Err(CoreError::Validation(message));
            }
            step = current.next();
        }

        self.fields
            .assemble()
            .ok_or_else(|| CoreError::Validation("qualification form is incomplete".into()))
    }

    /// Clear every field and error and return to step 1.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
