//! Typed form state with parallel error records.
//!
//! Each form is an explicit record with one field per input, paired with an
//! error record of the same shape (`Option<String>` per validated field).
//! Validation never touches the backend; a form only yields an insert
//! payload once its error record is empty.

pub mod application;
pub mod credentials;
pub mod project;
pub mod qualification;

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

pub use application::{ApplicationErrors, ApplicationFields, SpeakerApplicationForm};
pub use credentials::{CredentialErrors, Credentials, CredentialsForm};
pub use project::{ProjectErrors, ProjectForm};
pub use qualification::{QualificationErrors, QualificationFields, QualificationForm, WizardStep};

/// Basic `text@text.text` shape. Deliberately loose; deliverability is not checked.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("Invalid EMAIL_REGEX pattern"));

/// Uniform read access to a form's error record.
pub trait FieldErrors {
    /// `(field, message)` pairs for every failing field, in form order.
    fn messages(&self) -> Vec<(&'static str, &str)>;

    fn is_empty(&self) -> bool {
        self.messages().is_empty()
    }

    /// First failing message, used when a single line of feedback is needed.
    fn first(&self) -> Option<String> {
        self.messages()
            .first()
            .map(|(field, message)| format!("{field}: {message}"))
    }
}

#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_REGEX.is_match(raw.trim())
}

/// Parse a whole-dollar amount. Accepts an optional `$` and `,` separators.
#[must_use]
pub fn parse_amount(raw: &str) -> Option<i64> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<i64>().ok()
}

/// Parse an ISO `YYYY-MM-DD` date.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Trim and map blank input to `None`.
#[must_use]
pub fn blank_to_none(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Toggle `tag` in `selected`: remove it if present, append it otherwise.
///
/// Returns `true` if the tag is selected afterwards.
pub(crate) fn toggle(selected: &mut Vec<String>, tag: &str) -> bool {
    if let Some(pos) = selected.iter().position(|t| t == tag) {
        selected.remove(pos);
        false
    } else {
        selected.push(tag.to_string());
        true
    }
}

/// Push `(name, message)` when the error slot is set.
pub(crate) fn collect<'a>(
    out: &mut Vec<(&'static str, &'a str)>,
    name: &'static str,
    slot: &'a Option<String>,
) {
    if let Some(message) = slot {
        out.push((name, message.as_str()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ada@example.com", true)]
    #[case("  ada@mail.example.org ", true)]
    #[case("ada@example", false)]
    #[case("ada.example.com", false)]
    #[case("", false)]
    #[case("a b@c.d", true)]
    fn email_pattern(#[case] raw: &str, #[case] ok: bool) {
        assert_eq!(is_valid_email(raw), ok);
    }

    #[rstest]
    #[case("10000", Some(10_000))]
    #[case(" $25,000 ", Some(25_000))]
    #[case("-5", Some(-5))]
    #[case("ten", None)]
    #[case("", None)]
    #[case("12.5", None)]
    fn amount_parsing(#[case] raw: &str, #[case] expected: Option<i64>) {
        assert_eq!(parse_amount(raw), expected);
    }

    #[test]
    fn date_parsing() {
        assert_eq!(
            parse_date("2026-11-03"),
            NaiveDate::from_ymd_opt(2026, 11, 3)
        );
        assert_eq!(parse_date("11/03/2026"), None);
    }

    #[test]
    fn toggle_twice_restores_selection() {
        let mut selected = vec!["Leadership".to_string()];
        assert!(toggle(&mut selected, "Sales"));
        assert!(!toggle(&mut selected, "Sales"));
        assert_eq!(selected, vec!["Leadership".to_string()]);
    }
}
