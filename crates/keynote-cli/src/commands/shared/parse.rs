use keynote_core::enums::AudienceSize;
use keynote_core::forms::{parse_amount, parse_date};
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

pub fn parse_optional_enum<T>(raw: Option<&str>, field: &str) -> anyhow::Result<Option<T>>
where
    T: DeserializeOwned,
{
    raw.map(|value| parse_enum(value, field)).transpose()
}

pub fn parse_audience_size(raw: &str) -> anyhow::Result<AudienceSize> {
    AudienceSize::parse(raw).ok_or_else(|| {
        let known = AudienceSize::ALL
            .iter()
            .map(|size| size.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        anyhow::anyhow!("invalid audience size '{raw}': expected one of {known}")
    })
}

/// Update-flag semantics for nullable fields: absent leaves the value alone,
/// an empty string clears it.
#[must_use]
pub fn clearable(raw: Option<&str>) -> Option<Option<String>> {
    raw.map(|value| {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

/// Like [`clearable`] for a whole-dollar amount.
pub fn clearable_amount(raw: Option<&str>, field: &str) -> anyhow::Result<Option<Option<i64>>> {
    match clearable(raw) {
        None => Ok(None),
        Some(None) => Ok(Some(None)),
        Some(Some(value)) => parse_amount(&value)
            .map(|amount| Some(Some(amount)))
            .ok_or_else(|| anyhow::anyhow!("invalid {field} '{value}': expected a whole number")),
    }
}

/// Like [`clearable`] for a `YYYY-MM-DD` date.
pub fn clearable_date(
    raw: Option<&str>,
    field: &str,
) -> anyhow::Result<Option<Option<chrono::NaiveDate>>> {
    match clearable(raw) {
        None => Ok(None),
        Some(None) => Ok(Some(None)),
        Some(Some(value)) => parse_date(&value)
            .map(|date| Some(Some(date)))
            .ok_or_else(|| anyhow::anyhow!("invalid {field} '{value}': expected YYYY-MM-DD")),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use keynote_core::enums::{EventType, Industry, WishlistStatus};

    use super::*;

    #[test]
    fn parses_snake_case_enum() {
        let status: WishlistStatus = parse_enum("Confirmed", "status").expect("status should parse");
        assert_eq!(status, WishlistStatus::Confirmed);
    }

    #[test]
    fn parses_hyphenated_alias() {
        let event: EventType = parse_enum("corporate-event", "event type").expect("should parse");
        assert_eq!(event, EventType::CorporateEvent);
        let industry: Industry = parse_enum("non-profit", "industry").expect("should parse");
        assert_eq!(industry, Industry::Nonprofit);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<WishlistStatus>("booked", "status").expect_err("should fail");
        assert!(err.to_string().contains("invalid status 'booked'"));
    }

    #[test]
    fn audience_size_lists_known_buckets_on_error() {
        assert_eq!(parse_audience_size("1000+").ok(), Some(AudienceSize::Over1000));
        let err = parse_audience_size("huge").expect_err("should fail");
        assert!(err.to_string().contains("50-100"));
    }

    #[test]
    fn clearable_distinguishes_absent_from_empty() {
        assert_eq!(clearable(None), None);
        assert_eq!(clearable(Some("  ")), Some(None));
        assert_eq!(clearable(Some(" Berlin ")), Some(Some("Berlin".into())));
    }

    #[test]
    fn clearable_amount_and_date() {
        assert_eq!(clearable_amount(Some("$40,000"), "budget").ok(), Some(Some(Some(40_000))));
        assert_eq!(clearable_amount(Some(""), "budget").ok(), Some(Some(None)));
        assert!(clearable_amount(Some("lots"), "budget").is_err());
        assert_eq!(
            clearable_date(Some("2027-05-01"), "event date").ok(),
            Some(Some(NaiveDate::from_ymd_opt(2027, 5, 1)))
        );
        assert!(clearable_date(Some("May 1"), "event date").is_err());
    }
}
