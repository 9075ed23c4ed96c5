//! Status enums, priorities, and selection vocabularies for Keynote.
//!
//! Stored enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Bucket vocabularies (audience size, budget) keep their display strings as
//! their wire form. Every consumption site matches exhaustively, so adding a
//! variant forces updating the badge colors and labels below.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// BadgeColor
// ---------------------------------------------------------------------------

/// Display color attached to a status or priority badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BadgeColor {
    Blue,
    Yellow,
    Purple,
    Green,
    Red,
}

impl BadgeColor {
    /// ANSI SGR foreground code for terminal rendering.
    #[must_use]
    pub const fn ansi_code(self) -> &'static str {
        match self {
            Self::Blue => "34",
            Self::Yellow => "33",
            Self::Purple => "35",
            Self::Green => "32",
            Self::Red => "31",
        }
    }
}

// ---------------------------------------------------------------------------
// ProjectStatus
// ---------------------------------------------------------------------------

/// Lifecycle of a user-owned event project.
///
/// Transitions are unconstrained: the owner may set any status at any time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Planning,
    Active,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    pub const ALL: &'static [Self] = &[
        Self::Planning,
        Self::Active,
        Self::Completed,
        Self::Cancelled,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    #[must_use]
    pub const fn badge(self) -> BadgeColor {
        match self {
            Self::Planning => BadgeColor::Yellow,
            Self::Active => BadgeColor::Blue,
            Self::Completed => BadgeColor::Green,
            Self::Cancelled => BadgeColor::Red,
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// WishlistStatus
// ---------------------------------------------------------------------------

/// Outreach status of a speaker on a project wishlist.
///
/// ```text
/// interested ⇄ contacted ⇄ proposed ⇄ confirmed ⇄ declined
/// ```
///
/// Any status may move to any other; human coordination decides what is
/// valid for the business. No history is kept.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum WishlistStatus {
    #[default]
    Interested,
    Contacted,
    Proposed,
    Confirmed,
    Declined,
}

impl WishlistStatus {
    pub const ALL: &'static [Self] = &[
        Self::Interested,
        Self::Contacted,
        Self::Proposed,
        Self::Confirmed,
        Self::Declined,
    ];

    /// Every status is reachable from every status.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        Self::ALL
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Interested => "interested",
            Self::Contacted => "contacted",
            Self::Proposed => "proposed",
            Self::Confirmed => "confirmed",
            Self::Declined => "declined",
        }
    }

    #[must_use]
    pub const fn badge(self) -> BadgeColor {
        match self {
            Self::Interested => BadgeColor::Blue,
            Self::Contacted => BadgeColor::Yellow,
            Self::Proposed => BadgeColor::Purple,
            Self::Confirmed => BadgeColor::Green,
            Self::Declined => BadgeColor::Red,
        }
    }
}

impl fmt::Display for WishlistStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// WishlistPriority
// ---------------------------------------------------------------------------

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum WishlistPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl WishlistPriority {
    pub const ALL: &'static [Self] = &[Self::High, Self::Medium, Self::Low];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    #[must_use]
    pub const fn badge(self) -> BadgeColor {
        match self {
            Self::High => BadgeColor::Red,
            Self::Medium => BadgeColor::Yellow,
            Self::Low => BadgeColor::Green,
        }
    }

    /// Sort key, highest priority first.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

impl fmt::Display for WishlistPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// QualificationStatus
// ---------------------------------------------------------------------------

/// Review status of a submitted qualification request.
///
/// Visitors never change it; new submissions always start as `new`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum QualificationStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Closed,
}

impl QualificationStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Qualified => "qualified",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for QualificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EventType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Conference,
    #[serde(alias = "corporate-event")]
    CorporateEvent,
    Summit,
    Workshop,
    Webinar,
    Other,
}

impl EventType {
    pub const ALL: &'static [Self] = &[
        Self::Conference,
        Self::CorporateEvent,
        Self::Summit,
        Self::Workshop,
        Self::Webinar,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Conference => "conference",
            Self::CorporateEvent => "corporate_event",
            Self::Summit => "summit",
            Self::Workshop => "workshop",
            Self::Webinar => "webinar",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Conference => "Conference",
            Self::CorporateEvent => "Corporate Event",
            Self::Summit => "Summit",
            Self::Workshop => "Workshop",
            Self::Webinar => "Webinar",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Industry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Technology,
    Healthcare,
    Finance,
    Education,
    Manufacturing,
    Retail,
    #[serde(alias = "non-profit", alias = "non_profit")]
    Nonprofit,
    Other,
}

impl Industry {
    pub const ALL: &'static [Self] = &[
        Self::Technology,
        Self::Healthcare,
        Self::Finance,
        Self::Education,
        Self::Manufacturing,
        Self::Retail,
        Self::Nonprofit,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Healthcare => "healthcare",
            Self::Finance => "finance",
            Self::Education => "education",
            Self::Manufacturing => "manufacturing",
            Self::Retail => "retail",
            Self::Nonprofit => "nonprofit",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Healthcare => "Healthcare",
            Self::Finance => "Finance",
            Self::Education => "Education",
            Self::Manufacturing => "Manufacturing",
            Self::Retail => "Retail",
            Self::Nonprofit => "Non-profit",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AudienceSize
// ---------------------------------------------------------------------------

/// Expected attendance bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum AudienceSize {
    #[serde(rename = "50-100")]
    UpTo100,
    #[serde(rename = "100-250")]
    UpTo250,
    #[serde(rename = "250-500")]
    UpTo500,
    #[serde(rename = "500-1000")]
    UpTo1000,
    #[serde(rename = "1000+")]
    Over1000,
}

impl AudienceSize {
    pub const ALL: &'static [Self] = &[
        Self::UpTo100,
        Self::UpTo250,
        Self::UpTo500,
        Self::UpTo1000,
        Self::Over1000,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UpTo100 => "50-100",
            Self::UpTo250 => "100-250",
            Self::UpTo500 => "250-500",
            Self::UpTo1000 => "500-1000",
            Self::Over1000 => "1000+",
        }
    }

    /// Look up a bucket by its display string.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|size| size.as_str() == raw.trim())
    }
}

impl fmt::Display for AudienceSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BudgetBucket
// ---------------------------------------------------------------------------

/// Coarse speaker-fee range used by the catalog filter.
///
/// ```text
/// 10k-15k  →  10000 ..= 15000
/// 15k-25k  →  15001 ..= 25000
/// 25k+     →  25001 ..
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum BudgetBucket {
    #[serde(rename = "10k-15k")]
    From10kTo15k,
    #[serde(rename = "15k-25k")]
    From15kTo25k,
    #[serde(rename = "25k+")]
    Over25k,
}

impl BudgetBucket {
    pub const ALL: &'static [Self] = &[Self::From10kTo15k, Self::From15kTo25k, Self::Over25k];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::From10kTo15k => "10k-15k",
            Self::From15kTo25k => "15k-25k",
            Self::Over25k => "25k+",
        }
    }

    /// Parse a selector value. Unknown values (including `"all"`) yield
    /// `None`, which callers treat as "no fee constraint".
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|bucket| bucket.as_str().eq_ignore_ascii_case(raw.trim()))
    }

    /// Inclusive lower bound.
    #[must_use]
    pub const fn min_fee(self) -> i64 {
        match self {
            Self::From10kTo15k => 10_000,
            Self::From15kTo25k => 15_001,
            Self::Over25k => 25_001,
        }
    }

    /// Inclusive upper bound; `None` means unbounded.
    #[must_use]
    pub const fn max_fee(self) -> Option<i64> {
        match self {
            Self::From10kTo15k => Some(15_000),
            Self::From15kTo25k => Some(25_000),
            Self::Over25k => None,
        }
    }

    #[must_use]
    pub const fn contains(self, fee: i64) -> bool {
        match self.max_fee() {
            Some(max) => fee >= self.min_fee() && fee <= max,
            None => fee >= self.min_fee(),
        }
    }
}

impl fmt::Display for BudgetBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn wishlist_status_transitions_are_unconstrained() {
        for from in WishlistStatus::ALL {
            for to in WishlistStatus::ALL {
                assert!(from.can_transition_to(*to), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn defaults_match_new_entries() {
        assert_eq!(ProjectStatus::default(), ProjectStatus::Planning);
        assert_eq!(WishlistStatus::default(), WishlistStatus::Interested);
        assert_eq!(WishlistPriority::default(), WishlistPriority::Medium);
        assert_eq!(QualificationStatus::default(), QualificationStatus::New);
    }

    #[rstest]
    #[case(WishlistStatus::Interested, BadgeColor::Blue)]
    #[case(WishlistStatus::Contacted, BadgeColor::Yellow)]
    #[case(WishlistStatus::Proposed, BadgeColor::Purple)]
    #[case(WishlistStatus::Confirmed, BadgeColor::Green)]
    #[case(WishlistStatus::Declined, BadgeColor::Red)]
    fn wishlist_status_badges(#[case] status: WishlistStatus, #[case] color: BadgeColor) {
        assert_eq!(status.badge(), color);
    }

    #[test]
    fn priority_and_project_badges() {
        assert_eq!(WishlistPriority::High.badge(), BadgeColor::Red);
        assert_eq!(WishlistPriority::Medium.badge(), BadgeColor::Yellow);
        assert_eq!(WishlistPriority::Low.badge(), BadgeColor::Green);
        assert_eq!(ProjectStatus::Planning.badge(), BadgeColor::Yellow);
        assert_eq!(ProjectStatus::Active.badge(), BadgeColor::Blue);
        assert_eq!(ProjectStatus::Completed.badge(), BadgeColor::Green);
        assert_eq!(ProjectStatus::Cancelled.badge(), BadgeColor::Red);
    }

    #[test]
    fn as_str_matches_serde() {
        for status in WishlistStatus::ALL {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
        for size in AudienceSize::ALL {
            let json = serde_json::to_string(size).unwrap();
            assert_eq!(json, format!("\"{}\"", size.as_str()));
        }
        for bucket in BudgetBucket::ALL {
            let json = serde_json::to_string(bucket).unwrap();
            assert_eq!(json, format!("\"{}\"", bucket.as_str()));
        }
        for event in EventType::ALL {
            let json = serde_json::to_string(event).unwrap();
            assert_eq!(json, format!("\"{}\"", event.as_str()));
        }
    }

    #[test]
    fn hyphenated_aliases_deserialize() {
        let event: EventType = serde_json::from_str("\"corporate-event\"").unwrap();
        assert_eq!(event, EventType::CorporateEvent);
        let industry: Industry = serde_json::from_str("\"non-profit\"").unwrap();
        assert_eq!(industry, Industry::Nonprofit);
    }

    #[rstest]
    #[case("10k-15k", Some(BudgetBucket::From10kTo15k))]
    #[case("15K-25K", Some(BudgetBucket::From15kTo25k))]
    #[case(" 25k+ ", Some(BudgetBucket::Over25k))]
    #[case("all", None)]
    #[case("", None)]
    #[case("5k-10k", None)]
    fn budget_bucket_parse(#[case] raw: &str, #[case] expected: Option<BudgetBucket>) {
        assert_eq!(BudgetBucket::parse(raw), expected);
    }

    #[rstest]
    #[case(9_999, None)]
    #[case(10_000, Some(BudgetBucket::From10kTo15k))]
    #[case(15_000, Some(BudgetBucket::From10kTo15k))]
    #[case(15_001, Some(BudgetBucket::From15kTo25k))]
    #[case(25_000, Some(BudgetBucket::From15kTo25k))]
    #[case(25_001, Some(BudgetBucket::Over25k))]
    #[case(250_000, Some(BudgetBucket::Over25k))]
    fn budget_bucket_bounds_are_inclusive_and_disjoint(
        #[case] fee: i64,
        #[case] expected: Option<BudgetBucket>,
    ) {
        let matching: Vec<BudgetBucket> = BudgetBucket::ALL
            .iter()
            .copied()
            .filter(|bucket| bucket.contains(fee))
            .collect();
        assert_eq!(matching, expected.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn audience_size_parse() {
        assert_eq!(AudienceSize::parse("1000+"), Some(AudienceSize::Over1000));
        assert_eq!(AudienceSize::parse("50-100"), Some(AudienceSize::UpTo100));
        assert_eq!(AudienceSize::parse("huge"), None);
    }
}
