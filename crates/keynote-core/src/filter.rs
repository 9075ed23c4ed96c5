//! Speaker catalog filter builder.
//!
//! Turns loosely-typed user selections (free text, a topic, a budget bucket,
//! and a few admin-side refinements) into a [`SpeakerPredicate`]. The
//! predicate is a pure description: `keynote-db` compiles it to SQL, and
//! [`SpeakerPredicate::matches`] evaluates it in memory. Free text and
//! location are compared after [`fold_case`] on both sides, so accented
//! names match regardless of case.
//!
//! Tags come from fixed ASCII vocabularies and compare with ASCII folding.
//!
//! Absent or blank selections impose no constraint. A predicate with no
//! constraints matches every speaker.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Speaker;
use crate::enums::BudgetBucket;

/// Selector value meaning "no constraint" for topic and budget pickers.
const ALL_SELECTOR: &str = "all";

/// Speaker text fields covered by free-text search, OR-ed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    Name,
    Title,
    Bio,
}

impl SearchField {
    pub const ALL: &'static [Self] = &[Self::Name, Self::Title, Self::Bio];

    /// Column in the `speakers` table holding [`fold_case`] of this field.
    #[must_use]
    pub const fn folded_column(self) -> &'static str {
        match self {
            Self::Name => "name_folded",
            Self::Title => "title_folded",
            Self::Bio => "bio_folded",
        }
    }

    fn value(self, speaker: &Speaker) -> &str {
        match self {
            Self::Name => &speaker.name,
            Self::Title => &speaker.title,
            Self::Bio => &speaker.bio,
        }
    }
}

/// Inclusive fee range. `None` on either side means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FeeRange {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl FeeRange {
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    #[must_use]
    pub const fn contains(&self, fee: i64) -> bool {
        let above = match self.min {
            Some(min) => fee >= min,
            None => true,
        };
        let below = match self.max {
            Some(max) => fee <= max,
            None => true,
        };
        above && below
    }

    /// Narrow this range by another; the result satisfies both.
    #[must_use]
    pub fn intersect(self, other: Self) -> Self {
        let min = match (self.min, other.min) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        let max = match (self.max, other.max) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        Self { min, max }
    }
}

impl From<BudgetBucket> for FeeRange {
    fn from(bucket: BudgetBucket) -> Self {
        Self {
            min: Some(bucket.min_fee()),
            max: bucket.max_fee(),
        }
    }
}

/// Structured description of which speakers to return.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SpeakerPredicate {
    /// Case-folded search needle, matched as a substring of any
    /// [`SearchField`].
    pub text: Option<String>,
    /// Speaker matches if any expertise tag equals any of these (case-folded).
    pub expertise_any: Vec<String>,
    /// Speaker matches if any speaking topic equals any of these (case-folded).
    pub speaking_topics_any: Vec<String>,
    pub fee: FeeRange,
    /// Case-folded location substring.
    pub location: Option<String>,
}

impl SpeakerPredicate {
    /// A predicate that matches every speaker.
    #[must_use]
    pub fn match_all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_match_all(&self) -> bool {
        self.text.is_none()
            && self.expertise_any.is_empty()
            && self.speaking_topics_any.is_empty()
            && self.fee.is_unbounded()
            && self.location.is_none()
    }

    /// Evaluate the predicate against one speaker.
    #[must_use]
    pub fn matches(&self, speaker: &Speaker) -> bool {
        if let Some(needle) = &self.text {
            let hit = SearchField::ALL
                .iter()
                .any(|field| fold_case(field.value(speaker)).contains(needle.as_str()));
            if !hit {
                return false;
            }
        }
        if !overlaps(&speaker.expertise, &self.expertise_any) {
            return false;
        }
        if !overlaps(&speaker.speaking_topics, &self.speaking_topics_any) {
            return false;
        }
        if !self.fee.contains(speaker.fee) {
            return false;
        }
        if let Some(location) = &self.location
            && !fold_case(&speaker.location).contains(location.as_str())
        {
            return false;
        }
        true
    }

    /// Filter and sort a loaded catalog.
    #[must_use]
    pub fn apply(&self, speakers: Vec<Speaker>) -> Vec<Speaker> {
        let mut matched: Vec<Speaker> = speakers.into_iter().filter(|s| self.matches(s)).collect();
        sort_by_name(&mut matched);
        matched
    }
}

/// Unicode lowercase used for every case-insensitive text comparison.
///
/// The database stores this form of name, title, bio, and location next to
/// the originals, so SQL and [`SpeakerPredicate::matches`] compare the same strings.
#[must_use]
pub fn fold_case(raw: &str) -> String {
    raw.to_lowercase()
}

/// Stable ascending sort by folded name, then by name. Same order as
/// `ORDER BY name_folded, name` in the catalog query.
pub fn sort_by_name(speakers: &mut [Speaker]) {
    speakers.sort_by_cached_key(|s| (fold_case(&s.name), s.name.clone()));
}

/// Empty `wanted` imposes no constraint.
fn overlaps(tags: &[String], wanted: &[String]) -> bool {
    wanted.is_empty()
        || tags
            .iter()
            .any(|tag| wanted.iter().any(|w| tag.eq_ignore_ascii_case(w)))
}

/// Normalize a free-text selection: blank becomes `None`.
fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Builder collecting raw user selections.
///
/// ```
/// use keynote_core::filter::SpeakerFilterBuilder;
///
/// let predicate = SpeakerFilterBuilder::new()
///     .search("  Growth ")
///     .topic("Leadership")
///     .budget("15k-25k")
///     .build();
/// assert_eq!(predicate.text.as_deref(), Some("growth"));
/// assert_eq!(predicate.fee.min, Some(15_001));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SpeakerFilterBuilder {
    search: Option<String>,
    topic: Option<String>,
    budget: Option<BudgetBucket>,
    location: Option<String>,
    fee: FeeRange,
    speaking_topics: Vec<String>,
    expertise: Vec<String>,
}

impl SpeakerFilterBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text search over name, title, and bio. Blank means no filter.
    #[must_use]
    pub fn search(mut self, val: &str) -> Self {
        self.search = non_blank(val);
        self
    }

    /// Single topic matched against expertise tags. Blank or `"all"` means no filter.
    #[must_use]
    pub fn topic(mut self, val: &str) -> Self {
        self.topic = non_blank(val).filter(|t| !t.eq_ignore_ascii_case(ALL_SELECTOR));
        self
    }

    /// Budget bucket selector. Unrecognized values are ignored.
    #[must_use]
    pub fn budget(mut self, val: &str) -> Self {
        self.budget = BudgetBucket::parse(val);
        self
    }

    #[must_use]
    pub const fn budget_bucket(mut self, val: Option<BudgetBucket>) -> Self {
        self.budget = val;
        self
    }

    #[must_use]
    pub fn location(mut self, val: &str) -> Self {
        self.location = non_blank(val);
        self
    }

    #[must_use]
    pub const fn min_fee(mut self, val: i64) -> Self {
        self.fee.min = Some(val);
        self
    }

    #[must_use]
    pub const fn max_fee(mut self, val: i64) -> Self {
        self.fee.max = Some(val);
        self
    }

    #[must_use]
    pub fn speaking_topics<I, S>(mut self, vals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.speaking_topics
            .extend(vals.into_iter().filter_map(|v| non_blank(v.as_ref())));
        self
    }

    #[must_use]
    pub fn expertise<I, S>(mut self, vals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.expertise
            .extend(vals.into_iter().filter_map(|v| non_blank(v.as_ref())));
        self
    }

    #[must_use]
    pub fn build(self) -> SpeakerPredicate {
        let mut expertise_any = self.expertise;
        if let Some(topic) = self.topic {
            expertise_any.push(topic);
        }
        let fee = match self.budget {
            Some(bucket) => FeeRange::from(bucket).intersect(self.fee),
            None => self.fee,
        };
        SpeakerPredicate {
            text: self.search.as_deref().map(fold_case),
            expertise_any,
            speaking_topics_any: self.speaking_topics,
            fee,
            location: self.location.as_deref().map(fold_case),
        }
    }
}
