//! Wishlist workflow: add defaults, the client-side duplicate guard, and
//! the "available speakers" view.
//!
//! The guard only consults the wishlist the caller already loaded, so two
//! concurrent adds can both pass it. The database's unique
//! `(project_id, speaker_id)` key is what actually prevents duplicates; a
//! violation comes back as [`AddOutcome::Duplicate`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Speaker, WishlistEntry, WishlistEntryWithSpeaker};
use crate::enums::{WishlistPriority, WishlistStatus};
use crate::filter::fold_case;

/// Insert payload for a wishlist entry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewWishlistEntry {
    pub project_id: String,
    pub speaker_id: String,
    pub status: WishlistStatus,
    pub priority: WishlistPriority,
    pub notes: Option<String>,
}

impl NewWishlistEntry {
    /// New entry with status `interested` and priority `medium`.
    #[must_use]
    pub fn new(project_id: impl Into<String>, speaker_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            speaker_id: speaker_id.into(),
            status: WishlistStatus::default(),
            priority: WishlistPriority::default(),
            notes: None,
        }
    }
}

/// Result of an add attempt as seen by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AddOutcome {
    Added { entry: WishlistEntry },
    /// The loaded wishlist already had the speaker; no call was made.
    AlreadyListed,
    /// The database rejected the pair as a duplicate.
    Duplicate,
    /// Any other backend failure. Details were logged.
    Failed,
}

impl AddOutcome {
    #[must_use]
    pub const fn is_added(&self) -> bool {
        matches!(self, Self::Added { .. })
    }

    /// User-facing message for the outcome.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Added { .. } => "Speaker added to wishlist",
            Self::AlreadyListed | Self::Duplicate => "Speaker is already on this wishlist",
            Self::Failed => "Could not add speaker. Please try again.",
        }
    }
}

/// Client-side guard: is `speaker_id` already on the loaded wishlist?
#[must_use]
pub fn is_listed(wishlist: &[WishlistEntryWithSpeaker], speaker_id: &str) -> bool {
    wishlist.iter().any(|item| item.entry.speaker_id == speaker_id)
}

/// Decide whether an add should reach the backend.
///
/// Returns `None` when the loaded wishlist already contains the speaker.
#[must_use]
pub fn plan_add(
    wishlist: &[WishlistEntryWithSpeaker],
    project_id: &str,
    speaker_id: &str,
) -> Option<NewWishlistEntry> {
    if is_listed(wishlist, speaker_id) {
        None
    } else {
        Some(NewWishlistEntry::new(project_id, speaker_id))
    }
}

/// Catalog speakers not yet on the wishlist whose name contains `search`
/// (case-insensitive). Blank search matches every name.
#[must_use]
pub fn available_speakers<'a>(
    catalog: &'a [Speaker],
    wishlist: &[WishlistEntryWithSpeaker],
    search: &str,
) -> Vec<&'a Speaker> {
    let needle = fold_case(search.trim());
    catalog
        .iter()
        .filter(|speaker| !is_listed(wishlist, &speaker.id))
        .filter(|speaker| needle.is_empty() || fold_case(&speaker.name).contains(&needle))
        .collect()
}

/// Order entries for display: highest priority first, newest first within a
/// priority.
pub fn sort_for_display(wishlist: &mut [WishlistEntryWithSpeaker]) {
    wishlist.sort_by(|a, b| {
        a.entry
            .priority
            .rank()
            .cmp(&b.entry.priority.rank())
            .then_with(|| b.entry.created_at.cmp(&a.entry.created_at))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::SpeakerSummary;
    use chrono::{Duration, Utc};
    use pretty_assertions::assert_eq;

    fn speaker(id: &str, name: &str) -> Speaker {
        Speaker {
            id: id.into(),
            name: name.into(),
            title: "Speaker".into(),
            bio: String::new(),
            expertise: vec![],
            speaking_topics: vec![],
            fee: 12_000,
            location: "Remote".into(),
            availability: vec![],
            profile_image: None,
            video_url: None,
            years_experience: 3,
            languages: vec![],
            website: None,
            linkedin: None,
            twitter: None,
            instagram: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn listed(id: &str, speaker: &Speaker, priority: WishlistPriority) -> WishlistEntryWithSpeaker {
        WishlistEntryWithSpeaker {
            entry: WishlistEntry {
                id: id.into(),
                project_id: "prj-1".into(),
                speaker_id: speaker.id.clone(),
                status: WishlistStatus::Interested,
                priority,
                notes: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            speaker: SpeakerSummary {
                id: speaker.id.clone(),
                name: speaker.name.clone(),
                title: speaker.title.clone(),
                bio: speaker.bio.clone(),
                expertise: speaker.expertise.clone(),
                fee: speaker.fee,
                location: speaker.location.clone(),
                profile_image: None,
                video_url: None,
            },
        }
    }

    #[test]
    fn new_entry_defaults() {
        let entry = NewWishlistEntry::new("prj-1", "spk-1");
        assert_eq!(entry.status, WishlistStatus::Interested);
        assert_eq!(entry.priority, WishlistPriority::Medium);
        assert_eq!(entry.notes, None);
    }

    #[test]
    fn guard_skips_already_listed_speaker() {
        let ada = speaker("spk-1", "Ada");
        let wishlist = vec![listed("wsh-1", &ada, WishlistPriority::Medium)];
        assert!(plan_add(&wishlist, "prj-1", "spk-1").is_none());
        assert!(plan_add(&wishlist, "prj-1", "spk-2").is_some());
    }

    #[test]
    fn stale_wishlist_lets_both_adds_through() {
        // Two tabs loaded the same empty wishlist; neither sees the other's add.
        let stale: Vec<WishlistEntryWithSpeaker> = Vec::new();
        let first = plan_add(&stale, "prj-1", "spk-1");
        let second = plan_add(&stale, "prj-1", "spk-1");
        assert_eq!(first, second);
        assert!(first.is_some());
    }

    #[test]
    fn available_excludes_listed_and_filters_by_name() {
        let catalog = vec![
            speaker("spk-1", "Ada Obi"),
            speaker("spk-2", "Adam Lee"),
            speaker("spk-3", "Ben Ode"),
        ];
        let wishlist = vec![listed("wsh-1", &catalog[0], WishlistPriority::Low)];

        let all: Vec<&str> = available_speakers(&catalog, &wishlist, " ")
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(all, vec!["spk-2", "spk-3"]);

        let ad: Vec<&str> = available_speakers(&catalog, &wishlist, "AD")
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ad, vec!["spk-2"]);
    }

    #[test]
    fn display_order_is_priority_then_newest() {
        let a = speaker("spk-1", "A");
        let b = speaker("spk-2", "B");
        let c = speaker("spk-3", "C");
        let mut old_high = listed("wsh-1", &a, WishlistPriority::High);
        old_high.entry.created_at -= Duration::hours(1);
        let mut wishlist = vec![
            listed("wsh-3", &c, WishlistPriority::Low),
            old_high,
            listed("wsh-2", &b, WishlistPriority::High),
        ];
        sort_for_display(&mut wishlist);
        let ids: Vec<&str> = wishlist.iter().map(|w| w.entry.id.as_str()).collect();
        assert_eq!(ids, vec!["wsh-2", "wsh-1", "wsh-3"]);
    }

    #[test]
    fn outcome_messages() {
        assert!(!AddOutcome::Duplicate.is_added());
        assert_eq!(
            AddOutcome::Duplicate.message(),
            AddOutcome::AlreadyListed.message()
        );
    }
}
