//! Data-access wrappers for the presentation layer.
//!
//! Each wrapper calls one repository method and converts the `Result` into a
//! sentinel (`Option`, `bool`, `Vec`, or [`AddOutcome`]). Failures are logged
//! with full detail here; callers only show a generic retry message. A
//! missing row is not a failure and is logged at debug level.

use keynote_core::entities::{
    NewProject, NewQualificationRequest, NewSpeaker, Project, Speaker, SpeakerWithTestimonials,
    WishlistEntryWithSpeaker,
};
use keynote_core::enums::{WishlistPriority, WishlistStatus};
use keynote_core::filter::SpeakerPredicate;
use keynote_core::responses::{CatalogStats, ProjectStats};
use keynote_core::wishlist::{self, AddOutcome};

use crate::error::DatabaseError;
use crate::service::KeynoteService;
use crate::updates::project::ProjectUpdate;
use crate::updates::wishlist::{WishlistUpdate, WishlistUpdateBuilder};

fn logged<T>(operation: &'static str, result: Result<T, DatabaseError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(DatabaseError::NoResult) => {
            tracing::debug!(operation, "no matching row");
            None
        }
        Err(error) => {
            tracing::error!(operation, %error, "data access failed");
            None
        }
    }
}

/// Outcome of a single-row read where "no such row" must be told apart
/// from a backend failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    Missing,
    Failed,
}

impl<T> Lookup<T> {
    #[must_use]
    pub fn from_result(operation: &'static str, result: Result<T, DatabaseError>) -> Self {
        match result {
            Ok(value) => Self::Found(value),
            Err(DatabaseError::NoResult) => {
                tracing::debug!(operation, "no matching row");
                Self::Missing
            }
            Err(error) => {
                tracing::error!(operation, %error, "data access failed");
                Self::Failed
            }
        }
    }
}

pub struct Gateway<'a> {
    svc: &'a KeynoteService,
}

impl<'a> Gateway<'a> {
    #[must_use]
    pub const fn new(svc: &'a KeynoteService) -> Self {
        Self { svc }
    }

    // Catalog

    pub async fn speakers(&self, predicate: &SpeakerPredicate, limit: Option<u32>) -> Vec<Speaker> {
        logged("list_speakers", self.svc.list_speakers(predicate, limit).await).unwrap_or_default()
    }

    pub async fn speaker(&self, id: &str) -> Lookup<SpeakerWithTestimonials> {
        Lookup::from_result(
            "get_speaker_with_testimonials",
            self.svc.get_speaker_with_testimonials(id).await,
        )
    }

    pub async fn submit_application(&self, new: &NewSpeaker) -> bool {
        logged("submit_application", self.svc.submit_application(new).await).is_some()
    }

    pub async fn submit_qualification(&self, new: &NewQualificationRequest) -> bool {
        logged("submit_qualification", self.svc.submit_qualification(new).await).is_some()
    }

    // Projects

    pub async fn projects(&self, limit: Option<u32>) -> Vec<Project> {
        logged("list_projects", self.svc.list_projects(limit).await).unwrap_or_default()
    }

    pub async fn project(&self, id: &str) -> Option<Project> {
        logged("get_project", self.svc.get_project(id).await)
    }

    pub async fn create_project(&self, new: &NewProject) -> Option<Project> {
        logged("create_project", self.svc.create_project(new).await)
    }

    pub async fn update_project(&self, id: &str, update: ProjectUpdate) -> Option<Project> {
        logged("update_project", self.svc.update_project(id, update).await)
    }

    pub async fn delete_project(&self, id: &str) -> bool {
        logged("delete_project", self.svc.delete_project(id).await).is_some()
    }

    pub async fn project_stats(&self) -> ProjectStats {
        logged("project_stats", self.svc.project_stats().await).unwrap_or_default()
    }

    // Wishlists

    pub async fn wishlist(&self, project_id: &str) -> Vec<WishlistEntryWithSpeaker> {
        logged("list_wishlist", self.svc.list_wishlist(project_id).await).unwrap_or_default()
    }

    /// Add `speaker_id` to a project's wishlist.
    ///
    /// `loaded` is the wishlist the caller is showing; if it already contains
    /// the speaker no write is attempted. A stale `loaded` can still let a
    /// duplicate through, which the unique key turns into
    /// [`AddOutcome::Duplicate`].
    pub async fn add_speaker(
        &self,
        loaded: &[WishlistEntryWithSpeaker],
        project_id: &str,
        speaker_id: &str,
    ) -> AddOutcome {
        let Some(new) = wishlist::plan_add(loaded, project_id, speaker_id) else {
            return AddOutcome::AlreadyListed;
        };
        match self.svc.add_to_wishlist(&new).await {
            Ok(entry) => AddOutcome::Added { entry },
            Err(DatabaseError::Duplicate(detail)) => {
                tracing::warn!(project_id, speaker_id, %detail, "wishlist add raced an earlier add");
                AddOutcome::Duplicate
            }
            Err(error) => {
                tracing::error!(operation = "add_to_wishlist", %error, "data access failed");
                AddOutcome::Failed
            }
        }
    }

    async fn update_entry(&self, id: &str, update: WishlistUpdate) -> bool {
        logged(
            "update_wishlist_entry",
            self.svc.update_wishlist_entry(id, update).await,
        )
        .is_some()
    }

    pub async fn set_status(&self, id: &str, status: WishlistStatus) -> bool {
        self.update_entry(id, WishlistUpdateBuilder::new().status(status).build())
            .await
    }

    pub async fn set_priority(&self, id: &str, priority: WishlistPriority) -> bool {
        self.update_entry(id, WishlistUpdateBuilder::new().priority(priority).build())
            .await
    }

    pub async fn set_notes(&self, id: &str, notes: Option<String>) -> bool {
        self.update_entry(id, WishlistUpdateBuilder::new().notes(notes).build())
            .await
    }

    pub async fn remove(&self, id: &str) -> bool {
        logged("remove_from_wishlist", self.svc.remove_from_wishlist(id).await).is_some()
    }

    /// Catalog speakers not yet on the project's wishlist, filtered by name.
    pub async fn available_speakers(&self, project_id: &str, search: &str) -> Vec<Speaker> {
        let current = self.wishlist(project_id).await;
        let catalog = self.speakers(&SpeakerPredicate::match_all(), None).await;
        wishlist::available_speakers(&catalog, &current, search)
            .into_iter()
            .cloned()
            .collect()
    }

    // Admin

    pub async fn catalog_stats(&self) -> Option<CatalogStats> {
        logged("catalog_stats", self.svc.catalog_stats().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{
        member_identity, sample_project, seed_speaker, test_service, test_service_with_identity,
    };
    use keynote_core::filter::SpeakerFilterBuilder;

    #[tokio::test]
    async fn failures_become_sentinels() {
        // Anonymous: every owner-scoped call fails, and each wrapper returns its sentinel.
        let svc = test_service().await;
        let gw = Gateway::new(&svc);
        assert!(gw.projects(None).await.is_empty());
        assert!(gw.project("prj-00000000").await.is_none());
        assert!(gw.create_project(&sample_project("X")).await.is_none());
        assert!(!gw.delete_project("prj-00000000").await);
        assert_eq!(gw.project_stats().await, ProjectStats::default());
        assert!(gw.catalog_stats().await.is_none());
        assert_eq!(gw.speaker("spk-00000000").await, Lookup::Missing);
    }

    #[tokio::test]
    async fn speaker_lookup_keeps_missing_apart_from_failure() {
        let svc = test_service().await;
        let gw = Gateway::new(&svc);
        let ada = seed_speaker(&svc, "Ada", 12_000).await;

        let Lookup::Found(detail) = gw.speaker(&ada.id).await else {
            panic!("expected the seeded speaker");
        };
        assert_eq!(detail.speaker.id, ada.id);
        assert_eq!(gw.speaker("spk-ffffffff").await, Lookup::Missing);

        let broken: Result<u8, DatabaseError> = Err(DatabaseError::Query("disk I/O error".into()));
        assert_eq!(Lookup::from_result("get", broken), Lookup::<u8>::Failed);
        assert_eq!(
            Lookup::from_result("get", Err::<u8, _>(DatabaseError::NoResult)),
            Lookup::Missing
        );
    }

    #[tokio::test]
    async fn stale_list_double_add_yields_one_row() {
        let svc = test_service_with_identity(member_identity("acc-00000001")).await;
        let gw = Gateway::new(&svc);
        let project = svc.create_project(&sample_project("Summit")).await.unwrap();
        let speaker = seed_speaker(&svc, "Ada", 12_000).await;

        // Both callers loaded the wishlist before either add.
        let stale = gw.wishlist(&project.id).await;
        let first = gw.add_speaker(&stale, &project.id, &speaker.id).await;
        let second = gw.add_speaker(&stale, &project.id, &speaker.id).await;

        assert!(first.is_added());
        assert_eq!(second, AddOutcome::Duplicate);
        assert_eq!(gw.wishlist(&project.id).await.len(), 1);

        let fresh = gw.wishlist(&project.id).await;
        assert_eq!(
            gw.add_speaker(&fresh, &project.id, &speaker.id).await,
            AddOutcome::AlreadyListed
        );
    }

    #[tokio::test]
    async fn add_to_foreign_project_fails() {
        let svc = test_service_with_identity(member_identity("acc-00000001")).await;
        let gw = Gateway::new(&svc);
        let speaker = seed_speaker(&svc, "Ada", 12_000).await;
        assert_eq!(
            gw.add_speaker(&[], "prj-00000000", &speaker.id).await,
            AddOutcome::Failed
        );
    }

    #[tokio::test]
    async fn wishlist_edits_and_available() {
        let svc = test_service_with_identity(member_identity("acc-00000001")).await;
        let gw = Gateway::new(&svc);
        let project = svc.create_project(&sample_project("Summit")).await.unwrap();
        let ada = seed_speaker(&svc, "Ada Obi", 12_000).await;
        seed_speaker(&svc, "Adam Lee", 12_000).await;
        seed_speaker(&svc, "Ben Ode", 12_000).await;

        let AddOutcome::Added { entry } = gw.add_speaker(&[], &project.id, &ada.id).await else {
            panic!("expected add");
        };
        assert!(gw.set_status(&entry.id, WishlistStatus::Proposed).await);
        assert!(gw.set_priority(&entry.id, WishlistPriority::Low).await);
        assert!(gw.set_notes(&entry.id, Some("budget ok".into())).await);
        assert!(!gw.set_status("wsh-00000000", WishlistStatus::Proposed).await);

        let names: Vec<String> = gw
            .available_speakers(&project.id, "ad")
            .await
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Adam Lee"]);

        assert!(gw.remove(&entry.id).await);
        assert!(!gw.remove(&entry.id).await);
    }

    #[tokio::test]
    async fn speakers_wrapper_filters() {
        let svc = test_service().await;
        let gw = Gateway::new(&svc);
        seed_speaker(&svc, "Ada", 12_000).await;
        seed_speaker(&svc, "Ben", 30_000).await;
        let predicate = SpeakerFilterBuilder::new().budget("25k+").build();
        let found = gw.speakers(&predicate, None).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Ben");
        assert!(gw.submit_application(&crate::test_support::helpers::sample_speaker("Cy", 11_000)).await);
    }
}
