//! Owner scoping across accounts, using the public sign-up flow.

use keynote_core::entities::NewProject;
use keynote_core::forms::Credentials;
use keynote_core::wishlist::NewWishlistEntry;
use keynote_db::error::DatabaseError;
use keynote_db::gateway::Gateway;
use keynote_db::service::KeynoteService;
use keynote_db::updates::project::ProjectUpdateBuilder;

async fn service_with_two_accounts() -> (KeynoteService, keynote_core::identity::AuthIdentity, keynote_core::identity::AuthIdentity) {
    let svc = KeynoteService::new_local(":memory:", None).await.unwrap();
    let mut identities = Vec::new();
    for email in ["owner@example.com", "other@example.com"] {
        let account = svc
            .sign_up(
                &Credentials {
                    email: email.into(),
                    password: "secret1".into(),
                    full_name: None,
                },
                false,
            )
            .await
            .unwrap();
        identities.push(account.to_identity());
    }
    let other = identities.pop().unwrap();
    let owner = identities.pop().unwrap();
    (svc, owner, other)
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[tokio::test]
async fn other_accounts_cannot_see_or_touch_projects() {
    let (mut svc, owner, other) = service_with_two_accounts().await;

    svc.set_identity(Some(owner.clone()));
    let project = svc
        .create_project(&NewProject {
            name: "Summit".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(project.user_id, owner.user_id);

    svc.set_identity(Some(other));
    assert!(svc.list_projects(None).await.unwrap().is_empty());
    assert!(matches!(svc.get_project(&project.id).await, Err(DatabaseError::NoResult)));
    assert!(matches!(
        svc.update_project(&project.id, ProjectUpdateBuilder::new().name("Mine now").build())
            .await,
        Err(DatabaseError::NoResult)
    ));
    assert!(matches!(svc.delete_project(&project.id).await, Err(DatabaseError::NoResult)));

    svc.set_identity(Some(owner));
    assert_eq!(svc.get_project(&project.id).await.unwrap().name, "Summit");
}

// ---------------------------------------------------------------------------
// Wishlists
// ---------------------------------------------------------------------------

#[tokio::test]
async fn wishlist_entries_follow_project_ownership() {
    let (mut svc, owner, other) = service_with_two_accounts().await;
    let speaker = svc
        .submit_application(&keynote_core::entities::NewSpeaker {
            name: "Ada".into(),
            title: "Futurist".into(),
            bio: "x".repeat(100),
            expertise: vec!["Innovation".into()],
            speaking_topics: vec!["Innovation".into()],
            fee: 12_000,
            location: "Remote".into(),
            ..Default::default()
        })
        .await
        .unwrap();

    svc.set_identity(Some(owner));
    let project = svc
        .create_project(&NewProject {
            name: "Summit".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    let entry = svc
        .add_to_wishlist(&NewWishlistEntry::new(&project.id, &speaker.id))
        .await
        .unwrap();

    svc.set_identity(Some(other));
    let gw = Gateway::new(&svc);
    assert!(gw.wishlist(&project.id).await.is_empty());
    assert!(!gw.remove(&entry.id).await);
    assert!(!gw.set_notes(&entry.id, Some("hijack".into())).await);
    assert!(!gw.add_speaker(&[], &project.id, &speaker.id).await.is_added());
}
