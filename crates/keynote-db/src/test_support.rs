//! Shared fixtures for keynote-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use keynote_core::entities::{NewProject, NewSpeaker, Speaker};
    use keynote_core::identity::AuthIdentity;

    use crate::KeynoteDb;
    use crate::service::KeynoteService;

    pub async fn test_service() -> KeynoteService {
        let db = KeynoteDb::open_local(":memory:").await.unwrap();
        KeynoteService::from_db(db, None)
    }

    /// In-memory service signed in as `identity`. The account row is created
    /// so owner foreign keys resolve.
    pub async fn test_service_with_identity(identity: AuthIdentity) -> KeynoteService {
        let svc = test_service().await;
        insert_account(&svc, &identity).await;
        let mut svc = svc;
        svc.set_identity(Some(identity));
        svc
    }

    pub async fn insert_account(svc: &KeynoteService, identity: &AuthIdentity) {
        svc.db()
            .conn()
            .execute(
                "INSERT INTO accounts (id, email, password_hash, is_admin) VALUES (?1, ?2, 'x$y', ?3)",
                libsql::params![
                    identity.user_id.as_str(),
                    identity.email.as_str(),
                    i64::from(identity.is_admin)
                ],
            )
            .await
            .unwrap();
    }

    pub fn member_identity(user_id: &str) -> AuthIdentity {
        AuthIdentity {
            user_id: user_id.into(),
            email: format!("{user_id}@example.com"),
            display_name: None,
            is_admin: false,
        }
    }

    pub fn admin_identity(user_id: &str) -> AuthIdentity {
        AuthIdentity {
            is_admin: true,
            ..member_identity(user_id)
        }
    }

    pub fn sample_speaker(name: &str, fee: i64) -> NewSpeaker {
        NewSpeaker {
            name: name.into(),
            title: "Keynote Speaker".into(),
            bio: "b".repeat(120),
            expertise: vec!["Leadership".into()],
            speaking_topics: vec!["Leadership".into()],
            fee,
            location: "New York, NY".into(),
            years_experience: 5,
            languages: vec!["English".into()],
            ..Default::default()
        }
    }

    pub async fn seed_speaker(svc: &KeynoteService, name: &str, fee: i64) -> Speaker {
        svc.submit_application(&sample_speaker(name, fee)).await.unwrap()
    }

    pub fn sample_project(name: &str) -> NewProject {
        NewProject {
            name: name.into(),
            ..Default::default()
        }
    }
}
