//! Client testimonials attached to speakers.

use chrono::Utc;

use keynote_core::entities::{NewTestimonial, Testimonial};
use keynote_core::ids::PREFIX_TESTIMONIAL;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, opt_value, parse_datetime};
use crate::service::KeynoteService;

const SELECT_COLS: &str =
    "id, speaker_id, client_name, client_company, content, rating, event_type, created_at";

fn row_to_testimonial(row: &libsql::Row) -> Result<Testimonial, DatabaseError> {
    Ok(Testimonial {
        id: row.get(0)?,
        speaker_id: row.get(1)?,
        client_name: row.get(2)?,
        client_company: get_opt_string(row, 3)?,
        content: row.get(4)?,
        rating: u8::try_from(row.get::<i64>(5)?)
            .map_err(|e| DatabaseError::InvalidState(format!("rating: {e}")))?,
        event_type: get_opt_string(row, 6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

impl KeynoteService {
    pub async fn add_testimonial(&self, new: &NewTestimonial) -> Result<Testimonial, DatabaseError> {
        self.require_admin()?;
        if !(1..=5).contains(&new.rating) {
            return Err(DatabaseError::InvalidState(format!(
                "rating {} is outside 1-5",
                new.rating
            )));
        }
        // Surface a missing speaker as NoResult rather than a foreign key error.
        self.get_speaker(&new.speaker_id).await?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_TESTIMONIAL).await?;
        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO testimonials ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"),
                libsql::params_from_iter(vec![
                    libsql::Value::from(id.clone()),
                    new.speaker_id.clone().into(),
                    new.client_name.clone().into(),
                    opt_value(new.client_company.clone()),
                    new.content.clone().into(),
                    i64::from(new.rating).into(),
                    opt_value(new.event_type.clone()),
                    now.to_rfc3339().into(),
                ]),
            )
            .await?;

        Ok(Testimonial {
            id,
            speaker_id: new.speaker_id.clone(),
            client_name: new.client_name.clone(),
            client_company: new.client_company.clone(),
            content: new.content.clone(),
            rating: new.rating,
            event_type: new.event_type.clone(),
            created_at: now,
        })
    }

    /// Testimonials for one speaker, newest first.
    pub async fn list_testimonials(
        &self,
        speaker_id: &str,
    ) -> Result<Vec<Testimonial>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM testimonials WHERE speaker_id = ?1 \
                     ORDER BY created_at DESC, rowid DESC"
                ),
                [speaker_id],
            )
            .await?;
        let mut out = Vec::new();
        while let Some(row) = rows.next().await? {
            out.push(row_to_testimonial(&row)?);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use keynote_core::entities::NewTestimonial;

    use crate::error::DatabaseError;
    use crate::test_support::helpers::{admin_identity, seed_speaker, test_service_with_identity};

    fn testimonial(speaker_id: &str, client: &str, rating: u8) -> NewTestimonial {
        NewTestimonial {
            speaker_id: speaker_id.into(),
            client_name: client.into(),
            client_company: None,
            content: "Fantastic session.".into(),
            rating,
            event_type: Some("Conference".into()),
        }
    }

    #[tokio::test]
    async fn detail_includes_testimonials_newest_first() {
        let svc = test_service_with_identity(admin_identity("acc-00000001")).await;
        let speaker = seed_speaker(&svc, "Ada", 12_000).await;
        svc.add_testimonial(&testimonial(&speaker.id, "First", 4)).await.unwrap();
        svc.add_testimonial(&testimonial(&speaker.id, "Second", 5)).await.unwrap();

        let detail = svc.get_speaker_with_testimonials(&speaker.id).await.unwrap();
        let clients: Vec<&str> = detail
            .testimonials
            .iter()
            .map(|t| t.client_name.as_str())
            .collect();
        assert_eq!(clients, vec!["Second", "First"]);
    }

    #[tokio::test]
    async fn rating_bounds_and_missing_speaker() {
        let svc = test_service_with_identity(admin_identity("acc-00000001")).await;
        let speaker = seed_speaker(&svc, "Ada", 12_000).await;
        assert!(matches!(
            svc.add_testimonial(&testimonial(&speaker.id, "X", 6)).await,
            Err(DatabaseError::InvalidState(_))
        ));
        assert!(matches!(
            svc.add_testimonial(&testimonial("spk-00000000", "X", 5)).await,
            Err(DatabaseError::NoResult)
        ));
    }
}
