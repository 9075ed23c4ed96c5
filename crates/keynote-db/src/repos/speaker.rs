//! Speaker catalog: application intake, filtered listing, admin edits.

use chrono::Utc;

use keynote_core::entities::{NewSpeaker, Speaker, SpeakerWithTestimonials};
use keynote_core::filter::{SpeakerPredicate, fold_case};
use keynote_core::ids::PREFIX_SPEAKER;
use keynote_core::vocab::MIN_FEE;

use super::Assignments;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, opt_value, parse_datetime, parse_string_list, to_json_list};
use crate::query::compile_speaker_predicate;
use crate::service::KeynoteService;
use crate::updates::speaker::SpeakerUpdate;

pub(crate) const SELECT_COLS: &str = "id, name, title, bio, expertise, speaking_topics, fee, \
     location, availability, profile_image, video_url, years_experience, languages, website, \
     linkedin, twitter, instagram, created_at, updated_at";

/// Written alongside the originals; see [`fold_case`].
const FOLDED_COLS: &str = "name_folded, title_folded, bio_folded, location_folded";

fn row_to_speaker(row: &libsql::Row) -> Result<Speaker, DatabaseError> {
    Ok(Speaker {
        id: row.get(0)?,
        name: row.get(1)?,
        title: row.get(2)?,
        bio: row.get(3)?,
        expertise: parse_string_list(&row.get::<String>(4)?)?,
        speaking_topics: parse_string_list(&row.get::<String>(5)?)?,
        fee: row.get(6)?,
        location: row.get(7)?,
        availability: parse_string_list(&row.get::<String>(8)?)?,
        profile_image: get_opt_string(row, 9)?,
        video_url: get_opt_string(row, 10)?,
        years_experience: u32::try_from(row.get::<i64>(11)?)
            .map_err(|e| DatabaseError::InvalidState(format!("years_experience: {e}")))?,
        languages: parse_string_list(&row.get::<String>(12)?)?,
        website: get_opt_string(row, 13)?,
        linkedin: get_opt_string(row, 14)?,
        twitter: get_opt_string(row, 15)?,
        instagram: get_opt_string(row, 16)?,
        created_at: parse_datetime(&row.get::<String>(17)?)?,
        updated_at: parse_datetime(&row.get::<String>(18)?)?,
    })
}

impl KeynoteService {
    /// Public speaker application. No sign-in required.
    pub async fn submit_application(&self, new: &NewSpeaker) -> Result<Speaker, DatabaseError> {
        self.insert_speaker(new).await
    }

    /// Admin-side speaker creation.
    pub async fn create_speaker(&self, new: &NewSpeaker) -> Result<Speaker, DatabaseError> {
        self.require_admin()?;
        self.insert_speaker(new).await
    }

    async fn insert_speaker(&self, new: &NewSpeaker) -> Result<Speaker, DatabaseError> {
        if new.fee < MIN_FEE {
            return Err(DatabaseError::InvalidState(format!(
                "speaker fee {} is below the {MIN_FEE} minimum",
                new.fee
            )));
        }
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_SPEAKER).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO speakers ({SELECT_COLS}, {FOLDED_COLS}) VALUES \
                     (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, \
                     ?20, ?21, ?22, ?23)"
                ),
                libsql::params_from_iter(vec![
                    libsql::Value::from(id.clone()),
                    new.name.clone().into(),
                    new.title.clone().into(),
                    new.bio.clone().into(),
                    to_json_list(&new.expertise)?.into(),
                    to_json_list(&new.speaking_topics)?.into(),
                    new.fee.into(),
                    new.location.clone().into(),
                    to_json_list(&new.availability)?.into(),
                    opt_value(new.profile_image.clone()),
                    opt_value(new.video_url.clone()),
                    i64::from(new.years_experience).into(),
                    to_json_list(&new.languages)?.into(),
                    opt_value(new.website.clone()),
                    opt_value(new.linkedin.clone()),
                    opt_value(new.twitter.clone()),
                    opt_value(new.instagram.clone()),
                    now.to_rfc3339().into(),
                    now.to_rfc3339().into(),
                    fold_case(&new.name).into(),
                    fold_case(&new.title).into(),
                    fold_case(&new.bio).into(),
                    fold_case(&new.location).into(),
                ]),
            )
            .await
            .map_err(DatabaseError::from_write)?;

        tracing::debug!(speaker_id = %id, "speaker created");
        self.get_speaker(&id).await
    }

    pub async fn get_speaker(&self, id: &str) -> Result<Speaker, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM speakers WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_speaker(&row)
    }

    /// Speaker detail with testimonials, newest first.
    pub async fn get_speaker_with_testimonials(
        &self,
        id: &str,
    ) -> Result<SpeakerWithTestimonials, DatabaseError> {
        let speaker = self.get_speaker(id).await?;
        let testimonials = self.list_testimonials(id).await?;
        Ok(SpeakerWithTestimonials {
            speaker,
            testimonials,
        })
    }

    /// Catalog rows matching `predicate`, ascending by name.
    pub async fn list_speakers(
        &self,
        predicate: &SpeakerPredicate,
        limit: Option<u32>,
    ) -> Result<Vec<Speaker>, DatabaseError> {
        let filter = compile_speaker_predicate(predicate);
        let limit_sql = limit.map(|n| format!(" LIMIT {n}")).unwrap_or_default();
        let sql = format!(
            "SELECT {SELECT_COLS} FROM speakers {} ORDER BY name_folded, name, rowid{limit_sql}",
            filter.where_sql()
        );
        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(filter.params))
            .await?;

        let mut speakers = Vec::new();
        while let Some(row) = rows.next().await? {
            speakers.push(row_to_speaker(&row)?);
        }
        Ok(speakers)
    }

    pub async fn update_speaker(
        &self,
        id: &str,
        update: SpeakerUpdate,
    ) -> Result<Speaker, DatabaseError> {
        self.require_admin()?;
        if let Some(fee) = update.fee
            && fee < MIN_FEE
        {
            return Err(DatabaseError::InvalidState(format!(
                "speaker fee {fee} is below the {MIN_FEE} minimum"
            )));
        }

        let mut assignments = Assignments::default();
        if let Some(name) = update.name {
            assignments.set("name_folded", fold_case(&name));
            assignments.set("name", name);
        }
        if let Some(title) = update.title {
            assignments.set("title_folded", fold_case(&title));
            assignments.set("title", title);
        }
        if let Some(bio) = update.bio {
            assignments.set("bio_folded", fold_case(&bio));
            assignments.set("bio", bio);
        }
        if let Some(expertise) = update.expertise {
            assignments.set("expertise", to_json_list(&expertise)?);
        }
        if let Some(topics) = update.speaking_topics {
            assignments.set("speaking_topics", to_json_list(&topics)?);
        }
        if let Some(fee) = update.fee {
            assignments.set("fee", fee);
        }
        if let Some(location) = update.location {
            assignments.set("location_folded", fold_case(&location));
            assignments.set("location", location);
        }
        if let Some(availability) = update.availability {
            assignments.set("availability", to_json_list(&availability)?);
        }
        if let Some(url) = update.profile_image {
            assignments.set("profile_image", opt_value(url));
        }
        if let Some(url) = update.video_url {
            assignments.set("video_url", opt_value(url));
        }
        if let Some(years) = update.years_experience {
            assignments.set("years_experience", i64::from(years));
        }
        if let Some(languages) = update.languages {
            assignments.set("languages", to_json_list(&languages)?);
        }
        if let Some(url) = update.website {
            assignments.set("website", opt_value(url));
        }
        if let Some(url) = update.linkedin {
            assignments.set("linkedin", opt_value(url));
        }
        if let Some(handle) = update.twitter {
            assignments.set("twitter", opt_value(handle));
        }
        if let Some(handle) = update.instagram {
            assignments.set("instagram", opt_value(handle));
        }

        if assignments.is_empty() {
            return self.get_speaker(id).await;
        }
        assignments.set("updated_at", Utc::now().to_rfc3339());

        let (sql, params) =
            assignments.into_statement("speakers", |n| format!("id = ?{n}"), vec![id.into()]);
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        self.get_speaker(id).await
    }

    /// Remove a speaker. Testimonials and wishlist rows cascade.
    pub async fn delete_speaker(&self, id: &str) -> Result<(), DatabaseError> {
        self.require_admin()?;
        let changed = self
            .db()
            .conn()
            .execute("DELETE FROM speakers WHERE id = ?1", [id])
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::debug!(speaker_id = %id, "speaker deleted");
        Ok(())
    }
}
