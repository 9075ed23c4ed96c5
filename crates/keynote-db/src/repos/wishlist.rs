//! Per-project speaker wishlists.
//!
//! Entries are reachable only through a project the caller owns. The
//! `(project_id, speaker_id)` unique key rejects a second add of the same
//! speaker with [`DatabaseError::Duplicate`].

use chrono::Utc;

use keynote_core::entities::{SpeakerSummary, WishlistEntry, WishlistEntryWithSpeaker};
use keynote_core::ids::PREFIX_WISHLIST;
use keynote_core::wishlist::NewWishlistEntry;

use super::Assignments;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, opt_value, parse_datetime, parse_enum, parse_string_list};
use crate::service::KeynoteService;
use crate::updates::wishlist::WishlistUpdate;

const ENTRY_COLS: &str = "w.id, w.project_id, w.speaker_id, w.status, w.priority, w.notes, \
     w.created_at, w.updated_at";

const SPEAKER_COLS: &str = "s.id, s.name, s.title, s.bio, s.expertise, s.fee, s.location, \
     s.profile_image, s.video_url";

/// Entry columns start at `offset`.
fn row_to_entry(row: &libsql::Row, offset: i32) -> Result<WishlistEntry, DatabaseError> {
    Ok(WishlistEntry {
        id: row.get(offset)?,
        project_id: row.get(offset + 1)?,
        speaker_id: row.get(offset + 2)?,
        status: parse_enum(&row.get::<String>(offset + 3)?)?,
        priority: parse_enum(&row.get::<String>(offset + 4)?)?,
        notes: get_opt_string(row, offset + 5)?,
        created_at: parse_datetime(&row.get::<String>(offset + 6)?)?,
        updated_at: parse_datetime(&row.get::<String>(offset + 7)?)?,
    })
}

fn row_to_entry_with_speaker(row: &libsql::Row) -> Result<WishlistEntryWithSpeaker, DatabaseError> {
    Ok(WishlistEntryWithSpeaker {
        entry: row_to_entry(row, 0)?,
        speaker: SpeakerSummary {
            id: row.get(8)?,
            name: row.get(9)?,
            title: row.get(10)?,
            bio: row.get(11)?,
            expertise: parse_string_list(&row.get::<String>(12)?)?,
            fee: row.get(13)?,
            location: row.get(14)?,
            profile_image: get_opt_string(row, 15)?,
            video_url: get_opt_string(row, 16)?,
        },
    })
}

impl KeynoteService {
    /// Wishlist for one of the caller's projects, newest first, with each
    /// speaker's public fields.
    pub async fn list_wishlist(
        &self,
        project_id: &str,
    ) -> Result<Vec<WishlistEntryWithSpeaker>, DatabaseError> {
        let owner = self.require_identity()?.user_id.as_str();
        // Distinguish "not your project" from "empty wishlist".
        self.get_project(project_id).await?;

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {ENTRY_COLS}, {SPEAKER_COLS} FROM speaker_wishlists w \
                     JOIN speakers s ON s.id = w.speaker_id \
                     JOIN projects p ON p.id = w.project_id \
                     WHERE w.project_id = ?1 AND p.user_id = ?2 \
                     ORDER BY w.created_at DESC, w.rowid DESC"
                ),
                [project_id, owner],
            )
            .await?;
        let mut out = Vec::new();
        while let Some(row) = rows.next().await? {
            out.push(row_to_entry_with_speaker(&row)?);
        }
        Ok(out)
    }

    /// Insert an entry. A repeated `(project, speaker)` pair fails with
    /// [`DatabaseError::Duplicate`] and leaves the existing row untouched.
    pub async fn add_to_wishlist(
        &self,
        new: &NewWishlistEntry,
    ) -> Result<WishlistEntry, DatabaseError> {
        self.get_project(&new.project_id).await?;
        self.get_speaker(&new.speaker_id).await?;

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_WISHLIST).await?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO speaker_wishlists \
                 (id, project_id, speaker_id, status, priority, notes, created_at, updated_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                libsql::params_from_iter(vec![
                    libsql::Value::from(id.clone()),
                    new.project_id.clone().into(),
                    new.speaker_id.clone().into(),
                    new.status.as_str().into(),
                    new.priority.as_str().into(),
                    opt_value(new.notes.clone()),
                    now.to_rfc3339().into(),
                    now.to_rfc3339().into(),
                ]),
            )
            .await
            .map_err(DatabaseError::from_write)?;

        tracing::debug!(entry_id = %id, project_id = %new.project_id, "speaker wishlisted");
        Ok(WishlistEntry {
            id,
            project_id: new.project_id.clone(),
            speaker_id: new.speaker_id.clone(),
            status: new.status,
            priority: new.priority,
            notes: new.notes.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_wishlist_entry(&self, id: &str) -> Result<WishlistEntry, DatabaseError> {
        let owner = self.require_identity()?.user_id.as_str();
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {ENTRY_COLS} FROM speaker_wishlists w \
                     JOIN projects p ON p.id = w.project_id \
                     WHERE w.id = ?1 AND p.user_id = ?2"
                ),
                [id, owner],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_entry(&row, 0)
    }

    /// Change status, priority, or notes. No transition rules apply.
    pub async fn update_wishlist_entry(
        &self,
        id: &str,
        update: WishlistUpdate,
    ) -> Result<WishlistEntry, DatabaseError> {
        let owner = self.require_identity()?.user_id.clone();

        let mut assignments = Assignments::default();
        if let Some(status) = update.status {
            assignments.set("status", status.as_str());
        }
        if let Some(priority) = update.priority {
            assignments.set("priority", priority.as_str());
        }
        if let Some(notes) = update.notes {
            assignments.set("notes", opt_value(notes));
        }

        if assignments.is_empty() {
            return self.get_wishlist_entry(id).await;
        }
        assignments.set("updated_at", Utc::now().to_rfc3339());

        let (sql, params) = assignments.into_statement(
            "speaker_wishlists",
            |n| {
                format!(
                    "id = ?{n} AND project_id IN (SELECT id FROM projects WHERE user_id = ?{})",
                    n + 1
                )
            },
            vec![id.into(), owner.into()],
        );
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        self.get_wishlist_entry(id).await
    }

    pub async fn remove_from_wishlist(&self, id: &str) -> Result<(), DatabaseError> {
        let owner = self.require_identity()?.user_id.as_str();
        let changed = self
            .db()
            .conn()
            .execute(
                "DELETE FROM speaker_wishlists WHERE id = ?1 \
                 AND project_id IN (SELECT id FROM projects WHERE user_id = ?2)",
                [id, owner],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        Ok(())
    }
}
