//! Dashboard and admin aggregates.

use keynote_core::enums::{ProjectStatus, WishlistStatus};
use keynote_core::responses::{CatalogStats, ProjectStats};

use crate::error::DatabaseError;
use crate::helpers::parse_enum;
use crate::service::KeynoteService;

fn count(value: i64) -> Result<u64, DatabaseError> {
    u64::try_from(value).map_err(|e| DatabaseError::InvalidState(format!("count: {e}")))
}

impl KeynoteService {
    /// Project and wishlist counts for the caller's own projects.
    pub async fn project_stats(&self) -> Result<ProjectStats, DatabaseError> {
        let owner = self.require_identity()?.user_id.as_str();
        let mut stats = ProjectStats::default();

        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT status, COUNT(*) FROM projects WHERE user_id = ?1 GROUP BY status",
                [owner],
            )
            .await?;
        while let Some(row) = rows.next().await? {
            let status: ProjectStatus = parse_enum(&row.get::<String>(0)?)?;
            stats.projects.record(status, count(row.get(1)?)?);
        }

        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT w.status, COUNT(*) FROM speaker_wishlists w \
                 JOIN projects p ON p.id = w.project_id \
                 WHERE p.user_id = ?1 GROUP BY w.status",
                [owner],
            )
            .await?;
        while let Some(row) = rows.next().await? {
            let status: WishlistStatus = parse_enum(&row.get::<String>(0)?)?;
            stats.speakers.record(status, count(row.get(1)?)?);
        }

        Ok(stats)
    }

    /// Catalog size, request volume, and rounded mean fee.
    pub async fn catalog_stats(&self) -> Result<CatalogStats, DatabaseError> {
        self.require_admin()?;
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT (SELECT COUNT(*) FROM speakers), \
                        (SELECT COUNT(*) FROM qualification_requests), \
                        (SELECT CAST(ROUND(COALESCE(AVG(fee), 0)) AS INTEGER) FROM speakers)",
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(CatalogStats {
            total_speakers: count(row.get(0)?)?,
            total_requests: count(row.get(1)?)?,
            average_fee: row.get(2)?,
        })
    }
}
