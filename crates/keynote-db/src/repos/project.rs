//! Owner-scoped event projects.
//!
//! Every statement carries `user_id = ?` bound to the service identity; rows
//! owned by someone else behave exactly like missing rows.

use chrono::Utc;

use keynote_core::entities::{NewProject, Project};
use keynote_core::ids::PREFIX_PROJECT;

use super::Assignments;
use crate::error::DatabaseError;
use crate::helpers::{
    get_opt_string, opt_value, parse_datetime, parse_enum, parse_optional_date,
    parse_optional_enum,
};
use crate::service::KeynoteService;
use crate::updates::project::ProjectUpdate;

const SELECT_COLS: &str = "id, user_id, name, description, event_date, location, budget, \
     audience_size, event_type, industry, status, created_at, updated_at";

fn row_to_project(row: &libsql::Row) -> Result<Project, DatabaseError> {
    Ok(Project {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        description: get_opt_string(row, 3)?,
        event_date: parse_optional_date(get_opt_string(row, 4)?.as_deref())?,
        location: get_opt_string(row, 5)?,
        budget: row.get::<Option<i64>>(6)?,
        audience_size: parse_optional_enum(get_opt_string(row, 7)?.as_deref())?,
        event_type: parse_optional_enum(get_opt_string(row, 8)?.as_deref())?,
        industry: parse_optional_enum(get_opt_string(row, 9)?.as_deref())?,
        status: parse_enum(&row.get::<String>(10)?)?,
        created_at: parse_datetime(&row.get::<String>(11)?)?,
        updated_at: parse_datetime(&row.get::<String>(12)?)?,
    })
}

fn date_value(date: Option<chrono::NaiveDate>) -> libsql::Value {
    opt_value(date.map(|d| d.format("%Y-%m-%d").to_string()))
}

impl KeynoteService {
    pub async fn create_project(&self, new: &NewProject) -> Result<Project, DatabaseError> {
        let owner = self.require_identity()?.user_id.clone();
        if new.name.trim().is_empty() {
            return Err(DatabaseError::InvalidState("project name is empty".into()));
        }
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_PROJECT).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO projects ({SELECT_COLS}) VALUES \
                     (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)"
                ),
                libsql::params_from_iter(vec![
                    libsql::Value::from(id.clone()),
                    owner.clone().into(),
                    new.name.trim().to_string().into(),
                    opt_value(new.description.clone()),
                    date_value(new.event_date),
                    opt_value(new.location.clone()),
                    opt_value(new.budget),
                    opt_value(new.audience_size.map(|v| v.as_str())),
                    opt_value(new.event_type.map(|v| v.as_str())),
                    opt_value(new.industry.map(|v| v.as_str())),
                    new.status.as_str().into(),
                    now.to_rfc3339().into(),
                    now.to_rfc3339().into(),
                ]),
            )
            .await?;

        tracing::debug!(project_id = %id, "project created");
        Ok(Project {
            id,
            user_id: owner,
            name: new.name.trim().to_string(),
            description: new.description.clone(),
            event_date: new.event_date,
            location: new.location.clone(),
            budget: new.budget,
            audience_size: new.audience_size,
            event_type: new.event_type,
            industry: new.industry,
            status: new.status,
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn get_project(&self, id: &str) -> Result<Project, DatabaseError> {
        let owner = self.require_identity()?.user_id.as_str();
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM projects WHERE id = ?1 AND user_id = ?2"),
                [id, owner],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_project(&row)
    }

    /// The caller's projects, most recently created first.
    pub async fn list_projects(&self, limit: Option<u32>) -> Result<Vec<Project>, DatabaseError> {
        let owner = self.require_identity()?.user_id.as_str();
        let limit_sql = limit.map(|n| format!(" LIMIT {n}")).unwrap_or_default();
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM projects WHERE user_id = ?1 \
                     ORDER BY created_at DESC, rowid DESC{limit_sql}"
                ),
                [owner],
            )
            .await?;
        let mut out = Vec::new();
        while let Some(row) = rows.next().await? {
            out.push(row_to_project(&row)?);
        }
        Ok(out)
    }

    pub async fn update_project(
        &self,
        id: &str,
        update: ProjectUpdate,
    ) -> Result<Project, DatabaseError> {
        let owner = self.require_identity()?.user_id.clone();

        let mut assignments = Assignments::default();
        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(DatabaseError::InvalidState("project name is empty".into()));
            }
            assignments.set("name", name.trim().to_string());
        }
        if let Some(description) = update.description {
            assignments.set("description", opt_value(description));
        }
        if let Some(date) = update.event_date {
            assignments.set("event_date", date_value(date));
        }
        if let Some(location) = update.location {
            assignments.set("location", opt_value(location));
        }
        if let Some(budget) = update.budget {
            assignments.set("budget", opt_value(budget));
        }
        if let Some(size) = update.audience_size {
            assignments.set("audience_size", opt_value(size.map(|v| v.as_str())));
        }
        if let Some(event_type) = update.event_type {
            assignments.set("event_type", opt_value(event_type.map(|v| v.as_str())));
        }
        if let Some(industry) = update.industry {
            assignments.set("industry", opt_value(industry.map(|v| v.as_str())));
        }
        if let Some(status) = update.status {
            assignments.set("status", status.as_str());
        }

        if assignments.is_empty() {
            return self.get_project(id).await;
        }
        assignments.set("updated_at", Utc::now().to_rfc3339());

        let (sql, params) = assignments.into_statement(
            "projects",
            |n| format!("id = ?{n} AND user_id = ?{}", n + 1),
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
        self.get_project(id).await
    }

    /// Delete a project and, by cascade, its wishlist.
    pub async fn delete_project(&self, id: &str) -> Result<(), DatabaseError> {
        let owner = self.require_identity()?.user_id.as_str();
        let changed = self
            .db()
            .conn()
            .execute(
                "DELETE FROM projects WHERE id = ?1 AND user_id = ?2",
                [id, owner],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::debug!(project_id = %id, "project deleted");
        Ok(())
    }
}
