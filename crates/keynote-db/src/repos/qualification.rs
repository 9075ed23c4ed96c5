//! Event-organizer qualification requests.

use chrono::Utc;

use keynote_core::entities::{NewQualificationRequest, QualificationRequest};
use keynote_core::enums::QualificationStatus;
use keynote_core::ids::PREFIX_QUALIFICATION;
use keynote_core::vocab::MIN_FEE;

use crate::error::DatabaseError;
use crate::helpers::{
    get_opt_string, opt_value, parse_date, parse_datetime, parse_enum, parse_string_list,
    to_json_list,
};
use crate::service::KeynoteService;

const SELECT_COLS: &str = "id, organization_name, contact_email, contact_phone, event_type, \
     industry, audience_size, budget, event_date, location, topic_areas, \
     additional_requirements, status, created_at, updated_at";

fn row_to_request(row: &libsql::Row) -> Result<QualificationRequest, DatabaseError> {
    Ok(QualificationRequest {
        id: row.get(0)?,
        organization_name: row.get(1)?,
        contact_email: row.get(2)?,
        contact_phone: get_opt_string(row, 3)?,
        event_type: parse_enum(&row.get::<String>(4)?)?,
        industry: parse_enum(&row.get::<String>(5)?)?,
        audience_size: parse_enum(&row.get::<String>(6)?)?,
        budget: row.get(7)?,
        event_date: parse_date(&row.get::<String>(8)?)?,
        location: row.get(9)?,
        topic_areas: parse_string_list(&row.get::<String>(10)?)?,
        additional_requirements: get_opt_string(row, 11)?,
        status: parse_enum(&row.get::<String>(12)?)?,
        created_at: parse_datetime(&row.get::<String>(13)?)?,
        updated_at: parse_datetime(&row.get::<String>(14)?)?,
    })
}

impl KeynoteService {
    /// Store a completed wizard. Status starts at `new`.
    pub async fn submit_qualification(
        &self,
        new: &NewQualificationRequest,
    ) -> Result<QualificationRequest, DatabaseError> {
        if new.budget < MIN_FEE || new.topic_areas.is_empty() {
            return Err(DatabaseError::InvalidState(
                "qualification request failed validation".into(),
            ));
        }
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_QUALIFICATION).await?;
        let status = QualificationStatus::New;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO qualification_requests ({SELECT_COLS}) VALUES \
                     (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)"
                ),
                libsql::params_from_iter(vec![
                    libsql::Value::from(id.clone()),
                    new.organization_name.clone().into(),
                    new.contact_email.clone().into(),
                    opt_value(new.contact_phone.clone()),
                    new.event_type.as_str().into(),
                    new.industry.as_str().into(),
                    new.audience_size.as_str().into(),
                    new.budget.into(),
                    new.event_date.format("%Y-%m-%d").to_string().into(),
                    new.location.clone().into(),
                    to_json_list(&new.topic_areas)?.into(),
                    opt_value(new.additional_requirements.clone()),
                    status.as_str().into(),
                    now.to_rfc3339().into(),
                    now.to_rfc3339().into(),
                ]),
            )
            .await?;

        tracing::debug!(request_id = %id, "qualification request stored");
        Ok(QualificationRequest {
            id,
            organization_name: new.organization_name.clone(),
            contact_email: new.contact_email.clone(),
            contact_phone: new.contact_phone.clone(),
            event_type: new.event_type,
            industry: new.industry,
            audience_size: new.audience_size,
            budget: new.budget,
            event_date: new.event_date,
            location: new.location.clone(),
            topic_areas: new.topic_areas.clone(),
            additional_requirements: new.additional_requirements.clone(),
            status,
            created_at: now,
            updated_at: now,
        })
    }

    /// Admin inbox, newest first, optionally narrowed to one status.
    pub async fn list_qualification_requests(
        &self,
        status: Option<QualificationStatus>,
        limit: u32,
    ) -> Result<Vec<QualificationRequest>, DatabaseError> {
        self.require_admin()?;
        let (filter, params): (&str, Vec<libsql::Value>) = match status {
            Some(s) => ("WHERE status = ?1", vec![s.as_str().into()]),
            None => ("", Vec::new()),
        };
        let sql = format!(
            "SELECT {SELECT_COLS} FROM qualification_requests {filter} \
             ORDER BY created_at DESC, rowid DESC LIMIT {limit}"
        );
        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut out = Vec::new();
        while let Some(row) = rows.next().await? {
            out.push(row_to_request(&row)?);
        }
        Ok(out)
    }

    pub async fn update_qualification_status(
        &self,
        id: &str,
        status: QualificationStatus,
    ) -> Result<(), DatabaseError> {
        self.require_admin()?;
        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE qualification_requests SET status = ?1, updated_at = ?2 WHERE id = ?3",
                libsql::params![status.as_str(), Utc::now().to_rfc3339(), id],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use keynote_core::entities::NewQualificationRequest;
    use keynote_core::enums::{AudienceSize, EventType, Industry, QualificationStatus};

    use crate::error::DatabaseError;
    use crate::test_support::helpers::{
        admin_identity, member_identity, test_service, test_service_with_identity,
    };

    fn request(org: &str) -> NewQualificationRequest {
        NewQualificationRequest {
            organization_name: org.into(),
            contact_email: "events@acme.example".into(),
            contact_phone: None,
            event_type: EventType::Conference,
            industry: Industry::Technology,
            audience_size: AudienceSize::UpTo250,
            budget: 15_000,
            event_date: NaiveDate::from_ymd_opt(2027, 4, 2).unwrap(),
            location: "Austin, TX".into(),
            topic_areas: vec!["Leadership".into()],
            additional_requirements: None,
        }
    }

    #[tokio::test]
    async fn anonymous_submit_then_admin_reads_back() {
        let svc = test_service().await;
        let stored = svc.submit_qualification(&request("Acme")).await.unwrap();
        assert_eq!(stored.status, QualificationStatus::New);

        let mut svc = svc;
        svc.set_identity(Some(admin_identity("acc-00000009")));
        let inbox = svc.list_qualification_requests(None, 10).await.unwrap();
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0].id, stored.id);
        assert_eq!(inbox[0].event_date, stored.event_date);
        assert_eq!(inbox[0].audience_size, AudienceSize::UpTo250);
    }

    #[tokio::test]
    async fn budget_below_minimum_never_stored() {
        let svc = test_service().await;
        let mut low = request("Acme");
        low.budget = 9_999;
        assert!(matches!(
            svc.submit_qualification(&low).await,
            Err(DatabaseError::InvalidState(_))
        ));
    }

    #[tokio::test]
    async fn members_cannot_read_inbox() {
        let svc = test_service_with_identity(member_identity("acc-00000001")).await;
        assert!(matches!(
            svc.list_qualification_requests(None, 10).await,
            Err(DatabaseError::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn status_filter_and_update() {
        let svc = test_service_with_identity(admin_identity("acc-00000001")).await;
        let a = svc.submit_qualification(&request("A")).await.unwrap();
        svc.submit_qualification(&request("B")).await.unwrap();
        svc.update_qualification_status(&a.id, QualificationStatus::Contacted)
            .await
            .unwrap();

        let contacted = svc
            .list_qualification_requests(Some(QualificationStatus::Contacted), 10)
            .await
            .unwrap();
        assert_eq!(contacted.len(), 1);
        assert_eq!(contacted[0].organization_name, "A");

        assert!(matches!(
            svc.update_qualification_status("qlr-00000000", QualificationStatus::Closed)
                .await,
            Err(DatabaseError::NoResult)
        ));
    }
}
