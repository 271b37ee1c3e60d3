use async_trait::async_trait;

use crate::models::complaintmodel::{
    ComplaintStats, ComplaintStatus, ComplaintWithNames,
};

use super::DBClient;

const COMPLAINT_COLUMNS: &str = r#"
    c.id, c.complaint_id, c.worker_id, c.employer_id, c.category,
    c.description, c.status, c.admin_remarks, c.created_at, c.resolved_at,
    w.name AS worker_name, w.migrant_id, e.company_name AS employer_name
"#;

#[async_trait]
pub trait ComplaintExt {
    /// Inserts a grievance; the CMP id comes from the database sequence.
    async fn save_complaint(
        &self,
        worker_id: i64,
        employer_id: Option<i64>,
        category: &str,
        description: &str,
    ) -> Result<(i64, String), sqlx::Error>;

    async fn get_complaints_by_worker(
        &self,
        worker_id: i64,
    ) -> Result<Vec<ComplaintWithNames>, sqlx::Error>;

    /// Looks a complaint up by numeric row id or by its CMP code.
    async fn get_complaint(&self, ident: &str)
        -> Result<Option<ComplaintWithNames>, sqlx::Error>;

    async fn get_all_complaints(
        &self,
        status: Option<ComplaintStatus>,
    ) -> Result<Vec<ComplaintWithNames>, sqlx::Error>;

    /// Moves a complaint through its lifecycle; resolution stamps
    /// `resolved_at`. Returns the number of rows touched.
    async fn update_complaint_status(
        &self,
        ident: &str,
        status: ComplaintStatus,
        admin_remarks: Option<&str>,
    ) -> Result<u64, sqlx::Error>;

    async fn get_complaint_stats(&self, worker_id: i64)
        -> Result<ComplaintStats, sqlx::Error>;

    async fn get_overall_complaint_stats(&self) -> Result<ComplaintStats, sqlx::Error>;
}

#[async_trait]
impl ComplaintExt for DBClient {
    async fn save_complaint(
        &self,
        worker_id: i64,
        employer_id: Option<i64>,
        category: &str,
        description: &str,
    ) -> Result<(i64, String), sqlx::Error> {
        sqlx::query_as::<_, (i64, String)>(
            r#"
            INSERT INTO complaints (worker_id, employer_id, category, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, complaint_id
            "#,
        )
        .bind(worker_id)
        .bind(employer_id)
        .bind(category)
        .bind(description)
        .fetch_one(self.pool())
        .await
    }

    async fn get_complaints_by_worker(
        &self,
        worker_id: i64,
    ) -> Result<Vec<ComplaintWithNames>, sqlx::Error> {
        sqlx::query_as::<_, ComplaintWithNames>(&format!(
            r#"
            SELECT {COMPLAINT_COLUMNS}
            FROM complaints c
            JOIN workers w ON c.worker_id = w.id
            LEFT JOIN employers e ON c.employer_id = e.id
            WHERE c.worker_id = $1
            ORDER BY c.created_at DESC
            "#
        ))
        .bind(worker_id)
        .fetch_all(self.pool())
        .await
    }

    async fn get_complaint(
        &self,
        ident: &str,
    ) -> Result<Option<ComplaintWithNames>, sqlx::Error> {
        let numeric_id = ident.parse::<i64>().ok();

        sqlx::query_as::<_, ComplaintWithNames>(&format!(
            r#"
            SELECT {COMPLAINT_COLUMNS}
            FROM complaints c
            JOIN workers w ON c.worker_id = w.id
            LEFT JOIN employers e ON c.employer_id = e.id
            WHERE ($1::BIGINT IS NOT NULL AND c.id = $1) OR c.complaint_id = $2
            "#
        ))
        .bind(numeric_id)
        .bind(ident)
        .fetch_optional(self.pool())
        .await
    }

    async fn get_all_complaints(
        &self,
        status: Option<ComplaintStatus>,
    ) -> Result<Vec<ComplaintWithNames>, sqlx::Error> {
        sqlx::query_as::<_, ComplaintWithNames>(&format!(
            r#"
            SELECT {COMPLAINT_COLUMNS}
            FROM complaints c
            JOIN workers w ON c.worker_id = w.id
            LEFT JOIN employers e ON c.employer_id = e.id
            WHERE ($1::complaint_status IS NULL OR c.status = $1)
            ORDER BY c.created_at DESC
            "#
        ))
        .bind(status)
        .fetch_all(self.pool())
        .await
    }

    async fn update_complaint_status(
        &self,
        ident: &str,
        status: ComplaintStatus,
        admin_remarks: Option<&str>,
    ) -> Result<u64, sqlx::Error> {
        let numeric_id = ident.parse::<i64>().ok();

        let result = sqlx::query(
            r#"
            UPDATE complaints
            SET status = $3,
                admin_remarks = $4,
                resolved_at = CASE WHEN $3 = 'resolved'::complaint_status
                                   THEN NOW() ELSE resolved_at END
            WHERE ($1::BIGINT IS NOT NULL AND id = $1) OR complaint_id = $2
            "#,
        )
        .bind(numeric_id)
        .bind(ident)
        .bind(status)
        .bind(admin_remarks)
        .execute(self.pool())
        .await?;

        Ok(result.rows_affected())
    }

    async fn get_complaint_stats(
        &self,
        worker_id: i64,
    ) -> Result<ComplaintStats, sqlx::Error> {
        sqlx::query_as::<_, ComplaintStats>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE status = 'pending') AS pending,
                COUNT(*) FILTER (WHERE status = 'resolved') AS resolved,
                COUNT(*) FILTER (WHERE status = 'in_progress') AS in_progress
            FROM complaints
            WHERE worker_id = $1
            "#,
        )
        .bind(worker_id)
        .fetch_one(self.pool())
        .await
    }

    async fn get_overall_complaint_stats(&self) -> Result<ComplaintStats, sqlx::Error> {
        sqlx::query_as::<_, ComplaintStats>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE status = 'pending') AS pending,
                COUNT(*) FILTER (WHERE status = 'resolved') AS resolved,
                COUNT(*) FILTER (WHERE status = 'in_progress') AS in_progress
            FROM complaints
            "#,
        )
        .fetch_one(self.pool())
        .await
    }
}
