use async_trait::async_trait;

use crate::models::applicationmodel::{
    ApplicationAdminRow, ApplicationStats, ApplicationStatus, ApplicationWithJob, JobApplication,
};

use super::DBClient;

const APPLICATION_COLUMNS: &str =
    "id, application_id, job_id, worker_id, status, applied_at, responded_at";

#[async_trait]
pub trait ApplicationExt {
    async fn get_application_for_job(
        &self,
        job_id: i64,
        worker_id: i64,
    ) -> Result<Option<JobApplication>, sqlx::Error>;

    /// Inserts an application; the APP id comes from the database sequence
    /// and the (job, worker) unique constraint backs the duplicate check.
    async fn save_application(
        &self,
        job_id: i64,
        worker_id: i64,
    ) -> Result<(i64, String), sqlx::Error>;

    /// Looks an application up by numeric row id or by its APP code.
    async fn get_application(&self, ident: &str) -> Result<Option<JobApplication>, sqlx::Error>;

    async fn get_applications_by_worker(
        &self,
        worker_id: i64,
    ) -> Result<Vec<ApplicationWithJob>, sqlx::Error>;

    async fn get_all_applications(
        &self,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<ApplicationAdminRow>, sqlx::Error>;

    /// Accepts a pending application and links the worker to the job's
    /// employer in the same transaction.
    async fn accept_application(&self, id: i64) -> Result<(), sqlx::Error>;

    async fn reject_application(&self, id: i64) -> Result<(), sqlx::Error>;

    async fn get_application_stats(&self, worker_id: i64)
        -> Result<ApplicationStats, sqlx::Error>;

    async fn get_overall_application_stats(&self) -> Result<ApplicationStats, sqlx::Error>;
}

#[async_trait]
impl ApplicationExt for DBClient {
    async fn get_application_for_job(
        &self,
        job_id: i64,
        worker_id: i64,
    ) -> Result<Option<JobApplication>, sqlx::Error> {
        sqlx::query_as::<_, JobApplication>(&format!(
            r#"
            SELECT {APPLICATION_COLUMNS}
            FROM job_applications
            WHERE job_id = $1 AND worker_id = $2
            "#
        ))
        .bind(job_id)
        .bind(worker_id)
        .fetch_optional(self.pool())
        .await
    }

    async fn save_application(
        &self,
        job_id: i64,
        worker_id: i64,
    ) -> Result<(i64, String), sqlx::Error> {
        sqlx::query_as::<_, (i64, String)>(
            r#"
            INSERT INTO job_applications (job_id, worker_id)
            VALUES ($1, $2)
            RETURNING id, application_id
            "#,
        )
        .bind(job_id)
        .bind(worker_id)
        .fetch_one(self.pool())
        .await
    }

    async fn get_application(&self, ident: &str) -> Result<Option<JobApplication>, sqlx::Error> {
        let numeric_id = ident.parse::<i64>().ok();

        sqlx::query_as::<_, JobApplication>(&format!(
            r#"
            SELECT {APPLICATION_COLUMNS}
            FROM job_applications
            WHERE ($1::BIGINT IS NOT NULL AND id = $1) OR application_id = $2
            "#
        ))
        .bind(numeric_id)
        .bind(ident)
        .fetch_optional(self.pool())
        .await
    }

    async fn get_applications_by_worker(
        &self,
        worker_id: i64,
    ) -> Result<Vec<ApplicationWithJob>, sqlx::Error> {
        sqlx::query_as::<_, ApplicationWithJob>(
            r#"
            SELECT
                a.id, a.application_id, a.job_id, j.job_id AS job_code,
                j.title AS job_title, j.location, j.wage_per_day,
                j.duration_days, e.company_name AS employer_name,
                a.status, a.applied_at
            FROM job_applications a
            JOIN jobs j ON a.job_id = j.id
            JOIN employers e ON j.employer_id = e.id
            WHERE a.worker_id = $1
            ORDER BY a.applied_at DESC
            "#,
        )
        .bind(worker_id)
        .fetch_all(self.pool())
        .await
    }

    async fn get_all_applications(
        &self,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<ApplicationAdminRow>, sqlx::Error> {
        sqlx::query_as::<_, ApplicationAdminRow>(
            r#"
            SELECT
                a.id, a.application_id, j.title AS job_title,
                e.company_name AS employer_name, j.location, j.wage_per_day,
                w.name AS worker_name, w.migrant_id, w.phone, w.skill,
                a.status, a.applied_at
            FROM job_applications a
            JOIN jobs j ON a.job_id = j.id
            JOIN workers w ON a.worker_id = w.id
            JOIN employers e ON j.employer_id = e.id
            WHERE ($1::application_status IS NULL OR a.status = $1)
            ORDER BY a.applied_at DESC
            "#,
        )
        .bind(status)
        .fetch_all(self.pool())
        .await
    }

    async fn accept_application(&self, id: i64) -> Result<(), sqlx::Error> {
        let mut tx = self.pool().begin().await?;

        let accepted = sqlx::query_as::<_, (i64, i64)>(
            r#"
            UPDATE job_applications
            SET status = 'accepted', responded_at = NOW()
            WHERE id = $1 AND status = 'pending'
            RETURNING job_id, worker_id
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        if let Some((job_id, worker_id)) = accepted {
            sqlx::query(
                r#"
                UPDATE workers
                SET current_employer_id = (SELECT employer_id FROM jobs WHERE id = $1)
                WHERE id = $2
                "#,
            )
            .bind(job_id)
            .bind(worker_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn reject_application(&self, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE job_applications
            SET status = 'rejected', responded_at = NOW()
            WHERE id = $1 AND status = 'pending'
            "#,
        )
        .bind(id)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    async fn get_application_stats(
        &self,
        worker_id: i64,
    ) -> Result<ApplicationStats, sqlx::Error> {
        sqlx::query_as::<_, ApplicationStats>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE status = 'pending') AS pending,
                COUNT(*) FILTER (WHERE status = 'accepted') AS accepted,
                COUNT(*) FILTER (WHERE status = 'rejected') AS rejected
            FROM job_applications
            WHERE worker_id = $1
            "#,
        )
        .bind(worker_id)
        .fetch_one(self.pool())
        .await
    }

    async fn get_overall_application_stats(&self) -> Result<ApplicationStats, sqlx::Error> {
        sqlx::query_as::<_, ApplicationStats>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE status = 'pending') AS pending,
                COUNT(*) FILTER (WHERE status = 'accepted') AS accepted,
                COUNT(*) FILTER (WHERE status = 'rejected') AS rejected
            FROM job_applications
            "#,
        )
        .fetch_one(self.pool())
        .await
    }
}
