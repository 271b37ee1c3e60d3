use async_trait::async_trait;

use crate::models::jobmodel::{JobStatus, JobWithEmployer};

use super::DBClient;

const JOB_COLUMNS: &str = r#"
    j.id, j.job_id, j.employer_id, j.title, j.description, j.skill_required,
    j.location, j.wage_per_day, j.duration_days, j.workers_needed, j.status,
    j.created_at, e.company_name AS employer_name, e.industry,
    e.location AS employer_location
"#;

#[async_trait]
pub trait JobExt {
    /// Inserts a listing; the JOB id comes from the database sequence.
    async fn save_job(
        &self,
        employer_id: i64,
        title: &str,
        description: &str,
        skill_required: &str,
        location: &str,
        wage_per_day: f64,
        duration_days: i32,
        workers_needed: i32,
    ) -> Result<(i64, String), sqlx::Error>;

    /// Listing query. A job whose required skill is 'other' matches any
    /// requested skill filter.
    async fn get_jobs(
        &self,
        status: Option<JobStatus>,
        skill: Option<&str>,
    ) -> Result<Vec<JobWithEmployer>, sqlx::Error>;

    /// Looks a job up by numeric row id or by its JOB code.
    async fn get_job(&self, ident: &str) -> Result<Option<JobWithEmployer>, sqlx::Error>;

    async fn update_job_status(&self, id: i64, status: JobStatus) -> Result<(), sqlx::Error>;

    async fn count_open_jobs(&self) -> Result<i64, sqlx::Error>;
}

#[async_trait]
impl JobExt for DBClient {
    async fn save_job(
        &self,
        employer_id: i64,
        title: &str,
        description: &str,
        skill_required: &str,
        location: &str,
        wage_per_day: f64,
        duration_days: i32,
        workers_needed: i32,
    ) -> Result<(i64, String), sqlx::Error> {
        sqlx::query_as::<_, (i64, String)>(
            r#"
            INSERT INTO jobs
                (employer_id, title, description, skill_required, location,
                 wage_per_day, duration_days, workers_needed)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, job_id
            "#,
        )
        .bind(employer_id)
        .bind(title)
        .bind(description)
        .bind(skill_required)
        .bind(location)
        .bind(wage_per_day)
        .bind(duration_days)
        .bind(workers_needed)
        .fetch_one(self.pool())
        .await
    }

    async fn get_jobs(
        &self,
        status: Option<JobStatus>,
        skill: Option<&str>,
    ) -> Result<Vec<JobWithEmployer>, sqlx::Error> {
        sqlx::query_as::<_, JobWithEmployer>(&format!(
            r#"
            SELECT {JOB_COLUMNS}
            FROM jobs j
            JOIN employers e ON j.employer_id = e.id
            WHERE ($1::job_status IS NULL OR j.status = $1)
              AND ($2::TEXT IS NULL
                   OR j.skill_required = $2
                   OR j.skill_required = 'other')
            ORDER BY j.created_at DESC
            "#
        ))
        .bind(status)
        .bind(skill)
        .fetch_all(self.pool())
        .await
    }

    async fn get_job(&self, ident: &str) -> Result<Option<JobWithEmployer>, sqlx::Error> {
        let numeric_id = ident.parse::<i64>().ok();

        sqlx::query_as::<_, JobWithEmployer>(&format!(
            r#"
            SELECT {JOB_COLUMNS}
            FROM jobs j
            JOIN employers e ON j.employer_id = e.id
            WHERE ($1::BIGINT IS NOT NULL AND j.id = $1) OR j.job_id = $2
            "#
        ))
        .bind(numeric_id)
        .bind(ident)
        .fetch_optional(self.pool())
        .await
    }

    async fn update_job_status(&self, id: i64, status: JobStatus) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE jobs SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(self.pool())
            .await?;

        Ok(())
    }

    async fn count_open_jobs(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM jobs WHERE status = 'open'")
            .fetch_one(self.pool())
            .await
    }
}
