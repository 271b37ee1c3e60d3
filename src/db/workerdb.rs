use async_trait::async_trait;

use crate::dtos::workerdtos::UpdateWorkerDto;
use crate::models::workermodel::Worker;

use super::DBClient;

const WORKER_COLUMNS: &str = r#"
    w.id, w.migrant_id, w.name, w.email, w.phone, w.password,
    w.aadhaar, w.skill, w.age, w.gender, w.state, w.district, w.address,
    w.work_location, w.status, w.current_employer_id,
    e.company_name AS current_employer_name, w.created_at
"#;

#[async_trait]
pub trait WorkerExt {
    /// Inserts a worker; the database assigns the MIG id from its sequence.
    /// Returns (row id, migrant_id).
    async fn save_worker(
        &self,
        name: &str,
        phone: &str,
        password_hash: &str,
        email: Option<&str>,
        aadhaar: Option<&str>,
        skill: Option<&str>,
        age: Option<i32>,
        gender: Option<&str>,
        state: Option<&str>,
        district: Option<&str>,
        address: Option<&str>,
    ) -> Result<(i64, String), sqlx::Error>;

    async fn get_worker(&self, worker_id: i64) -> Result<Option<Worker>, sqlx::Error>;

    async fn get_worker_by_phone(&self, phone: &str) -> Result<Option<Worker>, sqlx::Error>;

    /// Looks a worker up by numeric row id or by their MIG id.
    async fn get_worker_by_ident(&self, ident: &str) -> Result<Option<Worker>, sqlx::Error>;

    /// Login match: migrant ID and registered phone together.
    async fn authenticate_worker(
        &self,
        migrant_id: &str,
        phone: &str,
    ) -> Result<Option<Worker>, sqlx::Error>;

    /// Partial profile update; absent fields keep their current value.
    async fn update_worker(
        &self,
        worker_id: i64,
        changes: &UpdateWorkerDto,
    ) -> Result<(), sqlx::Error>;

    async fn update_worker_password(
        &self,
        worker_id: i64,
        password_hash: &str,
    ) -> Result<(), sqlx::Error>;

    async fn count_active_workers(&self) -> Result<i64, sqlx::Error>;
}

#[async_trait]
impl WorkerExt for DBClient {
    async fn save_worker(
        &self,
        name: &str,
        phone: &str,
        password_hash: &str,
        email: Option<&str>,
        aadhaar: Option<&str>,
        skill: Option<&str>,
        age: Option<i32>,
        gender: Option<&str>,
        state: Option<&str>,
        district: Option<&str>,
        address: Option<&str>,
    ) -> Result<(i64, String), sqlx::Error> {
        sqlx::query_as::<_, (i64, String)>(
            r#"
            INSERT INTO workers
                (name, phone, password, email, aadhaar, skill, age, gender, state, district, address)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, migrant_id
            "#,
        )
        .bind(name)
        .bind(phone)
        .bind(password_hash)
        .bind(email)
        .bind(aadhaar)
        .bind(skill)
        .bind(age)
        .bind(gender)
        .bind(state)
        .bind(district)
        .bind(address)
        .fetch_one(self.pool())
        .await
    }

    async fn get_worker(&self, worker_id: i64) -> Result<Option<Worker>, sqlx::Error> {
        sqlx::query_as::<_, Worker>(&format!(
            r#"
            SELECT {WORKER_COLUMNS}
            FROM workers w
            LEFT JOIN employers e ON w.current_employer_id = e.id
            WHERE w.id = $1
            "#
        ))
        .bind(worker_id)
        .fetch_optional(self.pool())
        .await
    }

    async fn get_worker_by_phone(&self, phone: &str) -> Result<Option<Worker>, sqlx::Error> {
        sqlx::query_as::<_, Worker>(&format!(
            r#"
            SELECT {WORKER_COLUMNS}
            FROM workers w
            LEFT JOIN employers e ON w.current_employer_id = e.id
            WHERE w.phone = $1
            "#
        ))
        .bind(phone)
        .fetch_optional(self.pool())
        .await
    }

    async fn get_worker_by_ident(&self, ident: &str) -> Result<Option<Worker>, sqlx::Error> {
        let numeric_id = ident.parse::<i64>().ok();

        sqlx::query_as::<_, Worker>(&format!(
            r#"
            SELECT {WORKER_COLUMNS}
            FROM workers w
            LEFT JOIN employers e ON w.current_employer_id = e.id
            WHERE ($1::BIGINT IS NOT NULL AND w.id = $1) OR w.migrant_id = $2
            "#
        ))
        .bind(numeric_id)
        .bind(ident)
        .fetch_optional(self.pool())
        .await
    }

    async fn authenticate_worker(
        &self,
        migrant_id: &str,
        phone: &str,
    ) -> Result<Option<Worker>, sqlx::Error> {
        sqlx::query_as::<_, Worker>(&format!(
            r#"
            SELECT {WORKER_COLUMNS}
            FROM workers w
            LEFT JOIN employers e ON w.current_employer_id = e.id
            WHERE w.migrant_id = $1 AND w.phone = $2
            "#
        ))
        .bind(migrant_id)
        .bind(phone)
        .fetch_optional(self.pool())
        .await
    }

    async fn update_worker(
        &self,
        worker_id: i64,
        changes: &UpdateWorkerDto,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE workers SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                skill = COALESCE($5, skill),
                age = COALESCE($6, age),
                gender = COALESCE($7, gender),
                state = COALESCE($8, state),
                district = COALESCE($9, district),
                address = COALESCE($10, address),
                aadhaar = COALESCE($11, aadhaar)
            WHERE id = $1
            "#,
        )
        .bind(worker_id)
        .bind(changes.name.as_deref())
        .bind(changes.email.as_deref())
        .bind(changes.phone.as_deref())
        .bind(changes.skill.as_deref())
        .bind(changes.age)
        .bind(changes.gender.as_deref())
        .bind(changes.state.as_deref())
        .bind(changes.district.as_deref())
        .bind(changes.address.as_deref())
        .bind(changes.aadhaar.as_deref())
        .execute(self.pool())
        .await?;

        Ok(())
    }

    async fn update_worker_password(
        &self,
        worker_id: i64,
        password_hash: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE workers SET password = $2 WHERE id = $1")
            .bind(worker_id)
            .bind(password_hash)
            .execute(self.pool())
            .await?;

        Ok(())
    }

    async fn count_active_workers(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM workers WHERE status = 'active'",
        )
        .fetch_one(self.pool())
        .await
    }
}
