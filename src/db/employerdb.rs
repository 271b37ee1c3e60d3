use async_trait::async_trait;

use crate::models::employermodel::{
    Employer, EmployerStats, EmployerStatus, EmployerVerificationStats, VerificationStatus,
};

use super::DBClient;

const EMPLOYER_COLUMNS: &str = r#"
    id, employer_id, company_name, industry, location, contact_person,
    phone, email, password, gst_number, registration_number, address,
    status, verification_status, verification_notes, verified_by,
    verified_at, rating, workers_count, created_at
"#;

#[async_trait]
pub trait EmployerExt {
    /// Inserts an employer; the EMP id comes from the database sequence and
    /// the account stays inactive/pending until an admin verifies it.
    async fn save_employer(
        &self,
        company_name: &str,
        contact_person: &str,
        phone: &str,
        email: &str,
        password_hash: &str,
        industry: Option<&str>,
        location: Option<&str>,
        gst_number: Option<&str>,
        registration_number: Option<&str>,
        address: Option<&str>,
    ) -> Result<(i64, String), sqlx::Error>;

    async fn get_employer_by_employer_id(
        &self,
        employer_id: &str,
    ) -> Result<Option<Employer>, sqlx::Error>;

    async fn get_employer_by_email(&self, email: &str) -> Result<Option<Employer>, sqlx::Error>;

    async fn get_employer_by_phone(&self, phone: &str) -> Result<Option<Employer>, sqlx::Error>;

    /// Looks an employer up by numeric row id or by their EMP id.
    async fn get_employer_by_ident(&self, ident: &str) -> Result<Option<Employer>, sqlx::Error>;

    async fn get_employers(
        &self,
        status: Option<EmployerStatus>,
        verification: Option<VerificationStatus>,
    ) -> Result<Vec<Employer>, sqlx::Error>;

    /// Employers awaiting review, oldest first.
    async fn get_pending_verifications(&self) -> Result<Vec<Employer>, sqlx::Error>;

    /// Records the verification decision; verified employers are activated,
    /// rejected ones deactivated.
    async fn update_verification(
        &self,
        id: i64,
        decision: VerificationStatus,
        notes: Option<&str>,
        admin_id: Option<i64>,
    ) -> Result<(), sqlx::Error>;

    async fn get_verification_stats(&self) -> Result<EmployerVerificationStats, sqlx::Error>;

    async fn get_employer_stats(&self) -> Result<EmployerStats, sqlx::Error>;
}

#[async_trait]
impl EmployerExt for DBClient {
    async fn save_employer(
        &self,
        company_name: &str,
        contact_person: &str,
        phone: &str,
        email: &str,
        password_hash: &str,
        industry: Option<&str>,
        location: Option<&str>,
        gst_number: Option<&str>,
        registration_number: Option<&str>,
        address: Option<&str>,
    ) -> Result<(i64, String), sqlx::Error> {
        sqlx::query_as::<_, (i64, String)>(
            r#"
            INSERT INTO employers
                (company_name, contact_person, phone, email, password,
                 industry, location, gst_number, registration_number, address)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, employer_id
            "#,
        )
        .bind(company_name)
        .bind(contact_person)
        .bind(phone)
        .bind(email)
        .bind(password_hash)
        .bind(industry)
        .bind(location)
        .bind(gst_number)
        .bind(registration_number)
        .bind(address)
        .fetch_one(self.pool())
        .await
    }

    async fn get_employer_by_employer_id(
        &self,
        employer_id: &str,
    ) -> Result<Option<Employer>, sqlx::Error> {
        sqlx::query_as::<_, Employer>(&format!(
            "SELECT {EMPLOYER_COLUMNS} FROM employers WHERE employer_id = $1"
        ))
        .bind(employer_id)
        .fetch_optional(self.pool())
        .await
    }

    async fn get_employer_by_email(&self, email: &str) -> Result<Option<Employer>, sqlx::Error> {
        sqlx::query_as::<_, Employer>(&format!(
            "SELECT {EMPLOYER_COLUMNS} FROM employers WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(self.pool())
        .await
    }

    async fn get_employer_by_phone(&self, phone: &str) -> Result<Option<Employer>, sqlx::Error> {
        sqlx::query_as::<_, Employer>(&format!(
            "SELECT {EMPLOYER_COLUMNS} FROM employers WHERE phone = $1"
        ))
        .bind(phone)
        .fetch_optional(self.pool())
        .await
    }

    async fn get_employer_by_ident(&self, ident: &str) -> Result<Option<Employer>, sqlx::Error> {
        let numeric_id = ident.parse::<i64>().ok();

        sqlx::query_as::<_, Employer>(&format!(
            r#"
            SELECT {EMPLOYER_COLUMNS}
            FROM employers
            WHERE ($1::BIGINT IS NOT NULL AND id = $1) OR employer_id = $2
            "#
        ))
        .bind(numeric_id)
        .bind(ident)
        .fetch_optional(self.pool())
        .await
    }

    async fn get_employers(
        &self,
        status: Option<EmployerStatus>,
        verification: Option<VerificationStatus>,
    ) -> Result<Vec<Employer>, sqlx::Error> {
        sqlx::query_as::<_, Employer>(&format!(
            r#"
            SELECT {EMPLOYER_COLUMNS}
            FROM employers
            WHERE ($1::employer_status IS NULL OR status = $1)
              AND ($2::verification_status IS NULL OR verification_status = $2)
            ORDER BY created_at DESC
            "#
        ))
        .bind(status)
        .bind(verification)
        .fetch_all(self.pool())
        .await
    }

    async fn get_pending_verifications(&self) -> Result<Vec<Employer>, sqlx::Error> {
        sqlx::query_as::<_, Employer>(&format!(
            r#"
            SELECT {EMPLOYER_COLUMNS}
            FROM employers
            WHERE verification_status = 'pending'
            ORDER BY created_at ASC
            "#
        ))
        .fetch_all(self.pool())
        .await
    }

    async fn update_verification(
        &self,
        id: i64,
        decision: VerificationStatus,
        notes: Option<&str>,
        admin_id: Option<i64>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE employers
            SET verification_status = $2,
                verification_notes = $3,
                verified_by = $4,
                verified_at = NOW(),
                status = CASE WHEN $2 = 'verified'::verification_status
                              THEN 'active'::employer_status
                              ELSE 'inactive'::employer_status END
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(decision)
        .bind(notes)
        .bind(admin_id)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    async fn get_verification_stats(&self) -> Result<EmployerVerificationStats, sqlx::Error> {
        sqlx::query_as::<_, EmployerVerificationStats>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE verification_status = 'pending') AS pending,
                COUNT(*) FILTER (WHERE verification_status = 'verified') AS verified,
                COUNT(*) FILTER (WHERE verification_status = 'rejected') AS rejected
            FROM employers
            "#,
        )
        .fetch_one(self.pool())
        .await
    }

    async fn get_employer_stats(&self) -> Result<EmployerStats, sqlx::Error> {
        sqlx::query_as::<_, EmployerStats>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE status = 'active') AS active,
                COUNT(*) FILTER (WHERE status = 'inactive') AS inactive,
                COALESCE(SUM(workers_count), 0)::BIGINT AS total_workers,
                COALESCE(AVG(rating), 0)::DOUBLE PRECISION AS average_rating
            FROM employers
            "#,
        )
        .fetch_one(self.pool())
        .await
    }
}
