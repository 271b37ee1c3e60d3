use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::models::sessionmodel::{Session, SessionWorker, SESSION_TTL_SECS};

use super::DBClient;

#[async_trait]
pub trait SessionExt {
    /// Mints an opaque token for the worker, valid for one hour.
    async fn create_session(
        &self,
        worker_id: i64,
        ip_address: Option<&str>,
        user_agent: Option<&str>,
    ) -> Result<Session, sqlx::Error>;

    /// Resolves a token to its worker. Expired sessions are filtered out
    /// here rather than evicted.
    async fn get_session(&self, session_id: &str)
        -> Result<Option<SessionWorker>, sqlx::Error>;

    async fn delete_session(&self, session_id: &str) -> Result<u64, sqlx::Error>;
}

#[async_trait]
impl SessionExt for DBClient {
    async fn create_session(
        &self,
        worker_id: i64,
        ip_address: Option<&str>,
        user_agent: Option<&str>,
    ) -> Result<Session, sqlx::Error> {
        let token = Uuid::new_v4().to_string();
        let expires_at = Utc::now() + Duration::seconds(SESSION_TTL_SECS);

        sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO sessions (session_id, worker_id, ip_address, user_agent, expires_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING session_id, worker_id, ip_address, user_agent, created_at, expires_at
            "#,
        )
        .bind(&token)
        .bind(worker_id)
        .bind(ip_address)
        .bind(user_agent)
        .bind(expires_at)
        .fetch_one(self.pool())
        .await
    }

    async fn get_session(
        &self,
        session_id: &str,
    ) -> Result<Option<SessionWorker>, sqlx::Error> {
        sqlx::query_as::<_, SessionWorker>(
            r#"
            SELECT s.session_id, s.worker_id, s.expires_at,
                   w.migrant_id, w.name, w.phone
            FROM sessions s
            JOIN workers w ON s.worker_id = w.id
            WHERE s.session_id = $1 AND s.expires_at > NOW()
            "#,
        )
        .bind(session_id)
        .fetch_optional(self.pool())
        .await
    }

    async fn delete_session(&self, session_id: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE session_id = $1")
            .bind(session_id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected())
    }
}
