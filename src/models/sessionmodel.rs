use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sessions live for one hour from creation; expiry is enforced at read
/// time, there is no background eviction.
pub const SESSION_TTL_SECS: i64 = 3600;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct Session {
    pub session_id: String,
    pub worker_id: i64,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Session row joined with the owning worker, as resolved by the auth gate.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct SessionWorker {
    pub session_id: String,
    pub worker_id: i64,
    pub expires_at: DateTime<Utc>,
    pub migrant_id: String,
    pub name: String,
    pub phone: String,
}
