use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "worker_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum WorkerStatus {
    Active,
    Inactive,
}

impl WorkerStatus {
    pub fn to_str(&self) -> &'static str {
        match self {
            WorkerStatus::Active => "active",
            WorkerStatus::Inactive => "inactive",
        }
    }
}

/// Worker row joined with the current employer's company name.
/// Every read goes through the same LEFT JOIN so the profile endpoints
/// can surface `current_employer` without a second query.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct Worker {
    pub id: i64,
    pub migrant_id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub aadhaar: Option<String>,
    pub skill: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub address: Option<String>,
    pub work_location: Option<String>,
    pub status: WorkerStatus,
    pub current_employer_id: Option<i64>,
    pub current_employer_name: Option<String>,
    pub created_at: DateTime<Utc>,
}
