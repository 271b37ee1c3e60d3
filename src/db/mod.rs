use sqlx::{Pool, Postgres};

pub mod admindb;
pub mod applicationdb;
pub mod complaintdb;
pub mod employerdb;
pub mod jobdb;
pub mod sessiondb;
pub mod workerdb;

pub use admindb::AdminExt;
pub use applicationdb::ApplicationExt;
pub use complaintdb::ComplaintExt;
pub use employerdb::EmployerExt;
pub use jobdb::JobExt;
pub use sessiondb::SessionExt;
pub use workerdb::WorkerExt;

#[derive(Debug, Clone)]
pub struct DBClient {
    pool: Pool<Postgres>,
}

impl DBClient {
    pub fn new(pool: Pool<Postgres>) -> Self {
        DBClient { pool }
    }

    pub fn pool(&self) -> &Pool<Postgres> {
        &self.pool
    }
}
