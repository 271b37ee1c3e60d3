use async_trait::async_trait;

use crate::models::adminmodel::Admin;

use super::DBClient;

const ADMIN_COLUMNS: &str = "id, username, password, name, email, role, created_at";

#[async_trait]
pub trait AdminExt {
    async fn get_admin(&self, id: i64) -> Result<Option<Admin>, sqlx::Error>;

    async fn get_admin_by_username(&self, username: &str) -> Result<Option<Admin>, sqlx::Error>;

    async fn save_admin(
        &self,
        username: &str,
        password_hash: &str,
        name: &str,
        email: Option<&str>,
        role: &str,
    ) -> Result<i64, sqlx::Error>;
}

#[async_trait]
impl AdminExt for DBClient {
    async fn get_admin(&self, id: i64) -> Result<Option<Admin>, sqlx::Error> {
        sqlx::query_as::<_, Admin>(&format!(
            "SELECT {ADMIN_COLUMNS} FROM admin WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await
    }

    async fn get_admin_by_username(&self, username: &str) -> Result<Option<Admin>, sqlx::Error> {
        sqlx::query_as::<_, Admin>(&format!(
            "SELECT {ADMIN_COLUMNS} FROM admin WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(self.pool())
        .await
    }

    async fn save_admin(
        &self,
        username: &str,
        password_hash: &str,
        name: &str,
        email: Option<&str>,
        role: &str,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO admin (username, password, name, email, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(name)
        .bind(email)
        .bind(role)
        .fetch_one(self.pool())
        .await
    }
}
