mod config;
mod db;
mod dtos;
mod error;
mod handler;
mod middleware;
mod models;
mod routes;
mod utils;

use std::sync::Arc;

use axum::http::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    HeaderName, Method,
};
use config::Config;
use db::DBClient;
use dotenv::dotenv;
use routes::create_router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct AppState {
    pub env: Config,
    pub db_client: DBClient,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    dotenv().ok();

    let config = Config::init();

    let pool = match PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => {
            tracing::info!("connected to the database");
            pool
        }
        Err(err) => {
            tracing::error!("failed to connect to the database: {err:?}");
            std::process::exit(1);
        }
    };

    if let Err(err) = sqlx::migrate!().run(&pool).await {
        tracing::error!("failed to run migrations: {err:?}");
        std::process::exit(1);
    }

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_headers([
            AUTHORIZATION,
            ACCEPT,
            CONTENT_TYPE,
            HeaderName::from_static("x-admin-id"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::PUT]);

    let db_client = DBClient::new(pool);

    if let Err(err) = bootstrap_admin(&db_client, &config).await {
        tracing::error!("failed to bootstrap admin account: {err}");
        std::process::exit(1);
    }

    let app_state = AppState {
        env: config.clone(),
        db_client,
    };

    let app = create_router(Arc::new(app_state)).layer(cors);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind listener");

    tracing::info!("server listening on http://localhost:{}", config.port);

    axum::serve(listener, app).await.expect("server error");
}

/// Creates the admin account on first boot when ADMIN_PASSWORD is set.
async fn bootstrap_admin(
    db_client: &DBClient,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    use db::AdminExt;

    let Some(admin_password) = &config.admin_password else {
        return Ok(());
    };

    if db_client
        .get_admin_by_username(&config.admin_username)
        .await?
        .is_some()
    {
        return Ok(());
    }

    let hashed = utils::password::hash(admin_password.as_str())?;
    db_client
        .save_admin(
            &config.admin_username,
            &hashed,
            "Administrator",
            None,
            "admin",
        )
        .await?;

    tracing::info!("admin account '{}' created", config.admin_username);

    Ok(())
}
