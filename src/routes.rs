use std::sync::Arc;

use axum::{
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use serde_json::json;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{
    handler::{
        admin::admin_handler, auth::auth_handler, complaint::complaint_handler,
        dashboard::dashboard_handler, employer::employer_handler, job::job_handler,
        worker::worker_handler,
    },
    AppState,
};

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let static_dir = app_state.env.static_dir.clone();

    let api_route = Router::new()
        .merge(auth_handler())
        .merge(worker_handler())
        .nest("/complaint", complaint_handler())
        .nest("/employers", employer_handler())
        .nest("/dashboard", dashboard_handler())
        .nest("/jobs", job_handler())
        .nest("/admin", admin_handler())
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state));

    Router::new()
        .route_service("/", ServeFile::new(format!("{static_dir}/index.html")))
        .nest_service("/pages", ServeDir::new(format!("{static_dir}/pages")))
        .nest_service("/css", ServeDir::new(format!("{static_dir}/css")))
        .nest_service("/js", ServeDir::new(format!("{static_dir}/js")))
        .route("/favicon.ico", get(favicon))
        .nest("/api", api_route)
}
