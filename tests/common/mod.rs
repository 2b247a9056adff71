use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::Response;
use clap::Parser;
use http_body_util::BodyExt;

use magicstream_api::config::AppConfig;
use magicstream_api::database::Database;
use magicstream_api::server::ApplicationServer;
use magicstream_api::server::services::Services;

pub fn test_config() -> Arc<AppConfig> {
    Arc::new(AppConfig::parse_from([
        "magicstream-api",
        "--cargo-env",
        "development",
        "--access-token-secret",
        "not-a-real-secret",
        "--database-url",
        "sqlite::memory:",
        "--run-migrations",
    ]))
}

/// a full router over a fresh in-memory sqlite database
pub async fn test_router() -> (Router, Arc<AppConfig>) {
    let config = test_config();
    let router = router_with(config.clone()).await;
    (router, config)
}

pub async fn router_with(config: Arc<AppConfig>) -> Router {
    let db = Database::connect(&config.database_url, config.run_migrations)
        .await
        .expect("in-memory sqlite should always connect");

    let services = Services::new(db, config.clone());
    ApplicationServer::router(services, &config)
}

pub async fn response_json(response: Response<Body>) -> serde_json::Value {
    let body = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();

    serde_json::from_slice(&body).expect("body should be json")
}
