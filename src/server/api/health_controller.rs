use axum::Extension;
use axum::Json;
use axum::http::StatusCode;
use tracing::error;

use crate::server::dtos::health_dto::{HealthResponse, HealthStatus};
use crate::server::services::Services;

/// readiness probe, /hello only proves the process is up while this proves
/// the database is still answering
pub async fn health_endpoint(
    Extension(services): Extension<Services>,
) -> (StatusCode, Json<HealthResponse>) {
    match services.database.health_check().await {
        Ok(response_time_ms) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: HealthStatus::Healthy,
                database_response_time_ms: Some(response_time_ms),
            }),
        ),
        Err(e) => {
            error!("database health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: HealthStatus::Unhealthy,
                    database_response_time_ms: None,
                }),
            )
        }
    }
}
