use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,

    /// round trip of a `SELECT 1` against the pool, absent when the check
    /// itself failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_response_time_ms: Option<f64>,
}
