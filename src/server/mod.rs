mod api;
pub mod dtos;
pub mod error;
pub mod extractors;
pub mod services;
pub mod utils;

use std::future::ready;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use axum::Extension;
use axum::extract::MatchedPath;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::method;
use axum::http::request::Parts as RequestParts;
use axum::http::{HeaderValue, Request};
use axum::middleware::{self, Next};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{BoxError, Json, Router, error_handling::HandleErrorLayer, http::StatusCode};
use lazy_static::lazy_static;
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder};
use serde_json::json;
use tower::{ServiceBuilder, buffer::BufferLayer, limit::RateLimitLayer};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::database::Database;
use crate::server::api::movie_controller::MovieController;
use crate::server::api::user_controller::UserController;
use crate::server::services::Services;
use crate::server::services::seed_services::SeedService;

lazy_static! {
    static ref HTTP_TIMEOUT: u64 = 30;
    static ref EXPONENTIAL_SECONDS: &'static [f64] = &[
        0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
    ];
}

pub struct ApplicationServer;

impl ApplicationServer {
    pub async fn serve(config: Arc<AppConfig>, db: Database) -> anyhow::Result<()> {
        let recorder_handle = PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Full(String::from("http_requests_duration_seconds")),
                *EXPONENTIAL_SECONDS,
            )
            .context("could not setup metric buckets")?
            .install_recorder()
            .context("could not install the metric recorder")?;

        let services = Services::new(db, config.clone());

        if config.seed {
            info!("seeding enabled, creating the demo catalogue...");
            SeedService::new(services.clone())
                .seed()
                .await
                .context("couldn't seed the db")?;
        }

        let router = Self::router(services, &config)
            .route("/metrics", get(move || ready(recorder_handle.render())));

        let port = format!("0.0.0.0:{}", config.port);
        let addr = tokio::net::TcpListener::bind(&port)
            .await
            .with_context(|| format!("could not bind to {}", port))?;

        info!("Setup completed, initialized server on port {port}");
        debug!("routes initialized, listening on port {}", &port);

        axum::serve(addr, router)
            .with_graceful_shutdown(Self::shutdown_signal())
            .await
            .context("axum serving failed")?;

        Ok(())
    }

    /// the full route table minus the metrics exposition endpoint, split out
    /// so tests can drive the router without installing a global recorder
    pub fn router(services: Services, config: &AppConfig) -> Router {
        let cors_origin = config.cors_origin.clone();

        let cors = CorsLayer::new()
            .allow_origin(AllowOrigin::predicate(
                move |origin: &HeaderValue, _request_parts: &RequestParts| {
                    let origin_str = origin.to_str().unwrap_or("");

                    if cors_origin == "*" {
                        return true;
                    }

                    if let Some(host) = origin_str
                        .strip_prefix("https://")
                        .or_else(|| origin_str.strip_prefix("http://"))
                    {
                        // subdomains of the configured origin are allowed, the
                        // dot keeps evil-example.com from riding along with
                        // example.com
                        if host == &cors_origin[..]
                            || host.ends_with(&format!(".{}", cors_origin))
                        {
                            return true;
                        }
                    }

                    origin_str == &cors_origin
                },
            ))
            .allow_methods([
                method::Method::GET,
                method::Method::POST,
                method::Method::OPTIONS,
            ])
            .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT])
            .allow_credentials(true);

        let router = Router::new()
            .merge(MovieController::app())
            .merge(UserController::app())
            .route("/hello", get(api::hello))
            .route("/health", get(api::health_controller::health_endpoint))
            .layer(cors)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(HandleErrorLayer::new(Self::handle_timeout_error))
                    .timeout(Duration::from_secs(*HTTP_TIMEOUT))
                    .layer(Extension(services))
                    .layer(BufferLayer::new(1024))
                    // generous, only a backstop against someone hammering the
                    // catalogue endpoints
                    .layer(RateLimitLayer::new(64, Duration::from_secs(1))),
            )
            .route_layer(middleware::from_fn(Self::track_metrics));

        router.fallback(Self::handle_404)
    }

    // custom timeout layer
    async fn handle_timeout_error(err: BoxError) -> (StatusCode, Json<serde_json::Value>) {
        if err.is::<tower::timeout::error::Elapsed>() {
            (
                StatusCode::REQUEST_TIMEOUT,
                Json(json!({
                    "error":
                        format!(
                            "request took longer than the configured {} second timeout",
                            *HTTP_TIMEOUT
                        )
                })),
            )
        } else {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": format!("unhandled internal error: {}", err)
                })),
            )
        }
    }

    async fn track_metrics(request: Request<axum::body::Body>, next: Next) -> impl IntoResponse {
        let path = if let Some(matched_path) = request.extensions().get::<MatchedPath>() {
            matched_path.as_str().to_owned()
        } else {
            request.uri().path().to_owned()
        };
        let start = Instant::now();
        let method = request.method().clone();
        let response = next.run(request).await;
        let latency = start.elapsed().as_secs_f64();
        let status = response.status().as_u16().to_string();

        metrics::counter!("http_requests_total", "method" => method.to_string(), "path" => path.clone(), "status" => status.clone()).increment(1);

        metrics::histogram!("http_requests_duration_seconds", "method" => method.to_string(), "path" => path, "status" => status).record(latency);

        response
    }

    async fn shutdown_signal() {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for SIGINT");
        info!("signal shutdown");
    }

    async fn handle_404() -> impl IntoResponse {
        (
            StatusCode::NOT_FOUND,
            axum::response::Json(serde_json::json!({
            "errors":{
            "message": vec!(String::from("This resource doesn't exist.")),}
            })),
        )
    }
}
