mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

#[tokio::test]
async fn greet_with_the_magic_stream_banner() {
    // arrange
    let (router, _config) = common::test_router().await;

    // act
    let response = router
        .oneshot(
            Request::builder()
                .uri("/hello")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // assert
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"Hello, MagicStreamMovies!");
}

#[tokio::test]
async fn report_a_healthy_database() {
    // arrange
    let (router, _config) = common::test_router().await;

    // act
    let response = router
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // assert
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["database_response_time_ms"].is_number());
}

#[tokio::test]
async fn return_a_json_404_for_unknown_paths() {
    // arrange
    let (router, _config) = common::test_router().await;

    // act
    let response = router
        .oneshot(
            Request::builder()
                .uri("/definitely-not-a-route")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // assert
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = common::response_json(response).await;
    assert!(body["errors"]["message"].is_array());
}
