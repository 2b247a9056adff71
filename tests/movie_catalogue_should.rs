mod common;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn signup_and_signin(router: &Router) -> String {
    let signup = Request::builder()
        .method("POST")
        .uri("/signup")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "name": "catalogue admin",
                "email": "admin@magicstream.dev",
                "password": "correct horse battery staple"
            })
            .to_string(),
        ))
        .unwrap();

    let response = router.clone().oneshot(signup).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let signin = Request::builder()
        .method("POST")
        .uri("/signin")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "email": "admin@magicstream.dev",
                "password": "correct horse battery staple"
            })
            .to_string(),
        ))
        .unwrap();

    let response = router.clone().oneshot(signin).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::response_json(response).await;
    let token = body["user"]["access_token"]
        .as_str()
        .expect("signin should return an access token");
    assert!(!token.is_empty());

    token.to_string()
}

fn add_movie_request(token: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/addmovie")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

#[tokio::test]
async fn round_trip_a_movie_through_the_database() {
    // arrange
    let (router, _config) = common::test_router().await;
    let token = signup_and_signin(&router).await;

    let payload = json!({
        "imdb_id": "tt0111161",
        "title": "The Shawshank Redemption",
        "overview": "two imprisoned men bond over a number of years",
        "genres": ["Drama"],
        "ranking": 1
    });

    // act
    let response = router
        .clone()
        .oneshot(add_movie_request(&token, payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/movie/tt0111161")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // assert
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::response_json(response).await;
    assert_eq!(body["imdb_id"], "tt0111161");
    assert_eq!(body["title"], "The Shawshank Redemption");
    assert_eq!(body["genres"], json!(["Drama"]));
    assert_eq!(body["ranking"], 1);
}

#[tokio::test]
async fn reject_a_duplicate_imdb_id_with_a_conflict() {
    // arrange
    let (router, _config) = common::test_router().await;
    let token = signup_and_signin(&router).await;

    let payload = json!({
        "imdb_id": "tt0068646",
        "title": "The Godfather"
    });

    let response = router
        .clone()
        .oneshot(add_movie_request(&token, payload.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // act
    let response = router
        .clone()
        .oneshot(add_movie_request(&token, payload))
        .await
        .unwrap();

    // assert
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn return_not_found_for_an_unknown_imdb_id() {
    // arrange
    let (router, _config) = common::test_router().await;
    let token = signup_and_signin(&router).await;

    // act
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/movie/tt9999999")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // assert
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn reject_an_imdb_id_that_is_not_imdb_shaped() {
    // arrange
    let (router, _config) = common::test_router().await;
    let token = signup_and_signin(&router).await;

    let payload = json!({
        "imdb_id": "shawshank",
        "title": "The Shawshank Redemption"
    });

    // act
    let response = router
        .clone()
        .oneshot(add_movie_request(&token, payload))
        .await
        .unwrap();

    // assert
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = common::response_json(response).await;
    assert!(body["errors"]["imdb_id"].is_array());
}

#[tokio::test]
async fn reject_a_body_that_is_not_json_at_all() {
    // arrange
    let (router, _config) = common::test_router().await;
    let token = signup_and_signin(&router).await;

    // act
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/addmovie")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("definitely not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    // assert
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_the_catalogue_without_credentials_ranked_first() {
    // arrange
    let (router, _config) = common::test_router().await;
    let token = signup_and_signin(&router).await;

    let second = json!({ "imdb_id": "tt0468569", "title": "The Dark Knight", "ranking": 3 });
    let first = json!({ "imdb_id": "tt0111161", "title": "The Shawshank Redemption", "ranking": 1 });

    for payload in [second, first] {
        let response = router
            .clone()
            .oneshot(add_movie_request(&token, payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    // act, note there is no authorization header here
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/movies")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // assert
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::response_json(response).await;
    let movies = body["movies"].as_array().expect("movies should be a list");
    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0]["imdb_id"], "tt0111161");
    assert_eq!(movies[1]["imdb_id"], "tt0468569");
}

#[tokio::test]
async fn reject_a_signin_with_the_wrong_password() {
    // arrange
    let (router, _config) = common::test_router().await;
    let _token = signup_and_signin(&router).await;

    // act
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/signin")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "email": "admin@magicstream.dev",
                        "password": "definitely not the password"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    // assert
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
