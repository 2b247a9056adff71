use axum::Router;
use axum::extract::{Extension, Json, Path};
use axum::routing::{get, post};
use tracing::info;

use crate::server::dtos::movie_dto::{AddMovieRequest, MovieResponse, MoviesResponse};
use crate::server::error::AppResult;
use crate::server::extractors::{RequiredAuthentication, ValidatedJson};
use crate::server::services::Services;

pub struct MovieController;

/*
*    /movies - GET - the full catalogue, no auth needed so the storefront can
*    render before anyone signs in
*
*    /movie/{imdb_id} - GET - single movie by imdb id, requires a Bearer access
*    token from /signin
*
*    /addmovie - POST - takes json with imdb_id, title, overview, genres,
*    ranking and creates the catalogue entry, requires a Bearer access token
* */
impl MovieController {
    pub fn app() -> Router {
        Router::new()
            .route("/movies", get(Self::get_movies_endpoint))
            .route("/movie/{imdb_id}", get(Self::get_movie_endpoint))
            .route("/addmovie", post(Self::add_movie_endpoint))
    }

    pub async fn get_movies_endpoint(
        Extension(services): Extension<Services>,
    ) -> AppResult<Json<MoviesResponse>> {
        info!("recieved request to list the movie catalogue");

        let movies = services.movies.get_movies().await?;

        Ok(Json(movies))
    }

    pub async fn get_movie_endpoint(
        RequiredAuthentication(user_id, services): RequiredAuthentication,
        Path(imdb_id): Path<String>,
    ) -> AppResult<Json<MovieResponse>> {
        info!(
            "recieved request from user {:?} to get movie {:?}",
            user_id, imdb_id
        );

        let movie = services.movies.get_movie_by_imdb_id(&imdb_id).await?;

        Ok(Json(movie))
    }

    pub async fn add_movie_endpoint(
        RequiredAuthentication(user_id, services): RequiredAuthentication,
        ValidatedJson(request): ValidatedJson<AddMovieRequest>,
    ) -> AppResult<Json<MovieResponse>> {
        info!(
            "recieved request from user {:?} to add movie {:?}",
            user_id, request.imdb_id
        );

        let created_movie = services.movies.add_movie(request).await?;

        Ok(Json(created_movie))
    }
}
