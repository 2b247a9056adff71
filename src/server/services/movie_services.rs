use std::sync::Arc;

use tracing::{error, info};

use crate::database::movie::DynMoviesRepository;
use crate::server::dtos::movie_dto::{AddMovieRequest, MovieResponse, MoviesResponse};
use crate::server::error::{AppResult, Error};

pub type DynMoviesService = Arc<dyn MoviesServiceTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MoviesServiceTrait {
    /// add a movie to the catalogue, imdb ids are unique
    async fn add_movie(&self, request: AddMovieRequest) -> AppResult<MovieResponse>;

    /// fetch a single movie by its imdb id
    async fn get_movie_by_imdb_id(&self, imdb_id: &str) -> AppResult<MovieResponse>;

    /// the whole catalogue, ranked entries first
    async fn get_movies(&self) -> AppResult<MoviesResponse>;
}

pub struct MoviesService {
    repository: DynMoviesRepository,
}

impl MoviesService {
    pub fn new(repository: DynMoviesRepository) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl MoviesServiceTrait for MoviesService {
    async fn add_movie(&self, request: AddMovieRequest) -> AppResult<MovieResponse> {
        let existing_movie = self
            .repository
            .get_movie_by_imdb_id(&request.imdb_id)
            .await?;

        if existing_movie.is_some() {
            error!("movie {:?} is already in the catalogue", request.imdb_id);
            return Err(Error::ObjectConflict(format!(
                "movie with imdb id {} already exists",
                request.imdb_id
            )));
        }

        let genres = serde_json::to_string(&request.genres)
            .map_err(|err| Error::InternalServerErrorWithContext(err.to_string()))?;

        let created_movie = self
            .repository
            .create_movie(
                &request.imdb_id,
                &request.title,
                &request.overview,
                &genres,
                request.ranking,
            )
            .await?;

        info!(
            "movie {:?} added to the catalogue as {:?}",
            created_movie.imdb_id, created_movie.id
        );

        Ok(MovieResponse::from(created_movie))
    }

    async fn get_movie_by_imdb_id(&self, imdb_id: &str) -> AppResult<MovieResponse> {
        let movie = self.repository.get_movie_by_imdb_id(imdb_id).await?;

        match movie {
            Some(movie) => Ok(MovieResponse::from(movie)),
            None => Err(Error::NotFound(format!(
                "movie with imdb id {} was not found",
                imdb_id
            ))),
        }
    }

    async fn get_movies(&self) -> AppResult<MoviesResponse> {
        let movies = self.repository.get_movies().await?;

        Ok(MoviesResponse {
            movies: movies.into_iter().map(MovieResponse::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::database::movie::{MockMoviesRepository, Movie};

    fn stub_request() -> AddMovieRequest {
        AddMovieRequest {
            imdb_id: String::from("tt0111161"),
            title: String::from("The Shawshank Redemption"),
            overview: String::from("two imprisoned men bond over a number of years"),
            genres: vec![String::from("Drama")],
            ranking: Some(1),
        }
    }

    #[tokio::test]
    async fn add_movie_returns_conflict_when_imdb_id_exists() {
        // arrange
        let mut mock_repository = MockMoviesRepository::new();
        mock_repository
            .expect_get_movie_by_imdb_id()
            .returning(|_| Ok(Some(Movie::default())));
        mock_repository.expect_create_movie().times(0);

        let service = MoviesService::new(Arc::new(mock_repository));

        // act
        let result = service.add_movie(stub_request()).await;

        // assert
        assert!(matches!(result, Err(Error::ObjectConflict(_))));
    }

    #[tokio::test]
    async fn add_movie_stores_genres_as_json() {
        // arrange
        let mut mock_repository = MockMoviesRepository::new();
        mock_repository
            .expect_get_movie_by_imdb_id()
            .returning(|_| Ok(None));
        mock_repository
            .expect_create_movie()
            .withf(|_, _, _, genres, _| genres == r#"["Drama"]"#)
            .times(1)
            .returning(|_, _, _, _, _| Ok(Movie::default()));

        let service = MoviesService::new(Arc::new(mock_repository));

        // act
        let result = service.add_movie(stub_request()).await;

        // assert
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn get_movie_returns_not_found_for_unknown_imdb_id() {
        // arrange
        let mut mock_repository = MockMoviesRepository::new();
        mock_repository
            .expect_get_movie_by_imdb_id()
            .returning(|_| Ok(None));

        let service = MoviesService::new(Arc::new(mock_repository));

        // act
        let result = service.get_movie_by_imdb_id("tt9999999").await;

        // assert
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn get_movies_maps_rows_into_responses() {
        // arrange
        let mut mock_repository = MockMoviesRepository::new();
        mock_repository
            .expect_get_movies()
            .returning(|| Ok(vec![Movie::default(), Movie::default()]));

        let service = MoviesService::new(Arc::new(mock_repository));

        // act
        let result = service.get_movies().await;

        // assert
        assert!(result.is_ok());
        let response = result.unwrap();
        assert_eq!(response.movies.len(), 2);
        assert_eq!(response.movies[0].genres, vec![String::from("Drama")]);
    }
}
