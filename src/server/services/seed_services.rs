use tracing::{info, warn};

use crate::server::dtos::movie_dto::AddMovieRequest;
use crate::server::error::AppResult;
use crate::server::services::Services;

/// drops a small demo catalogue into the database so a fresh instance has
/// something to stream
pub struct SeedService {
    services: Services,
}

impl SeedService {
    pub fn new(services: Services) -> Self {
        Self { services }
    }

    pub async fn seed(&self) -> AppResult<()> {
        for request in Self::demo_catalogue() {
            let imdb_id = request.imdb_id.clone();
            // re-running the seed on an already seeded database is fine, the
            // conflicts just get skipped
            match self.services.movies.add_movie(request).await {
                Ok(movie) => info!("seeded movie {:?} ({})", movie.title, movie.imdb_id),
                Err(err) => warn!("skipping seed for {}: {}", imdb_id, err),
            }
        }

        Ok(())
    }

    fn demo_catalogue() -> Vec<AddMovieRequest> {
        vec![
            AddMovieRequest {
                imdb_id: String::from("tt0111161"),
                title: String::from("The Shawshank Redemption"),
                overview: String::from(
                    "Two imprisoned men bond over a number of years, finding solace \
                     and eventual redemption through acts of common decency.",
                ),
                genres: vec![String::from("Drama")],
                ranking: Some(1),
            },
            AddMovieRequest {
                imdb_id: String::from("tt0068646"),
                title: String::from("The Godfather"),
                overview: String::from(
                    "The aging patriarch of an organized crime dynasty transfers \
                     control of his empire to his reluctant son.",
                ),
                genres: vec![String::from("Crime"), String::from("Drama")],
                ranking: Some(2),
            },
            AddMovieRequest {
                imdb_id: String::from("tt0468569"),
                title: String::from("The Dark Knight"),
                overview: String::from(
                    "Batman must accept one of the greatest psychological and \
                     physical tests of his ability to fight injustice.",
                ),
                genres: vec![String::from("Action"), String::from("Crime")],
                ranking: Some(3),
            },
        ]
    }
}
