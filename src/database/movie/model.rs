use std::{sync::Arc, time::SystemTime};

use async_trait::async_trait;
use mockall::automock;
use sqlx::FromRow;
use sqlx::types::time::OffsetDateTime;

/// a catalogue entry, genres are kept as a json array in a text column so the
/// schema works the same on postgres and sqlite
#[derive(FromRow, Debug, Clone)]
pub struct Movie {
    pub id: String,
    pub imdb_id: String,
    pub title: String,
    pub overview: String,
    pub genres: String,
    pub ranking: Option<i64>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Default for Movie {
    fn default() -> Self {
        Movie {
            id: String::from("Uakgb_J5m9g"),
            imdb_id: String::from("tt0111161"),
            title: String::from("stub title"),
            overview: String::from("stub overview"),
            genres: String::from(r#"["Drama"]"#),
            ranking: None,
            created_at: OffsetDateTime::from(SystemTime::now()),
            updated_at: OffsetDateTime::from(SystemTime::now()),
        }
    }
}

pub type DynMoviesRepository = Arc<dyn MoviesRepository + Send + Sync>;

#[automock]
#[async_trait]
pub trait MoviesRepository {
    async fn create_movie(
        &self,
        imdb_id: &str,
        title: &str,
        overview: &str,
        genres: &str,
        ranking: Option<i64>,
    ) -> anyhow::Result<Movie>;
    async fn get_movie_by_imdb_id(&self, imdb_id: &str) -> anyhow::Result<Option<Movie>>;
    async fn get_movies(&self) -> anyhow::Result<Vec<Movie>>;
}
