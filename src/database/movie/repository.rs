// plain sql for the movie catalogue
use anyhow::Context;
use async_trait::async_trait;
use nanoid::nanoid;
use sqlx::query_as;

use crate::database::{ConnectionPool, Database};

use super::{Movie, MoviesRepository};

#[async_trait]
impl MoviesRepository for Database {
    async fn create_movie(
        &self,
        imdb_id: &str,
        title: &str,
        overview: &str,
        genres: &str,
        ranking: Option<i64>,
    ) -> anyhow::Result<Movie> {
        let movie_id: String = nanoid!();

        match &self.pool {
            ConnectionPool::Postgres(pool) => {
                sqlx::query(
                    r#"
                insert into movies (id, imdb_id, title, overview, genres, ranking)
                values ($1, $2, $3, $4, $5, $6)
                    "#,
                )
                .bind(&movie_id)
                .bind(imdb_id)
                .bind(title)
                .bind(overview)
                .bind(genres)
                .bind(ranking)
                .execute(pool)
                .await
                .context("an unexpected error occured while creating the movie")?;
            }
            ConnectionPool::Sqlite(pool) => {
                sqlx::query(
                    r#"
                insert into movies (id, imdb_id, title, overview, genres, ranking)
                values (?, ?, ?, ?, ?, ?)
                    "#,
                )
                .bind(&movie_id)
                .bind(imdb_id)
                .bind(title)
                .bind(overview)
                .bind(genres)
                .bind(ranking)
                .execute(pool)
                .await
                .context("an unexpected error occured while creating the movie")?;
            }
        }

        match self.get_movie_by_imdb_id(imdb_id).await? {
            Some(movie) => Ok(movie),
            None => anyhow::bail!("movie disappeared right after insert"),
        }
    }

    async fn get_movie_by_imdb_id(&self, imdb_id: &str) -> anyhow::Result<Option<Movie>> {
        match &self.pool {
            ConnectionPool::Postgres(pool) => query_as::<_, Movie>(
                r#"
                select *
                from movies
                where imdb_id = $1
                    "#,
            )
            .bind(imdb_id)
            .fetch_optional(pool)
            .await
            .context("unexpected error while querying for movie by imdb id"),
            ConnectionPool::Sqlite(pool) => query_as::<_, Movie>(
                r#"
                select *
                from movies
                where imdb_id = ?
                    "#,
            )
            .bind(imdb_id)
            .fetch_optional(pool)
            .await
            .context("unexpected error while querying for movie by imdb id"),
        }
    }

    async fn get_movies(&self) -> anyhow::Result<Vec<Movie>> {
        // ranked movies first, then whatever is newest
        match &self.pool {
            ConnectionPool::Postgres(pool) => query_as::<_, Movie>(
                r#"
                select *
                from movies
                order by ranking nulls last, created_at desc
                    "#,
            )
            .fetch_all(pool)
            .await
            .context("unexpected error while listing movies"),
            ConnectionPool::Sqlite(pool) => query_as::<_, Movie>(
                r#"
                select *
                from movies
                order by ranking is null, ranking, created_at desc
                    "#,
            )
            .fetch_all(pool)
            .await
            .context("unexpected error while listing movies"),
        }
    }
}
