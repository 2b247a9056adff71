use anyhow::{Context, Ok};
use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{PgPool, Pool, Sqlite};
use std::time::Instant;
use tracing::info;

#[derive(Debug, Clone)]
pub enum ConnectionPool {
    Postgres(PgPool),
    Sqlite(Pool<Sqlite>),
}

#[derive(Debug, Clone)]
pub struct Database {
    pub pool: ConnectionPool,
}

impl Database {
    pub async fn connect(connection_string: &str, run_migrations: bool) -> anyhow::Result<Self> {
        let pool = if connection_string.starts_with("postgres://")
            || connection_string.starts_with("postgresql://")
        {
            info!("Connecting to Postgres database");
            let pg_pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(connection_string)
                .await
                .context("Failed to connect to Postgres database")?;

            if run_migrations {
                info!("migrations enabled, running postgres migrations...");
                sqlx::query(
                    r#"
                    CREATE TABLE IF NOT EXISTS users
                    (
                        id         VARCHAR NOT NULL PRIMARY KEY,
                        name       VARCHAR NOT NULL DEFAULT '',
                        email      VARCHAR NOT NULL DEFAULT '',
                        password   VARCHAR NOT NULL DEFAULT '',
                        created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP,
                        updated_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
                    );
                    "#,
                )
                .execute(&pg_pool)
                .await
                .context("Failed to create users table")?;

                sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS users_email_idx ON users (email);")
                    .execute(&pg_pool)
                    .await
                    .context("Failed to create users email index")?;

                sqlx::query(
                    r#"
                    CREATE TABLE IF NOT EXISTS movies
                    (
                        id         VARCHAR NOT NULL PRIMARY KEY,
                        imdb_id    VARCHAR NOT NULL,
                        title      VARCHAR NOT NULL,
                        overview   VARCHAR NOT NULL DEFAULT '',
                        genres     VARCHAR NOT NULL DEFAULT '[]',
                        ranking    BIGINT,
                        created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP,
                        updated_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
                    );
                    "#,
                )
                .execute(&pg_pool)
                .await
                .context("Failed to create movies table")?;

                sqlx::query(
                    "CREATE UNIQUE INDEX IF NOT EXISTS movies_imdb_id_idx ON movies (imdb_id);",
                )
                .execute(&pg_pool)
                .await
                .context("Failed to create movies imdb index")?;

                info!("postgres migrations happy :)");
            }

            ConnectionPool::Postgres(pg_pool)
        } else {
            info!("Connecting to SQLite database");
            // one connection keeps in-memory databases coherent, sqlite
            // serializes writers anyway
            let sqlite_pool = SqlitePoolOptions::new()
                .max_connections(1)
                .connect(connection_string)
                .await
                .context("Failed to connect to SQLite database")?;

            if run_migrations {
                info!("migrations enabled, running sqlite migrations...");
                sqlx::migrate!()
                    .run(&sqlite_pool)
                    .await
                    .context("Failed to run migrations")?;
                info!("sqlite migrations happy :)");
            }

            ConnectionPool::Sqlite(sqlite_pool)
        };

        Ok(Self { pool })
    }

    /// Performs a health check by executing a simple query
    /// Returns response time in milliseconds
    pub async fn health_check(&self) -> anyhow::Result<f64> {
        let start = Instant::now();

        match &self.pool {
            ConnectionPool::Postgres(pool) => {
                sqlx::query("SELECT 1")
                    .fetch_one(pool)
                    .await
                    .context("PostgreSQL health check failed")?;
            }
            ConnectionPool::Sqlite(pool) => {
                sqlx::query("SELECT 1")
                    .fetch_one(pool)
                    .await
                    .context("SQLite health check failed")?;
            }
        }

        let elapsed = start.elapsed();
        Ok(elapsed.as_secs_f64() * 1000.0)
    }
}
