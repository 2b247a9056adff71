pub mod health_controller;
pub mod movie_controller;
pub mod user_controller;

pub async fn hello() -> &'static str {
    "Hello, MagicStreamMovies!"
}
