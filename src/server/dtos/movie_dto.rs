use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::database::movie::Movie;

lazy_static! {
    // tt followed by 7 or 8 digits, the shape imdb has used for years
    static ref IMDB_ID_FORMAT: Regex = Regex::new(r"^tt\d{7,8}$").unwrap();
}

/// Request body for adding a movie to the catalogue
#[derive(Debug, Deserialize, Validate)]
pub struct AddMovieRequest {
    #[validate(regex(
        path = *IMDB_ID_FORMAT,
        message = "imdb_id must look like tt0111161"
    ))]
    pub imdb_id: String,

    #[validate(length(min = 1, message = "title cannot be empty"))]
    pub title: String,

    /// free text synopsis, empty is fine
    #[serde(default)]
    pub overview: String,

    #[serde(default)]
    pub genres: Vec<String>,

    /// editorial ranking, lower is better
    #[validate(range(min = 1, message = "ranking starts at 1"))]
    pub ranking: Option<i64>,
}

/// Response body for a single movie
#[derive(Debug, Serialize, Deserialize)]
pub struct MovieResponse {
    pub imdb_id: String,
    pub title: String,
    pub overview: String,
    pub genres: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranking: Option<i64>,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        // genres live as a json string in the db, a row that fails to parse
        // just shows up with no genres rather than failing the request
        let genres = serde_json::from_str(&movie.genres).unwrap_or_default();

        MovieResponse {
            imdb_id: movie.imdb_id,
            title: movie.title,
            overview: movie.overview,
            genres,
            ranking: movie.ranking,
        }
    }
}

/// Response body for the catalogue listing
#[derive(Debug, Serialize, Deserialize)]
pub struct MoviesResponse {
    pub movies: Vec<MovieResponse>,
}
