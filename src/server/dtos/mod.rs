pub mod health_dto;
pub mod movie_dto;
pub mod user_dto;
