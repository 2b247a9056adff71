mod connection;

pub mod movie;
pub mod user;

pub use connection::*;
