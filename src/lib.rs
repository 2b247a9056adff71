pub mod config;
pub mod database;
pub mod logger;
pub mod server;

#[cfg(test)]
pub mod mocks;

pub use config::{AppConfig, CargoEnv};
pub use database::Database;
pub use logger::Logger;
pub use server::ApplicationServer;
