pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod simulate;
pub mod sources;

pub use config::Config;
pub use error::{AppError, Result};
