//! Celsius/Fahrenheit conversion service library

pub mod config;
pub mod conversion;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::schema::AppConfig;
pub use conversion::{Converter, Validator};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
