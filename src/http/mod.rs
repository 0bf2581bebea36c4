//! HTTP surface of the conversion service.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, trace span)
//!     → convert.rs / health.rs (handlers)
//!     → error.rs (failures to JSON envelope)
//!     → response.rs (CORS, security headers)
//!     → Send to client
//! ```

pub mod convert;
pub mod error;
pub mod health;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use error::{ApiError, ApiErrorKind};
pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer, API_PREFIX};
