//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → shutdown_signal() resolves
//!
//! Shutdown (shutdown.rs):
//!     trigger() → HttpServer stops accepting → in-flight requests drain → exit
//! ```
//!
//! # Design Decisions
//! - Ordered startup in main: config, logging, metrics, then listener
//! - Shutdown is broadcast so tests can stop servers without OS signals

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
