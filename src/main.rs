//! Temperature Conversion API
//!
//! An HTTP service converting between Celsius and Fahrenheit, built with
//! Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http::server (middleware stack)
//!                         │
//!                         ▼
//!                     http::convert ──▶ conversion::Converter
//!                         │                   │
//!                         │                   ▼
//!                         │             conversion::Validator
//!                         ▼
//!     ◀────────────── http::error (JSON envelope)
//!
//!     Cross-cutting: config, observability (logs, metrics), lifecycle
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use temperature_api::config::{load_or_default, validation::validate_config, ConfigError};
use temperature_api::lifecycle::signals::shutdown_signal;
use temperature_api::observability::{logging::init_logging, metrics::init_metrics};
use temperature_api::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "temperature-api")]
#[command(about = "HTTP API converting temperatures between Celsius and Fahrenheit", long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "TEMPERATURE_API_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listener bind address
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = load_or_default(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    init_logging(&config.observability)?;

    tracing::info!("temperature-api v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_temperature = config.conversion.max_temperature,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr = config.observability.metrics_address.parse()?;
        init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    shutdown_signal().await;
    shutdown.trigger();

    handle.await??;
    tracing::info!("Shutdown complete");
    Ok(())
}
