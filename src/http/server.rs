//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeouts, limits, request ID, CORS)
//! - Bind server to listener
//! - Graceful shutdown on the lifecycle broadcast

use axum::{
    extract::{DefaultBodyLimit, OriginalUri},
    middleware,
    response::Html,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::conversion::{Converter, Validator};
use crate::http::convert;
use crate::http::error::{ApiError, ApiErrorKind};
use crate::http::health;
use crate::http::middleware::track_metrics;
use crate::http::request::{make_request_span, propagate_request_id_layer, set_request_id_layer};
use crate::http::response::{cors_layer, with_security_headers};

/// Mount point of the conversion API.
pub const API_PREFIX: &str = "/api/temperature";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub converter: Converter,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            converter: Converter::new(Validator::new(config.conversion.max_temperature)),
        }
    }
}

/// HTTP server for the temperature API.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let state = AppState::from_config(&config);
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        let api = Router::new()
            .route(
                "/celsius-to-fahrenheit",
                post(convert::celsius_to_fahrenheit_body),
            )
            .route(
                "/celsius-to-fahrenheit/{celsius}",
                get(convert::celsius_to_fahrenheit_path),
            )
            .route(
                "/fahrenheit-to-celsius",
                post(convert::fahrenheit_to_celsius_body),
            )
            .route(
                "/fahrenheit-to-celsius/{fahrenheit}",
                get(convert::fahrenheit_to_celsius_path),
            )
            .route("/context/{celsius}", get(convert::temperature_context))
            .route("/health", get(health::health))
            .route("/info", get(health::info));

        let mut router = Router::new()
            .route("/", get(index))
            .nest(API_PREFIX, api)
            .route_layer(middleware::from_fn(track_metrics))
            .fallback(not_found)
            .with_state(state);

        if config.security.enable_headers {
            router = with_security_headers(router);
        }
        if config.cors.enabled {
            router = router.layer(cors_layer(&config.cors));
        }

        router
            .layer(DefaultBodyLimit::max(config.security.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
            .layer(set_request_id_layer())
    }

    /// The fully layered router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            max_temperature = self.config.conversion.max_temperature,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Draining in-flight requests");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Companion browser page.
async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::new(ApiErrorKind::NotFound(uri.path().to_string()), uri.path())
}
