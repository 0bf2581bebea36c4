//! Shared utilities for integration tests.

use std::net::SocketAddr;

use temperature_api::config::AppConfig;
use temperature_api::http::HttpServer;
use temperature_api::lifecycle::Shutdown;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<std::io::Result<()>>,
}

#[allow(dead_code)]
impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Trigger shutdown and wait for the server task to finish.
    pub async fn stop(self) -> std::io::Result<()> {
        self.shutdown.trigger();
        self.handle.await.expect("server task panicked")
    }
}

/// Start the service with default configuration.
#[allow(dead_code)]
pub async fn start_server() -> TestServer {
    start_server_with(AppConfig::default()).await
}

/// Start the service with the given configuration. The bind address is
/// replaced by `127.0.0.1:0`.
#[allow(dead_code)]
pub async fn start_server_with(mut config: AppConfig) -> TestServer {
    config.listener.bind_address = "127.0.0.1:0".to_string();
    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    TestServer {
        addr,
        shutdown,
        handle,
    }
}
