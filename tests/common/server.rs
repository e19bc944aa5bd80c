//! Test server lifecycle management
//!
//! Each test gets an isolated server with its own in-memory store.

use super::constants::*;
use singles_catalog_server::catalog_store::InMemorySinglesStore;
use singles_catalog_server::server::{make_app, RequestsLoggingLevel, ServerConfig};
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;

pub const FRONTEND_INDEX_HTML: &str = "<html><body>Singles Catalog</body></html>";
pub const FRONTEND_SCRIPT_JS: &str = "console.log('singles');";

/// Test server instance with an isolated store
///
/// When dropped, the server gracefully shuts down and temp resources are cleaned up.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    pub port: u16,

    // Private fields - keep resources alive until drop
    _frontend_dir: Option<TempDir>,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a new test server with an empty store on a random port
    pub async fn spawn() -> Self {
        Self::spawn_with(None).await
    }

    /// Spawns a server that serves a small frontend from a temp directory
    pub async fn spawn_with_frontend() -> Self {
        let frontend_dir = TempDir::new().expect("Failed to create frontend dir");
        std::fs::write(frontend_dir.path().join("index.html"), FRONTEND_INDEX_HTML)
            .expect("Failed to write index.html");
        std::fs::write(frontend_dir.path().join("script.js"), FRONTEND_SCRIPT_JS)
            .expect("Failed to write script.js");
        Self::spawn_with(Some(frontend_dir)).await
    }

    async fn spawn_with(frontend_dir: Option<TempDir>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            port,
            requests_logging_level: RequestsLoggingLevel::None,
            frontend_dir_path: frontend_dir
                .as_ref()
                .map(|dir| dir.path().to_string_lossy().to_string()),
        };

        let app = make_app(config, Box::new(InMemorySinglesStore::new()))
            .expect("Failed to build app");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            port,
            _frontend_dir: frontend_dir,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling the home endpoint
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
