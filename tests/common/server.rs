//! Test server lifecycle management
//!
//! This module manages spawning and shutting down test HTTP servers.
//! Each test gets an isolated server with its own catalog file.

use super::constants::*;
use super::fixtures::create_test_public_dir;
use anime_catalog_server::anime_store::{AnimeCollection, AnimeStore, JsonFilePersistence};
use anime_catalog_server::server::{server::make_app, RequestsLoggingLevel, ServerConfig};
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Test server instance with an isolated catalog
///
/// When dropped, the server gracefully shuts down and temp resources are cleaned up.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    /// Catalog file backing this server
    pub db_path: PathBuf,

    // Private fields - keep resources alive until drop
    _temp_public_dir: TempDir,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a new test server on a random port
    ///
    /// # Panics
    ///
    /// Panics if the fixture catalog can't be created or loaded, or if the
    /// server doesn't become ready within timeout.
    pub async fn spawn() -> Self {
        let (temp_public_dir, db_path) =
            create_test_public_dir().expect("Failed to create test public dir");

        let anime_store = AnimeStore::load(Box::new(JsonFilePersistence::new(&db_path)))
            .expect("Failed to load test catalog");

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        // Create shutdown channel
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            requests_logging_level: RequestsLoggingLevel::None,
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port,
            public_dir: temp_public_dir.path().to_path_buf(),
        };

        let app = make_app(config, Arc::new(Mutex::new(anime_store))).expect("Failed to build app");

        // Spawn server in background task with graceful shutdown
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
            db_path,
            _temp_public_dir: temp_public_dir,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Reads the catalog file as currently persisted on disk
    pub fn persisted_catalog(&self) -> AnimeCollection {
        let content = std::fs::read_to_string(&self.db_path).expect("Failed to read catalog file");
        serde_json::from_str(&content).expect("Catalog file is not valid JSON")
    }

    /// Waits for the server to become ready by polling the home page
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
