//! Server startup and binding
//!
//! Provides functionality to start the Axum server with configurable
//! host/port, performing the single engine-initialization attempt.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use report_engine::{ProcessEngine, ReportEngine};

use crate::config::ServerConfig;
use crate::routes;

/// Server instance that can be started
pub struct Server {
    /// Server configuration
    config: Arc<ServerConfig>,
    /// The built router
    router: Router,
}

impl Server {
    /// Create a new server instance, attempting engine initialization once.
    ///
    /// A failed initialization is logged and leaves the server running
    /// without an engine; report endpoints then refuse requests until the
    /// process is restarted. There is no retry.
    pub fn new(config: ServerConfig) -> Self {
        let engine = match ProcessEngine::bootstrap(config.integration_config()) {
            Ok(engine) => Some(Arc::new(engine) as Arc<dyn ReportEngine>),
            Err(error) => {
                tracing::info!(
                    "Report engine has not been activated. Please check the debug log for further details."
                );
                tracing::debug!(error = %error, "Engine initialization failed");
                None
            }
        };
        Self::with_engine(config, engine)
    }

    /// Create a server around an already-initialized engine (or none).
    pub fn with_engine(config: ServerConfig, engine: Option<Arc<dyn ReportEngine>>) -> Self {
        let config = Arc::new(config);
        let router = routes::build_router(config.clone(), engine);

        Self { config, router }
    }

    /// Get the socket address the server will bind to
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Get the configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Run the server
    ///
    /// Binds to the configured host/port and serves requests until the
    /// process is stopped.
    pub async fn run(self) -> Result<(), std::io::Error> {
        let addr = self.socket_addr();
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, self.router).await
    }

    /// Run the server with a specific listener
    ///
    /// This is useful for testing where you want to use a listener bound to
    /// port 0 to get a random available port.
    pub async fn run_with_listener(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, self.router).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    use crate::routes::test_support::{stub_state, test_dirs};

    async fn spawn_test_server(server: Server) -> (SocketAddr, tokio::task::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            server.run_with_listener(listener).await.ok();
        });

        // Give the server a moment to start
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;

        (addr, handle)
    }

    #[test]
    fn test_server_socket_addr() {
        let mut config = ServerConfig::default();
        config.host = "127.0.0.1".to_string();
        config.port = 3000;

        let server = Server::with_engine(config, None);
        let addr = server.socket_addr();

        assert_eq!(addr.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn test_server_config_access() {
        let mut config = ServerConfig::default();
        config.port = 9999;

        let server = Server::with_engine(config, None);

        assert_eq!(server.config().port, 9999);
    }

    #[test]
    fn test_new_degrades_gracefully_without_report_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            report_dir: dir.path().join("missing"),
            output_dir: dir.path().join("output"),
            ..Default::default()
        };

        // Construction must not fail; the engine is simply absent.
        let server = Server::new(config);
        assert_eq!(server.config().host, "0.0.0.0");
    }

    #[tokio::test]
    async fn test_server_binds_and_serves_health() {
        let (_dir, state, _engine) = stub_state();
        let server = Server::with_engine(
            ServerConfig {
                host: "127.0.0.1".to_string(),
                ..(*state.config).clone()
            },
            state.engine.clone(),
        );
        let (addr, handle) = spawn_test_server(server).await;

        let client = reqwest::Client::new();
        let response = client
            .get(format!("http://{}/health", addr))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["status"], "healthy");

        handle.abort();
    }

    #[tokio::test]
    async fn test_uninitialized_server_refuses_report_requests() {
        let (_dir, config) = test_dirs();
        let server = Server::with_engine(config, None);
        let (addr, handle) = spawn_test_server(server).await;

        let client = reqwest::Client::new();
        let response = client
            .get(format!("http://{}/report/config", addr))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = response.text().await.unwrap();
        assert!(body.contains("Report server not initialized"));

        handle.abort();
    }
}
