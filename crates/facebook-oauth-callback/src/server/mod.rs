//! HTTP server wiring.

pub mod pages;
pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::client::GraphClient;
use crate::config::Config;
use crate::exchange::CallbackExchange;
use crate::store::MemoryUserStore;

pub use routes::{AppState, create_router};

/// The OAuth callback server.
pub struct CallbackServer {
    state: Arc<AppState>,
}

impl CallbackServer {
    /// Wire the production client and store to the exchange sequencer.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = Arc::new(GraphClient::new(&config)?);
        let store = Arc::new(MemoryUserStore::new());
        let exchange = CallbackExchange::new(client, store, config.subject_id.clone());

        Ok(Self { state: Arc::new(AppState { config, exchange }) })
    }

    /// Run the server until ctrl-c.
    ///
    /// # Errors
    ///
    /// Returns error on bind or serve failure.
    pub async fn run(self, port: u16) -> anyhow::Result<()> {
        let router = create_router(self.state);
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        tracing::info!("Callback URL: http://localhost:{port}/api/facebook/callback");
        tracing::info!("Health check: http://localhost:{port}/");
        tracing::info!("HTTP server listening on http://{addr}");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }
}

impl std::fmt::Debug for CallbackServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackServer").finish()
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.expect("Failed to install CTRL+C handler");
    tracing::info!("Received shutdown signal");
}
