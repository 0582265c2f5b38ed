//! Web server for the auth service.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::WebConfig;
use crate::error::{GatehouseError, Result};

use super::handlers::AppState;
use super::router::create_router;

/// Bind-and-serve wrapper around the auth router.
pub struct WebServer {
    addr: SocketAddr,
    state: AppState,
    cors_origins: Vec<String>,
}

impl WebServer {
    /// Create a server from configuration.
    pub fn new(config: &WebConfig) -> Result<Self> {
        let addr = format!("{}:{}", config.host, config.port)
            .parse()
            .map_err(|e| GatehouseError::Config(format!("invalid web server address: {e}")))?;

        Ok(Self {
            addr,
            state: AppState::new(),
            cors_origins: config.cors_origins.clone(),
        })
    }

    /// The address the server will bind.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Run the server until it fails or the process exits.
    pub async fn run(self) -> Result<()> {
        let router = create_router(self.state, &self.cors_origins);
        let listener = TcpListener::bind(self.addr).await?;
        tracing::info!("auth API listening on http://{}", self.addr);

        axum::serve(listener, router).await?;
        Ok(())
    }
}
