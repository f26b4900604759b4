//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the serve function used by the binary.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{GatewayError, Result};
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::config("Configuration is required"))?;

        HttpServer::new(&config).await
    }
}

/// Build the server from `config` and serve until shutdown
pub async fn serve(config: Config) -> Result<()> {
    info!("Starting Lingua gateway v{}", env!("CARGO_PKG_VERSION"));

    let server = ServerBuilder::new().with_config(config).build().await?;

    info!("API endpoints:");
    info!("   GET  /health");
    info!("   POST /api/v1/auth/signup, /api/v1/auth/login");
    info!("   POST /api/v1/translate, /api/v1/tts, /api/v1/feedback, /api/v1/chat");
    info!("   GET  /api/v1/admin/*");

    server.start().await
}
