//! # Lingua Gateway
//!
//! Backend-for-frontend for a Nigerian-language translation app: user
//! accounts, text translation through a chain of public providers, speech
//! synthesis, a medical-information chat assistant, translation feedback and
//! an admin dashboard.
//!
//! ## Running
//!
//! ```rust,no_run
//! use lingua_gateway::{Config, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     server::serve(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Layout
//!
//! - [`config`]: environment and YAML configuration
//! - [`auth`]: bearer tokens and the typed caller context
//! - [`core`]: domain models and the translation, speech and assistant providers
//! - [`storage`]: SeaORM persistence
//! - [`server`]: actix-web application, middleware and routes

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{GatewayError, Result};

use serde::Serialize;

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Gateway build information
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build time as Unix seconds
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
        }
    }
}

/// Build metadata captured by the build script
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
