//! HTTP server implementation
//!
//! This module provides the HTTP server, shared state, middleware and routes.

pub mod builder;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
mod utils;

pub use builder::{ServerBuilder, serve};
pub use server::HttpServer;
pub use state::AppState;
