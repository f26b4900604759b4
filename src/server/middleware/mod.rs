//! HTTP middleware implementations
//!
//! This module provides the middleware for request processing:
//! - Bearer-token authentication
//! - Admin authorization
//! - Per-client rate limiting

mod admin;
mod auth;
mod helpers;
mod rate_limit;

// Re-export all middleware
pub use admin::{AdminGate, AdminGateService};
pub use auth::{AuthMiddleware, AuthMiddlewareService};
pub use helpers::{authorization_header, client_ip, is_public_route};
pub use rate_limit::{RateLimitMiddleware, RateLimitMiddlewareService, RateLimiter};
