//! Helper functions for middleware

use actix_web::dev::ServiceRequest;
use actix_web::http::header::{AUTHORIZATION, HeaderMap};

/// Routes reachable without a bearer token
const PUBLIC_ROUTES: &[&str] = &["/health", "/api/v1/auth/signup", "/api/v1/auth/login"];

/// Extract the raw `Authorization` header value
pub fn authorization_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok())
}

/// Check if a route is public (doesn't require authentication)
pub fn is_public_route(path: &str) -> bool {
    let path = path.trim_end_matches('/');
    PUBLIC_ROUTES.iter().any(|&route| path == route)
}

/// Peer address used to key the rate limiter
pub fn client_ip(req: &ServiceRequest) -> String {
    req.connection_info()
        .peer_addr()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
