//! Authentication and authorization
//!
//! Bearer-token verification and the typed caller context handlers receive.

pub mod jwt;
pub mod types;


pub use jwt::{Claims, JwtHandler};
pub use types::{AuthContext, AuthMethod};

use crate::utils::error::{GatewayError, Result};
use tracing::debug;

/// Classify the value of an `Authorization` header
pub fn extract_auth_method(header: Option<&str>) -> AuthMethod {
    match header {
        None => AuthMethod::None,
        Some(value) => match JwtHandler::extract_token_from_header(value) {
            Some(token) => AuthMethod::Bearer(token.to_string()),
            None => AuthMethod::Malformed,
        },
    }
}

/// Verify an `Authorization` header and produce the caller context
pub fn authenticate(jwt: &JwtHandler, header: Option<&str>) -> Result<AuthContext> {
    match extract_auth_method(header) {
        AuthMethod::None => Err(GatewayError::auth("Missing authorization header")),
        AuthMethod::Malformed => {
            debug!("Authorization header is not a bearer token");
            Err(GatewayError::auth("Invalid token"))
        }
        AuthMethod::Bearer(token) => jwt
            .verify_token(&token)
            .map(|claims| AuthContext::from_claims(&claims))
            .map_err(|_| GatewayError::auth("Invalid token")),
    }
}
