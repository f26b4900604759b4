//! Authentication and authorization types

use super::jwt::Claims;
use crate::core::models::UserRole;
use crate::utils::error::GatewayError;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use std::future::{Ready, ready};
use uuid::Uuid;

/// Authentication method found on a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMethod {
    /// Bearer token authentication
    Bearer(String),
    /// Authorization header present but not a bearer token
    Malformed,
    /// No authentication
    None,
}

/// Verified caller identity, attached to the request by the auth middleware
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Authenticated user id
    pub user_id: Uuid,
    /// Role carried by the token
    pub role: UserRole,
}

impl AuthContext {
    /// Build a context from verified claims
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            user_id: claims.sub,
            role: claims.role,
        }
    }

    /// Whether the caller holds the admin role
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

impl FromRequest for AuthContext {
    type Error = GatewayError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthContext>()
                .cloned()
                .ok_or_else(|| GatewayError::auth("Missing authorization header")),
        )
    }
}
