//! Request and response models for authentication endpoints

use crate::core::models::{User, UserSummary};
use serde::{Deserialize, Serialize};

/// User signup request
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// User login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Signup and login response
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: UserSummary,
    pub token: String,
}

/// Current user response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}
