//! User signup endpoint

use crate::core::models::{User, UserRole, UserSummary};
use crate::server::routes::mask_internal;
use crate::server::state::AppState;
use crate::utils::auth::crypto::password::hash_password_blocking;
use crate::utils::data::validation::DataValidator;
use crate::utils::error::GatewayError;
use actix_web::{HttpResponse, Result as ActixResult, web};
use tracing::info;

use super::models::{AuthResponse, SignupRequest};

/// User signup endpoint
pub async fn signup(
    state: web::Data<AppState>,
    request: web::Json<SignupRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    let name = request.name.trim().to_string();
    let email = request.email.trim().to_string();

    DataValidator::validate_name(&name)?;
    DataValidator::validate_email(&email)?;
    DataValidator::validate_password(&request.password)?;

    info!("User signup attempt: {}", email);

    let existing = state
        .database
        .find_user_by_email(&email)
        .await
        .map_err(mask_internal("Failed to create user"))?;
    if existing.is_some() {
        return Err(GatewayError::conflict("User already exists").into());
    }

    let password_hash = hash_password_blocking(request.password)
        .await
        .map_err(mask_internal("Failed to hash password"))?;

    let role = if state.config.auth().is_admin_email(&email) {
        UserRole::Admin
    } else {
        UserRole::User
    };

    let user = state
        .database
        .create_user(&User::new(name, email, password_hash, role))
        .await
        .map_err(mask_internal("Failed to create user"))?;

    let token = state
        .jwt
        .create_token(user.id, user.role)
        .map_err(mask_internal("Failed to generate token"))?;

    info!(user_id = %user.id, role = %user.role, "User registered");

    Ok(HttpResponse::Created().json(AuthResponse {
        user: UserSummary::from(&user),
        token,
    }))
}
