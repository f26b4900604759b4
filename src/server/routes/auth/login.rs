//! User login endpoint

use crate::core::models::UserSummary;
use crate::server::routes::mask_internal;
use crate::server::state::AppState;
use crate::utils::auth::crypto::password::verify_password_blocking;
use crate::utils::data::validation::DataValidator;
use crate::utils::error::GatewayError;
use actix_web::{HttpResponse, Result as ActixResult, web};
use tracing::{info, warn};

use super::models::{AuthResponse, LoginRequest};

/// User login endpoint
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    let email = request.email.trim().to_string();

    DataValidator::validate_email(&email)?;
    DataValidator::validate_required("Password", &request.password)?;

    let user = match state
        .database
        .find_user_by_email(&email)
        .await
        .map_err(mask_internal("Login failed"))?
    {
        Some(user) => user,
        None => {
            warn!("Login attempt with unknown email: {}", email);
            return Err(GatewayError::auth("Invalid credentials").into());
        }
    };

    let password_valid = verify_password_blocking(request.password, user.password_hash.clone())
        .await
        .map_err(mask_internal("Login failed"))?;

    if !password_valid {
        warn!(user_id = %user.id, "Login attempt with invalid password");
        return Err(GatewayError::auth("Invalid credentials").into());
    }

    let token = state
        .jwt
        .create_token(user.id, user.role)
        .map_err(mask_internal("Failed to generate token"))?;

    info!(user_id = %user.id, "User logged in");

    Ok(HttpResponse::Ok().json(AuthResponse {
        user: UserSummary::from(&user),
        token,
    }))
}
