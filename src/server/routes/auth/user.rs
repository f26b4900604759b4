//! Current user endpoint

use crate::auth::AuthContext;
use crate::server::routes::mask_internal;
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::{HttpResponse, Result as ActixResult, web};
use tracing::debug;

use super::models::UserResponse;

/// Get current user endpoint
pub async fn get_current_user(
    state: web::Data<AppState>,
    auth: AuthContext,
) -> ActixResult<HttpResponse> {
    debug!(user_id = %auth.user_id, "Get current user request");

    let user = state
        .database
        .find_user_by_id(auth.user_id)
        .await
        .map_err(mask_internal("Failed to load user"))?
        .ok_or_else(|| GatewayError::not_found("User not found"))?;

    Ok(HttpResponse::Ok().json(UserResponse { user }))
}
