//! Health check endpoint

use crate::server::state::AppState;
use crate::{BuildInfo, build_info};
use actix_web::{HttpResponse, web};
use serde::Serialize;
use std::borrow::Cow;
use tracing::{debug, error};

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

/// Health status payload
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: Cow<'static, str>,
    pub database: bool,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub build: BuildInfo,
}

/// Liveness plus a database round-trip
///
/// Returns 503 when the database cannot be reached.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health check requested");

    let database = match state.database.health_check().await {
        Ok(()) => true,
        Err(e) => {
            error!("Database health check failed: {}", e);
            false
        }
    };

    let status = HealthStatus {
        status: Cow::Borrowed(if database { "healthy" } else { "degraded" }),
        database,
        timestamp: chrono::Utc::now(),
        build: build_info(),
    };

    if database {
        HttpResponse::Ok().json(status)
    } else {
        HttpResponse::ServiceUnavailable().json(status)
    }
}
