//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod admin;
pub mod auth;
pub mod chat;
pub mod feedback;
pub mod health;
pub mod translate;
pub mod tts;

use crate::server::middleware::AdminGate;
use crate::utils::error::GatewayError;
use actix_web::{ResponseError, web};
use tracing::error;

/// Mount every `/api/v1` route
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(auth::configure_routes)
            .configure(translate::configure_routes)
            .configure(tts::configure_routes)
            .configure(feedback::configure_routes)
            .configure(chat::configure_routes)
            .service(
                web::scope("/admin")
                    .wrap(AdminGate)
                    .configure(admin::configure_routes),
            ),
    );
}

/// Replace a server-side failure with a client-safe message
///
/// Client errors (4xx) pass through unchanged; everything else is logged
/// with its cause and reported as `message`.
pub(crate) fn mask_internal(message: &'static str) -> impl FnOnce(GatewayError) -> GatewayError {
    move |err| {
        if err.status_code().is_client_error() {
            return err;
        }
        error!("{}: {}", message, err);
        GatewayError::internal(message)
    }
}
