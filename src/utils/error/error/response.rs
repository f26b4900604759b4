//! HTTP response handling for errors

use super::types::GatewayError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl GatewayError {
    /// Message placed in the `{"error": ...}` envelope
    ///
    /// Infrastructure failures never leak their cause to the client.
    pub fn public_message(&self) -> String {
        match self {
            GatewayError::Auth(msg)
            | GatewayError::Forbidden(msg)
            | GatewayError::Validation(msg)
            | GatewayError::BadRequest(msg)
            | GatewayError::NotFound(msg)
            | GatewayError::Conflict(msg)
            | GatewayError::RateLimit(msg)
            | GatewayError::Internal(msg) => msg.clone(),
            GatewayError::Translation(_)
            | GatewayError::Synthesis(_)
            | GatewayError::Assistant(_) => self.to_string(),
            _ => "Internal server error".to_string(),
        }
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Auth(_) => StatusCode::UNAUTHORIZED,
            GatewayError::Forbidden(_) => StatusCode::FORBIDDEN,
            GatewayError::Validation(_) | GatewayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::Conflict(_) => StatusCode::CONFLICT,
            GatewayError::RateLimit(_) => StatusCode::TOO_MANY_REQUESTS,
            GatewayError::Synthesis(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "Request failed: {}", self);
        }

        HttpResponse::build(status).json(ErrorResponse {
            error: self.public_message(),
        })
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
