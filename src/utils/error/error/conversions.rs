//! Type conversions for GatewayError

use super::types::GatewayError;
use actix_web::error::JsonPayloadError;

impl From<JsonPayloadError> for GatewayError {
    fn from(err: JsonPayloadError) -> Self {
        tracing::debug!("Rejected request body: {}", err);
        GatewayError::BadRequest("Invalid request body".to_string())
    }
}

impl From<actix_web::error::QueryPayloadError> for GatewayError {
    fn from(err: actix_web::error::QueryPayloadError) -> Self {
        tracing::debug!("Rejected query string: {}", err);
        GatewayError::BadRequest("Invalid query parameters".to_string())
    }
}

impl From<actix_web::error::PathError> for GatewayError {
    fn from(err: actix_web::error::PathError) -> Self {
        tracing::debug!("Rejected path parameters: {}", err);
        GatewayError::BadRequest("Invalid path parameters".to_string())
    }
}
