//! Text-to-speech endpoint

use crate::auth::AuthContext;
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Deserialize;
use tracing::debug;

/// Configure speech routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/tts", web::post().to(synthesize));
}

#[derive(Debug, Deserialize)]
pub struct TtsRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub lang: String,
}

/// Synthesize speech and return the raw audio bytes
pub async fn synthesize(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<TtsRequest>,
) -> ActixResult<HttpResponse> {
    if request.text.trim().is_empty() {
        return Err(GatewayError::bad_request("text is required").into());
    }

    let audio = state
        .speech
        .synthesize(&request.text, &request.lang)
        .await
        .map_err(GatewayError::from)?;

    debug!(
        user_id = %auth.user_id,
        "Synthesized {} bytes of {}",
        audio.bytes.len(),
        audio.content_type
    );

    Ok(HttpResponse::Ok()
        .insert_header((CONTENT_TYPE, audio.content_type))
        .insert_header((CACHE_CONTROL, "no-store"))
        .body(audio.bytes))
}
