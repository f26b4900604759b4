//! Translation endpoints

use crate::auth::AuthContext;
use crate::core::models::Translation;
use crate::core::translation::TranslationRequest;
use crate::server::routes::mask_internal;
use crate::server::state::AppState;
use crate::utils::data::validation::DataValidator;
use crate::utils::error::GatewayError;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Number of translations returned by the history endpoint
pub const HISTORY_LIMIT: u64 = 50;

/// Configure translation routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/translate", web::post().to(translate))
        .route("/translations", web::get().to(list_translations));
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    #[serde(default)]
    pub source_text: String,
    #[serde(default)]
    pub source_lang: String,
    #[serde(default)]
    pub target_lang: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub translation: Translation,
}

#[derive(Debug, Serialize)]
pub struct TranslationsResponse {
    pub translations: Vec<Translation>,
}

/// Translate text through the provider chain and store the result
pub async fn translate(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<TranslateRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    DataValidator::validate_required("sourceText", &request.source_text)?;
    DataValidator::validate_required("sourceLang", &request.source_lang)?;
    DataValidator::validate_required("targetLang", &request.target_lang)?;

    let translated_text = state
        .translator
        .translate(&TranslationRequest::new(
            request.source_text.as_str(),
            request.source_lang.as_str(),
            request.target_lang.as_str(),
        ))
        .await
        .map_err(GatewayError::from)?;

    let record = Translation::new(
        auth.user_id,
        request.source_text,
        translated_text,
        request.source_lang,
        request.target_lang,
    );

    let translation = state
        .database
        .create_translation(&record)
        .await
        .map_err(mask_internal("Failed to save translation"))?;

    info!(
        user_id = %auth.user_id,
        "Translated {} -> {}",
        translation.source_lang,
        translation.target_lang
    );

    Ok(HttpResponse::Ok().json(TranslateResponse { translation }))
}

/// The caller's most recent translations, newest first
pub async fn list_translations(
    state: web::Data<AppState>,
    auth: AuthContext,
) -> ActixResult<HttpResponse> {
    let translations = state
        .database
        .list_translations_for_user(auth.user_id, HISTORY_LIMIT)
        .await
        .map_err(mask_internal("Failed to fetch translations"))?;

    Ok(HttpResponse::Ok().json(TranslationsResponse { translations }))
}
