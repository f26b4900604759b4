//! Translation feedback endpoints

use crate::auth::AuthContext;
use crate::core::models::Feedback;
use crate::server::routes::mask_internal;
use crate::server::state::AppState;
use crate::utils::data::validation::DataValidator;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Configure feedback routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/feedback", web::post().to(submit_feedback))
        .route("/feedback/{translation_id}", web::get().to(get_feedback));
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    #[serde(default)]
    pub translation_id: String,
    #[serde(default)]
    pub rating: i32,
    pub suggested_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub feedback: Feedback,
}

#[derive(Debug, Serialize)]
pub struct FeedbackListResponse {
    pub feedback: Vec<Feedback>,
}

/// Rate a translation
pub async fn submit_feedback(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<FeedbackRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    let translation_id = DataValidator::parse_id(&request.translation_id, "Invalid translation ID")?;
    DataValidator::validate_rating(request.rating)?;

    let suggested_text = request
        .suggested_text
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty());

    let feedback = state
        .database
        .create_feedback(&Feedback::new(
            translation_id,
            auth.user_id,
            request.rating,
            suggested_text,
        ))
        .await
        .map_err(mask_internal("Failed to save feedback"))?;

    info!(
        user_id = %auth.user_id,
        translation_id = %translation_id,
        "Feedback stored with rating {}",
        feedback.rating
    );

    Ok(HttpResponse::Created().json(FeedbackResponse { feedback }))
}

/// All feedback left on one translation
pub async fn get_feedback(
    state: web::Data<AppState>,
    _auth: AuthContext,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let translation_id = DataValidator::parse_id(&path.into_inner(), "Invalid translation ID")?;

    let feedback = state
        .database
        .list_feedback_for_translation(translation_id)
        .await
        .map_err(mask_internal("Failed to fetch feedback"))?;

    Ok(HttpResponse::Ok().json(FeedbackListResponse { feedback }))
}
