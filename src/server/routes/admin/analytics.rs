//! Dashboard time series and breakdowns over a `range=Nd` window

use super::RangeQuery;
use crate::core::models::{DailyCount, LanguageCount, RatingCount};
use crate::server::routes::mask_internal;
use crate::server::state::AppState;
use crate::utils::data::validation::DayRange;
use actix_web::{HttpResponse, Result as ActixResult, web};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SeriesResponse {
    pub series: Vec<DailyCount>,
}

#[derive(Debug, Serialize)]
pub struct DistributionResponse {
    pub distribution: Vec<RatingCount>,
}

#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub languages: Vec<LanguageCount>,
}

fn window_start(query: &RangeQuery) -> DateTime<Utc> {
    let range = DayRange::parse(query.range.as_deref());
    Utc::now() - Duration::days(i64::from(range.days()))
}

/// Daily signups
pub async fn user_growth(
    state: web::Data<AppState>,
    query: web::Query<RangeQuery>,
) -> ActixResult<HttpResponse> {
    let series = state
        .database
        .user_signups_since(window_start(&query))
        .await
        .map_err(mask_internal("Internal server error"))?;

    Ok(HttpResponse::Ok().json(SeriesResponse { series }))
}

/// Daily translations
pub async fn translation_volume(
    state: web::Data<AppState>,
    query: web::Query<RangeQuery>,
) -> ActixResult<HttpResponse> {
    let series = state
        .database
        .translations_since(window_start(&query))
        .await
        .map_err(mask_internal("Internal server error"))?;

    Ok(HttpResponse::Ok().json(SeriesResponse { series }))
}

/// Feedback count per rating
pub async fn feedback_distribution(
    state: web::Data<AppState>,
    query: web::Query<RangeQuery>,
) -> ActixResult<HttpResponse> {
    let distribution = state
        .database
        .feedback_rating_distribution(window_start(&query))
        .await
        .map_err(mask_internal("Internal server error"))?;

    Ok(HttpResponse::Ok().json(DistributionResponse { distribution }))
}

/// Translation count per target language
pub async fn translation_languages(
    state: web::Data<AppState>,
    query: web::Query<RangeQuery>,
) -> ActixResult<HttpResponse> {
    let languages = state
        .database
        .translations_by_target_language(window_start(&query))
        .await
        .map_err(mask_internal("Internal server error"))?;

    Ok(HttpResponse::Ok().json(LanguagesResponse { languages }))
}
