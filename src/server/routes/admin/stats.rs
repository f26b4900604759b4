//! Headline counters

use crate::core::models::AdminStats;
use crate::server::routes::mask_internal;
use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use chrono::{Duration, Utc};
use serde::Serialize;

/// Window used for the active-user count
const ACTIVE_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub stats: AdminStats,
}

/// Totals plus seven-day active users and the mean feedback rating
pub async fn get_stats(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let db = &state.database;
    let since = Utc::now() - Duration::days(ACTIVE_WINDOW_DAYS);

    let (users, translations, conversations, feedbacks, active, average) = futures::try_join!(
        db.count_users(),
        db.count_translations(),
        db.count_conversations(),
        db.count_feedbacks(),
        db.active_user_count(since),
        db.average_feedback_rating(),
    )
    .map_err(mask_internal("Internal server error"))?;

    Ok(HttpResponse::Ok().json(StatsResponse {
        stats: AdminStats {
            total_users: users,
            active_users: active,
            total_translations: translations,
            total_conversations: conversations,
            total_feedbacks: feedbacks,
            avg_feedback_rating: average,
        },
    }))
}
