//! Admin dashboard endpoints
//!
//! Mounted under `/admin` behind [`crate::server::middleware::AdminGate`].

mod analytics;
mod listings;
mod stats;

pub use analytics::{feedback_distribution, translation_languages, translation_volume, user_growth};
pub use listings::{list_feedbacks, list_users};
pub use stats::get_stats;

use actix_web::web;
use serde::Deserialize;

/// Configure admin routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/stats", web::get().to(get_stats))
        .route("/users", web::get().to(list_users))
        .route("/feedbacks", web::get().to(list_feedbacks))
        .route("/user-growth", web::get().to(user_growth))
        .route("/translation-volume", web::get().to(translation_volume))
        .route("/feedback-distribution", web::get().to(feedback_distribution))
        .route("/translation-languages", web::get().to(translation_languages));
}

/// `range=30d` query parameter for dashboard series
#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    pub range: Option<String>,
}
