//! Aggregates served by the admin dashboard

use serde::{Deserialize, Serialize};

/// Headline counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_users: u64,
    /// Distinct translators over the last seven days
    pub active_users: u64,
    pub total_translations: u64,
    pub total_conversations: u64,
    pub total_feedbacks: u64,
    pub avg_feedback_rating: f64,
}

/// One day of a time series, `date` formatted `YYYY-MM-DD`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingCount {
    pub rating: i32,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCount {
    pub language: String,
    pub count: u64,
}
