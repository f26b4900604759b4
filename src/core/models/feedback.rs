//! Translation feedback

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's rating of a translation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: Uuid,
    pub translation_id: Uuid,
    pub user_id: Uuid,
    /// Always within 1..=5
    pub rating: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_text: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Feedback {
    pub fn new(
        translation_id: Uuid,
        user_id: Uuid,
        rating: i32,
        suggested_text: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            translation_id,
            user_id,
            rating,
            suggested_text,
            created_at: Utc::now(),
        }
    }
}
