//! Translation records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A completed translation, immutable once stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub source_text: String,
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub created_at: DateTime<Utc>,
}

impl Translation {
    /// Create a new translation record owned by `user_id`
    pub fn new(
        user_id: Uuid,
        source_text: String,
        translated_text: String,
        source_lang: String,
        target_lang: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            source_text,
            translated_text,
            source_lang,
            target_lang,
            created_at: Utc::now(),
        }
    }
}
