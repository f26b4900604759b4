use crate::core::models::Translation;
use crate::utils::error::{GatewayError, Result};
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, translation};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Store a completed translation
    pub async fn create_translation(&self, record: &Translation) -> Result<Translation> {
        debug!("Storing translation {} for user {}", record.id, record.user_id);

        entities::Translation::insert(translation::Model::from_domain(record))
            .exec(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(record.clone())
    }

    /// Most recent translations for a user, newest first
    pub async fn list_translations_for_user(
        &self,
        user_id: Uuid,
        limit: u64,
    ) -> Result<Vec<Translation>> {
        let models = entities::Translation::find()
            .filter(translation::Column::UserId.eq(user_id))
            .order_by_desc(translation::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(models.iter().map(translation::Model::to_domain).collect())
    }

    /// Count all translations
    pub async fn count_translations(&self) -> Result<u64> {
        entities::Translation::find()
            .count(&self.db)
            .await
            .map_err(GatewayError::Database)
    }
}
