use crate::core::models::Feedback;
use crate::utils::error::{GatewayError, Result};
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, feedback};
use super::types::{FeedbackFilter, SeaOrmDatabase};

impl SeaOrmDatabase {
    /// Store feedback for a translation
    pub async fn create_feedback(&self, record: &Feedback) -> Result<Feedback> {
        debug!(
            "Storing feedback {} for translation {}",
            record.id, record.translation_id
        );

        entities::Feedback::insert(feedback::Model::from_domain(record))
            .exec(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(record.clone())
    }

    /// All feedback left on a translation, newest first
    pub async fn list_feedback_for_translation(&self, translation_id: Uuid) -> Result<Vec<Feedback>> {
        let models = entities::Feedback::find()
            .filter(feedback::Column::TranslationId.eq(translation_id))
            .order_by_desc(feedback::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(models.iter().map(feedback::Model::to_domain).collect())
    }

    /// Count all feedback
    pub async fn count_feedbacks(&self) -> Result<u64> {
        entities::Feedback::find()
            .count(&self.db)
            .await
            .map_err(GatewayError::Database)
    }

    /// Page through feedback within `filter`, newest first
    pub async fn list_feedbacks(
        &self,
        filter: &FeedbackFilter,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<Feedback>, u64)> {
        let mut query = entities::Feedback::find();
        if let Some(from) = filter.from {
            query = query.filter(feedback::Column::CreatedAt.gte(from));
        }
        if let Some(to) = filter.to {
            query = query.filter(feedback::Column::CreatedAt.lte(to));
        }

        let total = query
            .clone()
            .count(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        let models = query
            .order_by_desc(feedback::Column::CreatedAt)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok((models.iter().map(feedback::Model::to_domain).collect(), total))
    }
}
