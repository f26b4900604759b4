use crate::core::models::{DailyCount, LanguageCount, RatingCount};
use crate::utils::error::{GatewayError, Result};
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::*;
use std::collections::BTreeMap;

use super::super::entities::{self, feedback, translation, user};
use super::types::SeaOrmDatabase;

/// Bucket timestamps into `YYYY-MM-DD` days, ascending
fn daily_buckets(timestamps: impl IntoIterator<Item = DateTime<Utc>>) -> Vec<DailyCount> {
    let mut days: BTreeMap<String, u64> = BTreeMap::new();
    for ts in timestamps {
        *days.entry(ts.format("%Y-%m-%d").to_string()).or_default() += 1;
    }
    days.into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect()
}

impl SeaOrmDatabase {
    /// Distinct users with at least one translation since `since`
    pub async fn active_user_count(&self, since: DateTime<Utc>) -> Result<u64> {
        let active: Option<i64> = entities::Translation::find()
            .select_only()
            .column_as(Expr::col(translation::Column::UserId).count_distinct(), "active")
            .filter(translation::Column::CreatedAt.gte(since))
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(active.unwrap_or(0).max(0) as u64)
    }

    /// Mean feedback rating, 0 when there is no feedback
    pub async fn average_feedback_rating(&self) -> Result<f64> {
        // SUM and COUNT stay integers on every backend; AVG is NUMERIC on Postgres
        let totals: Option<(Option<i64>, i64)> = entities::Feedback::find()
            .select_only()
            .column_as(Expr::col(feedback::Column::Rating).sum(), "rating_sum")
            .column_as(Expr::col(feedback::Column::Rating).count(), "rating_count")
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        match totals {
            Some((Some(sum), count)) if count > 0 => Ok(sum as f64 / count as f64),
            _ => Ok(0.0),
        }
    }

    /// Daily signups since `since`
    pub async fn user_signups_since(&self, since: DateTime<Utc>) -> Result<Vec<DailyCount>> {
        let created: Vec<DateTime<Utc>> = entities::User::find()
            .select_only()
            .column(user::Column::CreatedAt)
            .filter(user::Column::CreatedAt.gte(since))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(daily_buckets(created))
    }

    /// Daily translation volume since `since`
    pub async fn translations_since(&self, since: DateTime<Utc>) -> Result<Vec<DailyCount>> {
        let created: Vec<DateTime<Utc>> = entities::Translation::find()
            .select_only()
            .column(translation::Column::CreatedAt)
            .filter(translation::Column::CreatedAt.gte(since))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(daily_buckets(created))
    }

    /// Feedback count per rating since `since`, ascending by rating
    pub async fn feedback_rating_distribution(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<RatingCount>> {
        let rows: Vec<(i32, i64)> = entities::Feedback::find()
            .select_only()
            .column(feedback::Column::Rating)
            .column_as(feedback::Column::Id.count(), "count")
            .filter(feedback::Column::CreatedAt.gte(since))
            .group_by(feedback::Column::Rating)
            .order_by_asc(feedback::Column::Rating)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        Ok(rows
            .into_iter()
            .map(|(rating, count)| RatingCount {
                rating,
                count: count.max(0) as u64,
            })
            .collect())
    }

    /// Translation count per target language since `since`, busiest first
    pub async fn translations_by_target_language(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<LanguageCount>> {
        let rows: Vec<(String, i64)> = entities::Translation::find()
            .select_only()
            .column(translation::Column::TargetLang)
            .column_as(translation::Column::Id.count(), "count")
            .filter(translation::Column::CreatedAt.gte(since))
            .group_by(translation::Column::TargetLang)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        let mut languages: Vec<LanguageCount> = rows
            .into_iter()
            .map(|(language, count)| LanguageCount {
                language: if language.trim().is_empty() {
                    "Unknown".to_string()
                } else {
                    language
                },
                count: count.max(0) as u64,
            })
            .collect();
        languages.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.language.cmp(&b.language)));
        Ok(languages)
    }
}
