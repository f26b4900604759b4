use crate::core::models::Feedback;
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Feedback database model
///
/// `translation_id` carries no foreign key; the reference is advisory.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "feedbacks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub translation_id: Uuid,

    pub user_id: Uuid,

    /// 1..=5
    pub rating: i32,

    #[sea_orm(column_type = "Text", nullable)]
    pub suggested_text: Option<String>,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(&self) -> Feedback {
        Feedback {
            id: self.id,
            translation_id: self.translation_id,
            user_id: self.user_id,
            rating: self.rating,
            suggested_text: self.suggested_text.clone(),
            created_at: self.created_at,
        }
    }

    pub fn from_domain(feedback: &Feedback) -> ActiveModel {
        ActiveModel {
            id: Set(feedback.id),
            translation_id: Set(feedback.translation_id),
            user_id: Set(feedback.user_id),
            rating: Set(feedback.rating),
            suggested_text: Set(feedback.suggested_text.clone()),
            created_at: Set(feedback.created_at),
        }
    }
}
