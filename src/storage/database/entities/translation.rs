use crate::core::models::Translation;
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Translation database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "translations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub source_text: String,

    #[sea_orm(column_type = "Text")]
    pub translated_text: String,

    pub source_lang: String,

    pub target_lang: String,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(&self) -> Translation {
        Translation {
            id: self.id,
            user_id: self.user_id,
            source_text: self.source_text.clone(),
            translated_text: self.translated_text.clone(),
            source_lang: self.source_lang.clone(),
            target_lang: self.target_lang.clone(),
            created_at: self.created_at,
        }
    }

    pub fn from_domain(translation: &Translation) -> ActiveModel {
        ActiveModel {
            id: Set(translation.id),
            user_id: Set(translation.user_id),
            source_text: Set(translation.source_text.clone()),
            translated_text: Set(translation.translated_text.clone()),
            source_lang: Set(translation.source_lang.clone()),
            target_lang: Set(translation.target_lang.clone()),
            created_at: Set(translation.created_at),
        }
    }
}
