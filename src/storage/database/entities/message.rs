use crate::core::models::{Message, MessageRole};
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Message database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "messages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub conversation_id: Uuid,

    /// Insertion order within the conversation, starting at 0
    pub position: i32,

    /// `user` or `assistant`
    pub role: String,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    pub language: String,

    pub created_at: DateTimeUtc,
}

/// Message entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Conversation relation
    #[sea_orm(
        belongs_to = "super::conversation::Entity",
        from = "Column::ConversationId",
        to = "super::conversation::Column::Id",
        on_delete = "Cascade"
    )]
    Conversation,
}

impl Related<super::conversation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Conversation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(&self) -> Message {
        Message {
            id: self.id,
            role: self.role.parse().unwrap_or(MessageRole::User),
            content: self.content.clone(),
            language: self.language.clone(),
            created_at: self.created_at,
        }
    }

    pub fn from_domain(conversation_id: Uuid, position: i32, message: &Message) -> ActiveModel {
        ActiveModel {
            id: Set(message.id),
            conversation_id: Set(conversation_id),
            position: Set(position),
            role: Set(message.role.as_str().to_string()),
            content: Set(message.content.clone()),
            language: Set(message.language.clone()),
            created_at: Set(message.created_at),
        }
    }
}
