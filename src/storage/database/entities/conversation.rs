use crate::core::models::{Conversation, Message};
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Conversation database model, messages live in `messages`
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "conversations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    pub title: String,

    pub created_at: DateTimeUtc,

    /// Bumped on every appended turn
    pub updated_at: DateTimeUtc,
}

/// Conversation entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Messages relation
    #[sea_orm(has_many = "super::message::Entity")]
    Messages,
}

impl Related<super::message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Messages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Assemble the domain conversation from its ordered messages
    pub fn to_domain(&self, messages: Vec<Message>) -> Conversation {
        Conversation {
            id: self.id,
            user_id: self.user_id,
            title: self.title.clone(),
            messages,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_domain(conversation: &Conversation) -> ActiveModel {
        ActiveModel {
            id: Set(conversation.id),
            user_id: Set(conversation.user_id),
            title: Set(conversation.title.clone()),
            created_at: Set(conversation.created_at),
            updated_at: Set(conversation.updated_at),
        }
    }
}
