use crate::core::models::{Conversation, Message};
use crate::utils::error::{GatewayError, Result};
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::*;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, conversation, message};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Insert a conversation and its opening messages in one transaction
    pub async fn create_conversation_with_messages(
        &self,
        record: &Conversation,
        messages: &[Message],
    ) -> Result<Conversation> {
        debug!("Creating conversation {} for user {}", record.id, record.user_id);

        let txn = self.db.begin().await.map_err(GatewayError::Database)?;

        entities::Conversation::insert(conversation::Model::from_domain(record))
            .exec(&txn)
            .await
            .map_err(GatewayError::Database)?;
        Self::insert_messages(&txn, record.id, 0, messages).await?;

        txn.commit().await.map_err(GatewayError::Database)?;

        let mut created = record.clone();
        created.messages = messages.to_vec();
        Ok(created)
    }

    /// Append messages to a conversation owned by `user_id`
    ///
    /// Positions continue from the current tail and `updated_at` is bumped
    /// inside the same transaction. The bump runs first so concurrent
    /// appends to one conversation serialize on its row.
    pub async fn append_messages(
        &self,
        conversation_id: Uuid,
        user_id: Uuid,
        messages: &[Message],
    ) -> Result<Conversation> {
        debug!(
            "Appending {} messages to conversation {}",
            messages.len(),
            conversation_id
        );

        let txn = self.db.begin().await.map_err(GatewayError::Database)?;

        let updated = entities::Conversation::update_many()
            .col_expr(conversation::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(conversation::Column::Id.eq(conversation_id))
            .filter(conversation::Column::UserId.eq(user_id))
            .exec(&txn)
            .await
            .map_err(GatewayError::Database)?;

        if updated.rows_affected == 0 {
            txn.rollback().await.map_err(GatewayError::Database)?;
            return Err(GatewayError::not_found("Conversation not found"));
        }

        let tail: Option<Option<i32>> = entities::Message::find()
            .select_only()
            .column_as(message::Column::Position.max(), "max_position")
            .filter(message::Column::ConversationId.eq(conversation_id))
            .into_tuple()
            .one(&txn)
            .await
            .map_err(GatewayError::Database)?;
        let next_position = tail.flatten().map_or(0, |p| p + 1);

        Self::insert_messages(&txn, conversation_id, next_position, messages).await?;

        let conversation = Self::load_conversation(&txn, conversation_id, user_id)
            .await?
            .ok_or_else(|| GatewayError::not_found("Conversation not found"))?;

        txn.commit().await.map_err(GatewayError::Database)?;
        Ok(conversation)
    }

    /// Find a conversation owned by `user_id`, messages in insertion order
    pub async fn find_conversation_for_user(
        &self,
        conversation_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Conversation>> {
        Self::load_conversation(&self.db, conversation_id, user_id).await
    }

    /// All conversations of a user, most recently updated first
    pub async fn list_conversations_for_user(&self, user_id: Uuid) -> Result<Vec<Conversation>> {
        let conversations = entities::Conversation::find()
            .filter(conversation::Column::UserId.eq(user_id))
            .order_by_desc(conversation::Column::UpdatedAt)
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        if conversations.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = conversations.iter().map(|c| c.id).collect();
        let rows = entities::Message::find()
            .filter(message::Column::ConversationId.is_in(ids))
            .order_by_asc(message::Column::ConversationId)
            .order_by_asc(message::Column::Position)
            .all(&self.db)
            .await
            .map_err(GatewayError::Database)?;

        let mut grouped: HashMap<Uuid, Vec<Message>> = HashMap::new();
        for row in rows {
            grouped
                .entry(row.conversation_id)
                .or_default()
                .push(row.to_domain());
        }

        Ok(conversations
            .iter()
            .map(|c| c.to_domain(grouped.remove(&c.id).unwrap_or_default()))
            .collect())
    }

    /// Count all conversations
    pub async fn count_conversations(&self) -> Result<u64> {
        entities::Conversation::find()
            .count(&self.db)
            .await
            .map_err(GatewayError::Database)
    }

    async fn insert_messages<C: ConnectionTrait>(
        conn: &C,
        conversation_id: Uuid,
        first_position: i32,
        messages: &[Message],
    ) -> Result<()> {
        if messages.is_empty() {
            return Ok(());
        }

        let models = messages.iter().zip(first_position..).map(|(msg, position)| {
            message::Model::from_domain(conversation_id, position, msg)
        });

        entities::Message::insert_many(models)
            .exec(conn)
            .await
            .map_err(GatewayError::Database)?;
        Ok(())
    }

    async fn load_conversation<C: ConnectionTrait>(
        conn: &C,
        conversation_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Conversation>> {
        let Some(model) = entities::Conversation::find_by_id(conversation_id)
            .filter(conversation::Column::UserId.eq(user_id))
            .one(conn)
            .await
            .map_err(GatewayError::Database)?
        else {
            return Ok(None);
        };

        let messages = entities::Message::find()
            .filter(message::Column::ConversationId.eq(conversation_id))
            .order_by_asc(message::Column::Position)
            .all(conn)
            .await
            .map_err(GatewayError::Database)?;

        Ok(Some(
            model.to_domain(messages.iter().map(message::Model::to_domain).collect()),
        ))
    }
}
