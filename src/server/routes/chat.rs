//! Medical-information chat and conversation history endpoints

use crate::auth::AuthContext;
use crate::core::models::{Conversation, Message, MessageRole};
use crate::server::routes::mask_internal;
use crate::server::state::AppState;
use crate::utils::data::validation::DataValidator;
use crate::utils::error::GatewayError;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

/// Configure chat routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/chat", web::post().to(chat))
        .route("/conversations", web::get().to(list_conversations))
        .route("/conversations/{id}", web::get().to(get_conversation));
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// Absent or empty to start a new conversation
    #[serde(default)]
    pub conversation_id: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub language: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub conversation_id: Uuid,
    pub message: Message,
    pub conversation: Conversation,
}

#[derive(Debug, Serialize)]
pub struct ConversationsResponse {
    pub conversations: Vec<Conversation>,
}

#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    pub conversation: Conversation,
}

/// One chat turn
///
/// The user message and the assistant reply are stored together only after
/// the assistant answers, so a failed turn leaves no trace. A new
/// conversation is created in the same write.
pub async fn chat(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<ChatRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    DataValidator::validate_required("message", &request.message)?;
    DataValidator::validate_required("language", &request.language)?;

    let existing = match request
        .conversation_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
    {
        Some(raw) => {
            let id = Uuid::parse_str(raw)
                .map_err(|_| GatewayError::not_found("Conversation not found"))?;
            let conversation = state
                .database
                .find_conversation_for_user(id, auth.user_id)
                .await
                .map_err(mask_internal("Failed to load conversation"))?
                .ok_or_else(|| GatewayError::not_found("Conversation not found"))?;
            Some(conversation)
        }
        None => None,
    };

    let history = existing
        .as_ref()
        .map(|c| c.messages.as_slice())
        .unwrap_or_default();
    debug!(
        user_id = %auth.user_id,
        "Chat turn with {} prior messages",
        history.len()
    );

    let reply = state
        .assistant
        .respond(history, &request.message, &request.language)
        .await
        .map_err(GatewayError::from)?;

    let user_message = Message::new(
        MessageRole::User,
        request.message.as_str(),
        request.language.as_str(),
    );
    let assistant_message =
        Message::new(MessageRole::Assistant, reply, request.language.as_str());
    let turn = [user_message, assistant_message.clone()];

    let conversation = match existing {
        Some(conversation) => state
            .database
            .append_messages(conversation.id, auth.user_id, &turn)
            .await
            .map_err(mask_internal("Failed to save conversation"))?,
        None => {
            let conversation = Conversation::new(auth.user_id, &request.message);
            info!(
                user_id = %auth.user_id,
                conversation_id = %conversation.id,
                "Starting conversation"
            );
            state
                .database
                .create_conversation_with_messages(&conversation, &turn)
                .await
                .map_err(mask_internal("Failed to create conversation"))?
        }
    };

    Ok(HttpResponse::Ok().json(ChatResponse {
        conversation_id: conversation.id,
        message: assistant_message,
        conversation,
    }))
}

/// The caller's conversations, most recently updated first
pub async fn list_conversations(
    state: web::Data<AppState>,
    auth: AuthContext,
) -> ActixResult<HttpResponse> {
    let conversations = state
        .database
        .list_conversations_for_user(auth.user_id)
        .await
        .map_err(mask_internal("Failed to fetch conversations"))?;

    Ok(HttpResponse::Ok().json(ConversationsResponse { conversations }))
}

/// One conversation owned by the caller
pub async fn get_conversation(
    state: web::Data<AppState>,
    auth: AuthContext,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id = DataValidator::parse_id(&path.into_inner(), "Invalid conversation ID")?;

    let conversation = state
        .database
        .find_conversation_for_user(id, auth.user_id)
        .await
        .map_err(mask_internal("Failed to fetch conversation"))?
        .ok_or_else(|| GatewayError::not_found("Conversation not found"))?;

    Ok(HttpResponse::Ok().json(ConversationResponse { conversation }))
}
