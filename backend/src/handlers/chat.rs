//! HTTP handlers for the farming assistant

use axum::{extract::State, Json};
use serde::Deserialize;
use shared::{ChatMessage, ChatReply};
use validator::Validate;

use crate::error::AppResult;
use crate::services::ChatService;
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, max = 4000, message = "Message must be 1-4000 characters"))]
    pub message: String,
}

/// Opening message shown when the chat opens
/// GET /chat/greeting
pub async fn get_chat_greeting() -> Json<ChatMessage> {
    Json(ChatMessage::greeting())
}

/// Ask the assistant a question
/// POST /chat
pub async fn send_chat_message(
    State(state): State<AppState>,
    Json(input): Json<ChatRequest>,
) -> AppResult<Json<ChatReply>> {
    input.validate()?;
    let service = ChatService::new(state.assistant.clone(), state.companion.clone());
    let reply = service.ask(&input.message).await?;
    Ok(Json(reply))
}
