//! Farming assistant chat service
//!
//! Questions go to the primary assistant when it is configured and to the
//! companion backend otherwise or on failure. When neither answers, the
//! caller gets an apology instead of an error.

use shared::{validate_chat_message, ChatReply, ChatSource};

use crate::error::{AppError, AppResult};
use crate::external::{AssistantClient, CompanionClient};

#[derive(Clone)]
pub struct ChatService {
    assistant: AssistantClient,
    companion: CompanionClient,
}

impl ChatService {
    pub fn new(assistant: AssistantClient, companion: CompanionClient) -> Self {
        Self {
            assistant,
            companion,
        }
    }

    /// Answer a user question. Only invalid input is an error.
    pub async fn ask(&self, message: &str) -> AppResult<ChatReply> {
        validate_chat_message(message).map_err(|msg| AppError::validation("message", msg))?;
        let message = message.trim();

        if self.assistant.is_configured() {
            match self.assistant.ask(message).await {
                Ok(text) => return Ok(ChatReply::answered(text, ChatSource::Primary)),
                Err(e) => tracing::warn!("Primary assistant failed, trying fallback: {}", e),
            }
        } else {
            tracing::debug!("Primary assistant not configured, using fallback");
        }

        match self.companion.chat(message).await {
            Ok(text) => Ok(ChatReply::answered(text, ChatSource::Fallback)),
            Err(e) => {
                tracing::error!("Fallback assistant failed: {}", e);
                Ok(ChatReply::unavailable())
            }
        }
    }
}
