//! Farming assistant chat models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Instruction prepended to every user question sent to the assistant
pub const ASSISTANT_PREAMBLE: &str = "You are an expert agricultural AI assistant. Please provide helpful, accurate advice about farming, crop management, pest control, irrigation, disease identification, and other agricultural topics. User question: ";

pub const GREETING: &str = "Hello! I'm your AI farming assistant. I can help you with crop management, disease identification, irrigation planning, and answer any agricultural questions you might have. How can I assist you today?";

/// Shown in place of an answer when no assistant backend responded
pub const APOLOGY: &str = "Sorry, I encountered an error. Please try again later.";

/// Used when the assistant answered without any text
pub const EMPTY_ANSWER: &str = "Sorry, I couldn't generate a response.";

/// Build the prompt sent upstream for a user question
pub fn assistant_prompt(question: &str) -> String {
    format!("{}{}", ASSISTANT_PREAMBLE, question)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Bot,
}

/// One message in a chat transcript
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Bot, content)
    }

    pub fn greeting() -> Self {
        Self::bot(GREETING)
    }
}

/// Which backend produced a chat answer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatSource {
    Primary,
    Fallback,
    Unavailable,
}

/// Assistant answer to one user message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatReply {
    pub message: ChatMessage,
    pub source: ChatSource,
}

impl ChatReply {
    pub fn answered(content: impl Into<String>, source: ChatSource) -> Self {
        Self {
            message: ChatMessage::bot(content),
            source,
        }
    }

    pub fn unavailable() -> Self {
        Self::answered(APOLOGY, ChatSource::Unavailable)
    }
}
