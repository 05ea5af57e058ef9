//! Core types: user, chat, message, handler response, and the Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Conversation identity. Replies always go back to the chat a message came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Message text; empty for stickers, photos and other non-text updates.
    pub content: String,
    pub message_type: String,
    pub direction: MessageDirection,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Trimmed text, or `None` for an empty or whitespace-only message.
    pub fn text(&self) -> Option<&str> {
        let text = self.content.trim();
        (!text.is_empty()).then_some(text)
    }

    /// Command name without the leading slash or `@botname` suffix: `/start@RefBot arg` → `start`.
    pub fn command(&self) -> Option<&str> {
        let first = self.text()?.split_whitespace().next()?;
        let command = first.strip_prefix('/')?;
        let command = command.split('@').next().unwrap_or(command);
        (!command.is_empty()).then_some(command)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageDirection {
    Incoming,
    Outgoing,
}

/// Handler result for the chain. `Reply(text)` carries the text sent back to the user so later
/// handlers can see it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain with the reply that was sent.
    Reply(String),
}

impl HandlerResponse {
    /// Variant name, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            HandlerResponse::Continue => "Continue",
            HandlerResponse::Stop => "Stop",
            HandlerResponse::Ignore => "Ignore",
            HandlerResponse::Reply(_) => "Reply",
        }
    }
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Optional before / handle / after. The chain runs all before, then handle until Stop/Reply,
/// then all after in reverse.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Return false to stop the chain.
    async fn before(&self, _message: &Message) -> crate::error::Result<bool> {
        Ok(true)
    }

    async fn handle(&self, _message: &Message) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }

    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}
