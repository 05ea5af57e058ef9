//! Outbound side of the bot. Implementations map to a transport (Telegram in refbot-telegram).

use crate::error::Result;
use crate::types::{Chat, Message};
use async_trait::async_trait;

#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Answers `message` in the chat it came from.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
}
