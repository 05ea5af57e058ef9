//! Wraps teloxide::Bot as a [`refbot_core::Bot`]. Tests substitute a recording Bot instead.

use async_trait::async_trait;
use refbot_core::{Bot as CoreBot, Chat, RefbotError, Result};
use teloxide::{prelude::*, types::ChatId};
use tracing::debug;

#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| RefbotError::Bot(e.to_string()))?;
        debug!(chat_id = chat.id, len = text.chars().count(), "Message sent");
        Ok(())
    }
}
