use async_trait::async_trait;
use refbot_core::{Bot as CoreBot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{info, instrument};

pub const WELCOME_TEXT: &str = "Привет! Я — ReffHelperBot. 🤖\n\n\
Отправь мне DOI (например, 10.1038/nphys1170)\n\
или ссылку на статью в eLibrary,\n\
и я верну библиографическое описание по ГОСТ Р 7.0.5–2008.";

pub const UNKNOWN_COMMAND_TEXT: &str =
    "Неизвестная команда. Отправь DOI или ссылку на статью, /help — подсказка.";

/// Answers slash commands: `/start` and `/help` get the welcome text, anything else a hint.
/// Plain text passes through.
pub struct CommandHandler {
    bot: Arc<dyn CoreBot>,
}

impl CommandHandler {
    pub fn new(bot: Arc<dyn CoreBot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(command) = message.command() else {
            return Ok(HandlerResponse::Continue);
        };

        let text = match command {
            "start" | "help" => WELCOME_TEXT,
            _ => UNKNOWN_COMMAND_TEXT,
        };
        info!(user_id = message.user.id, command = %command, "Command received");
        self.bot.reply_to(message, text).await?;
        Ok(HandlerResponse::Reply(text.to_string()))
    }
}
