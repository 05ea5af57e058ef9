//! REPL runner: converts teloxide messages to core messages and runs the handler chain.

use crate::adapters::TelegramMessageWrapper;
use anyhow::Result;
use handler_chain::HandlerChain;
use refbot_core::ToCoreMessage;
use teloxide::prelude::*;
use tracing::{error, info, instrument, warn};

/// Starts long polling. The chain is awaited inside the update handler, so teloxide's per-chat
/// dispatching processes one message per conversation at a time while other chats run concurrently.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => info!(
            username = me.user.username.as_deref().unwrap_or(""),
            "Bot identity confirmed"
        ),
        Err(e) => warn!(error = %e, "get_me failed; starting polling anyway"),
    }

    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = handler_chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_type = %core_msg.message_type,
                message_content = %core_msg.content,
                "Received message"
            );

            if let Err(e) = chain.handle(&core_msg).await {
                error!(error = %e, user_id = core_msg.user.id, chat_id = core_msg.chat.id, "Handler chain failed");
            }
            Ok(())
        }
    })
    .await;

    Ok(())
}
