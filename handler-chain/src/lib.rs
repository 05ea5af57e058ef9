//! # Handler chain
//!
//! Runs a sequence of handlers for each message: every `before` in order (any false stops the
//! chain), then `handle` until one returns Stop or Reply, then every `after` in reverse order.

use refbot_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs the three phases and returns the response that ended the handle phase
    /// (`Continue` when no handler claimed the message).
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            "step: handler_chain started"
        );

        for h in &self.handlers {
            let name = std::any::type_name_of_val(h.as_ref());
            if !h.before(message).await? {
                info!(user_id = message.user.id, handler = %name, "step: before returned false, chain stopped");
                return Ok(HandlerResponse::Stop);
            }
            debug!(handler = %name, "before done");
        }

        let mut final_response = HandlerResponse::Continue;
        for h in &self.handlers {
            let name = std::any::type_name_of_val(h.as_ref());
            let response = h.handle(message).await?;
            let reply_len = match &response {
                HandlerResponse::Reply(text) => Some(text.chars().count()),
                _ => None,
            };
            info!(
                user_id = message.user.id,
                handler = %name,
                response_type = response.kind(),
                reply_len = ?reply_len,
                "step: handler handle done"
            );
            if matches!(response, HandlerResponse::Stop | HandlerResponse::Reply(_)) {
                final_response = response;
                break;
            }
        }

        for h in self.handlers.iter().rev() {
            h.after(message, &final_response).await?;
        }

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            "step: handler_chain finished"
        );
        Ok(final_response)
    }
}
