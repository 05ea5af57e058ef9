use async_trait::async_trait;
use citation_sources::{MetadataSource, SourceError, SourceQuery};
use gost_citation::{render, Clock};
use refbot_core::{Bot as CoreBot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Classifies `text`, fetches metadata and renders the reference.
pub async fn resolve_citation(
    text: &str,
    source: &dyn MetadataSource,
    clock: &dyn Clock,
) -> std::result::Result<String, SourceError> {
    let query = SourceQuery::classify(text);
    let metadata = source.resolve(&query).await?;
    Ok(render(&metadata, clock))
}

/// Treats every non-command text as a DOI or portal link and replies with the reference.
/// Lookup failures become a `❌ ...` reply; the chain itself does not fail on them.
pub struct CitationHandler {
    bot: Arc<dyn CoreBot>,
    source: Arc<dyn MetadataSource>,
    clock: Arc<dyn Clock>,
}

impl CitationHandler {
    pub fn new(
        bot: Arc<dyn CoreBot>,
        source: Arc<dyn MetadataSource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { bot, source, clock }
    }
}

#[async_trait]
impl Handler for CitationHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(text) = message.text() else {
            return Ok(HandlerResponse::Ignore);
        };

        let reply = match resolve_citation(text, self.source.as_ref(), self.clock.as_ref()).await {
            Ok(citation) => {
                info!(user_id = message.user.id, query = %text, "Citation rendered");
                citation
            }
            Err(e) => {
                warn!(user_id = message.user.id, query = %text, error = %e, "Citation lookup failed");
                format!("❌ {}", e.user_message())
            }
        };

        self.bot.reply_to(message, &reply).await?;
        Ok(HandlerResponse::Reply(reply))
    }
}
