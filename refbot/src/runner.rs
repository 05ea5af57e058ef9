use crate::config::RefbotConfig;
use crate::handlers::{CitationHandler, CommandHandler, LoggingHandler};
use anyhow::Result;
use citation_sources::{MetadataResolver, MetadataSource};
use gost_citation::{Clock, SystemClock};
use handler_chain::HandlerChain;
use refbot_core::{init_tracing, Bot as CoreBot};
use refbot_telegram::{run_repl, TelegramBotAdapter};
use std::sync::Arc;
use tracing::{info, instrument};

/// Logging → commands → citation lookup.
pub fn build_handler_chain(
    bot: Arc<dyn CoreBot>,
    source: Arc<dyn MetadataSource>,
    clock: Arc<dyn Clock>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(CommandHandler::new(bot.clone())))
        .add_handler(Arc::new(CitationHandler::new(bot, source, clock)))
}

/// Main entry: validate config, init logging, build clients and the chain, then run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: RefbotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    let telegram = config.telegram_config()?;
    info!(
        crossref_api_url = %config.crossref_api_url,
        http_timeout_secs = config.http_timeout_secs,
        http_max_retries = config.http_max_retries,
        custom_telegram_api = telegram.telegram_api_url.is_some(),
        "Initializing bot"
    );

    let teloxide_bot = telegram.build_bot();
    let bot: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let source: Arc<dyn MetadataSource> = Arc::new(MetadataResolver::new(
        &config.crossref_api_url,
        &config.http_settings(),
    )?);
    let handler_chain = build_handler_chain(bot, source, Arc::new(SystemClock));

    info!(handlers = handler_chain.len(), "Bot started successfully");
    run_repl(teloxide_bot, handler_chain).await
}
