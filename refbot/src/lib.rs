//! # refbot
//!
//! Chat bot that answers a DOI or an eLibrary article link with a bibliographic reference formatted
//! per GOST R 7.0.5-2008. Wires [`citation_sources`] (metadata lookup) and [`gost_citation`]
//! (formatting) into a Telegram [`handler_chain::HandlerChain`].

pub mod cli;
pub mod config;
pub mod format;
pub mod handlers;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use config::RefbotConfig;
pub use format::{format_json_file, format_query};
pub use handlers::{resolve_citation, CitationHandler, CommandHandler, LoggingHandler, WELCOME_TEXT};
pub use runner::{build_handler_chain, run_bot};

pub use refbot_core::{Bot, Chat, Handler, HandlerResponse, Message, MessageDirection, Result, User};
