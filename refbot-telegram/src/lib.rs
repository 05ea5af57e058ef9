//! # refbot-telegram
//!
//! Telegram layer: teloxide ↔ core adapters, a [`refbot_core::Bot`] implementation, connection
//! config and the REPL runner that feeds every update through a [`handler_chain::HandlerChain`].

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::run_repl;
