//! # refbot-core
//!
//! Transport-agnostic pieces of the reference bot: the [`Bot`] and [`Handler`] traits, message and
//! user types, errors, and tracing initialization. Used by handler-chain, refbot-telegram and refbot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{RefbotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, MessageDirection, ToCoreMessage, ToCoreUser, User,
};
