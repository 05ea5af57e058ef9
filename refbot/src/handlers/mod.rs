//! Message handlers, in chain order: logging, `/start` and `/help` commands, citation lookup.

mod citation;
mod command;
mod logging;

pub use citation::{resolve_citation, CitationHandler};
pub use command::{CommandHandler, UNKNOWN_COMMAND_TEXT, WELCOME_TEXT};
pub use logging::LoggingHandler;
