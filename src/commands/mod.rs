//! Command handling module.
//!
//! Parses chat lines that start with the command prefix and answers
//! `dict`, `help` and `info`.

mod dict;
mod handler;
mod types;

pub use dict::{ATTRIBUTION, DefinitionLookup, WRAP_WIDTH, summary_line};
pub use handler::CommandHandler;
pub use types::{BotCommand, CommandResult};
