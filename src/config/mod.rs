//! Configuration module for the dictionary bot.
//!
//! Settings come from environment variables (optionally loaded from a
//! `.env` file) with defaults for everything.

mod settings;

pub use settings::{BotSettings, ConfigError, MarkupStyle};
