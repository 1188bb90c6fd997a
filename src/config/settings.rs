//! Application settings.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use tracing::warn;

use crate::render::{DEFAULT_MAX_PAGE_SIZE, MIN_PAGE_SIZE};

/// Which chat markup replies are rendered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupStyle {
    /// Anarchy Online client tags, clickable commands and paged blobs.
    Ao,

    /// Undecorated text.
    #[default]
    Plain,
}

impl FromStr for MarkupStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ao" | "aoml" => Ok(Self::Ao),
            "plain" | "text" => Ok(Self::Plain),
            _ => Err(ConfigError::InvalidMarkup(s.to_owned())),
        }
    }
}

impl fmt::Display for MarkupStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ao => f.write_str("ao"),
            Self::Plain => f.write_str("plain"),
        }
    }
}

/// Bot-specific settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotSettings {
    /// Prefix that marks a chat line as a command.
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,

    /// Name clickable commands are addressed to.
    #[serde(default = "default_bot_name")]
    pub bot_name: String,

    /// Path to the JSON lexicon.
    #[serde(default = "default_lexicon_path")]
    pub lexicon_path: PathBuf,

    /// Reply markup.
    #[serde(default)]
    pub markup: MarkupStyle,

    /// Largest blob page in bytes (AO markup only).
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
}

fn default_command_prefix() -> String {
    "!".to_owned()
}

fn default_bot_name() -> String {
    "<myname>".to_owned()
}

fn default_lexicon_path() -> PathBuf {
    PathBuf::from("lexicon.json")
}

fn default_max_page_size() -> usize {
    DEFAULT_MAX_PAGE_SIZE
}

/// Parses `DICT_MAX_PAGE_SIZE`, raising values below [`MIN_PAGE_SIZE`].
fn parse_max_page_size(value: Option<&str>) -> usize {
    let Some(size) = value.and_then(|s| s.trim().parse::<usize>().ok()) else {
        return default_max_page_size();
    };

    if size < MIN_PAGE_SIZE {
        warn!(
            "DICT_MAX_PAGE_SIZE={} is too small, using {}",
            size, MIN_PAGE_SIZE
        );
        MIN_PAGE_SIZE
    } else {
        size
    }
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            command_prefix: default_command_prefix(),
            bot_name: default_bot_name(),
            lexicon_path: default_lexicon_path(),
            markup: MarkupStyle::default(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl BotSettings {
    /// Creates bot settings from environment variables with defaults.
    ///
    /// Values that fail to parse fall back to their defaults.
    #[must_use]
    pub fn from_env_with_defaults() -> Self {
        Self {
            command_prefix: std::env::var("DICT_COMMAND_PREFIX")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(default_command_prefix),
            bot_name: std::env::var("DICT_BOT_NAME").unwrap_or_else(|_| default_bot_name()),
            lexicon_path: std::env::var("LEXICON_PATH")
                .map_or_else(|_| default_lexicon_path(), PathBuf::from),
            markup: std::env::var("DICT_MARKUP")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
            max_page_size: parse_max_page_size(
                std::env::var("DICT_MAX_PAGE_SIZE").ok().as_deref(),
            ),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown markup style '{0}' (expected 'ao' or 'plain')")]
    InvalidMarkup(String),
}
