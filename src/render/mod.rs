//! Text rendering module.
//!
//! The dictionary command builds its replies through a [`TextRenderer`],
//! which owns the markup syntax of the chat client: decoration tags,
//! clickable commands and expandable text blobs.

mod ao;
mod paginate;
mod plain;

pub use ao::{AoRenderer, DEFAULT_MAX_PAGE_SIZE, MIN_PAGE_SIZE};
pub use paginate::paginate;
pub use plain::PlainRenderer;

use crate::config::{BotSettings, MarkupStyle};

/// Decoration strings a renderer uses around reply text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markup {
    pub highlight_start: &'static str,
    pub highlight_end: &'static str,
    pub header_start: &'static str,
    pub header_end: &'static str,
    pub italic_start: &'static str,
    pub italic_end: &'static str,

    /// Preferred place to split a blob into pages. Never shown to the user.
    pub page_break: &'static str,

    /// Prefix for each definition entry.
    pub bullet: &'static str,

    /// Line break plus indentation for continuation lines. Starts with `\n`.
    pub indent: &'static str,
}

impl Markup {
    #[must_use]
    pub fn highlight(&self, text: &str) -> String {
        format!("{}{text}{}", self.highlight_start, self.highlight_end)
    }

    #[must_use]
    pub fn header(&self, text: &str) -> String {
        format!("{}{text}{}", self.header_start, self.header_end)
    }

    #[must_use]
    pub fn italic(&self, text: &str) -> String {
        format!("{}{text}{}", self.italic_start, self.italic_end)
    }
}

/// Renders chat replies for a particular client.
pub trait TextRenderer: Send + Sync {
    /// Decorations used when assembling reply bodies.
    fn markup(&self) -> &'static Markup;

    /// Builds a fragment showing `label` that runs `command` when clicked.
    ///
    /// `command` is a bot command without prefix, e.g. `dict jog`.
    fn chat_command(&self, label: &str, command: &str) -> String;

    /// Wraps a long body behind a short title.
    ///
    /// Returns one message per page; there is always at least one.
    fn blob(&self, title: &str, body: &str) -> Vec<String>;
}

/// Builds the renderer selected in the settings.
#[must_use]
pub fn renderer_for(settings: &BotSettings) -> Box<dyn TextRenderer> {
    match settings.markup {
        MarkupStyle::Ao => Box::new(AoRenderer::new(
            settings.bot_name.clone(),
            settings.max_page_size,
        )),
        MarkupStyle::Plain => Box::new(PlainRenderer::new()),
    }
}
