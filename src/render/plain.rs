//! Plain text output for terminals and logs.

use super::{Markup, TextRenderer};

const MARKUP: Markup = Markup {
    highlight_start: "",
    highlight_end: "",
    header_start: "== ",
    header_end: " ==",
    italic_start: "",
    italic_end: "",
    page_break: "",
    bullet: "  * ",
    indent: "\n    ",
};

/// Renderer without any markup; blobs are printed in full.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl PlainRenderer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TextRenderer for PlainRenderer {
    fn markup(&self) -> &'static Markup {
        &MARKUP
    }

    fn chat_command(&self, label: &str, _command: &str) -> String {
        label.to_owned()
    }

    fn blob(&self, title: &str, body: &str) -> Vec<String> {
        vec![format!("{title}\n{}", body.trim_start_matches('\n'))]
    }
}
