//! Anarchy Online chat markup.
//!
//! Replies use the tag set understood by the client (`<highlight>`,
//! `<header2>`, `<black>`, ...). Long replies become `text://` blobs, which
//! the client opens in a separate window; blobs larger than one chat
//! message are split into numbered pages.

use super::{Markup, TextRenderer, paginate};

/// Default upper bound for a single blob message in bytes.
pub const DEFAULT_MAX_PAGE_SIZE: usize = 7500;

/// Smallest page size accepted; anything lower is raised to this.
pub const MIN_PAGE_SIZE: usize = 1000;

/// Body bytes every page may carry, however long the title.
const MIN_BODY_BUDGET: usize = 500;

/// Bytes taken by the link wrapper around each page, title excluded.
const LINK_OVERHEAD: usize = 64;

/// Room left for the ` (Page i / n)` title suffix.
const PAGE_SUFFIX_RESERVE: usize = 20;

const MARKUP: Markup = Markup {
    highlight_start: "<highlight>",
    highlight_end: "<end>",
    header_start: "<header2>",
    header_end: "<end>",
    italic_start: "<i>",
    italic_end: "</i>",
    page_break: "<pagebreak>",
    bullet: "<black>____<end><highlight>*<end><black>_<end>",
    indent: "\n<black>______<end>",
};

/// Renderer producing client markup and paged blobs.
#[derive(Debug, Clone)]
pub struct AoRenderer {
    /// Name of the bot that clickable commands are sent to.
    bot_name: String,

    /// Maximum size of one blob message in bytes, at least [`MIN_PAGE_SIZE`].
    max_page_size: usize,
}

impl AoRenderer {
    /// Creates a renderer; `max_page_size` is raised to [`MIN_PAGE_SIZE`]
    /// if smaller.
    #[must_use]
    pub fn new(bot_name: impl Into<String>, max_page_size: usize) -> Self {
        Self {
            bot_name: bot_name.into(),
            max_page_size: max_page_size.max(MIN_PAGE_SIZE),
        }
    }

    /// Returns the effective page size in bytes.
    #[must_use]
    pub const fn max_page_size(&self) -> usize {
        self.max_page_size
    }

    fn link(title: &str, page: &str) -> String {
        format!(
            "<a href=\"text://<header>{title}<end>\n\n{}\">{title}</a>",
            page.trim_start_matches('\n')
        )
    }
}

impl Default for AoRenderer {
    fn default() -> Self {
        Self::new("<myname>", DEFAULT_MAX_PAGE_SIZE)
    }
}

impl TextRenderer for AoRenderer {
    fn markup(&self) -> &'static Markup {
        &MARKUP
    }

    fn chat_command(&self, label: &str, command: &str) -> String {
        format!(
            "<a href='chatcmd:///tell {} {command}'>{label}</a>",
            self.bot_name
        )
    }

    fn blob(&self, title: &str, body: &str) -> Vec<String> {
        let title = title.replace('"', "&quot;");
        let body = body.replace('"', "&quot;");

        let overhead = LINK_OVERHEAD + 2 * (title.len() + PAGE_SUFFIX_RESERVE);
        let budget = self
            .max_page_size
            .saturating_sub(overhead)
            .max(MIN_BODY_BUDGET);
        let pages = paginate(&body, budget, &[MARKUP.page_break, "\n", " "]);

        match pages.as_slice() {
            [] => vec![Self::link(&title, "")],
            [page] => vec![Self::link(&title, page)],
            _ => {
                let total = pages.len();
                pages
                    .iter()
                    .enumerate()
                    .map(|(i, page)| {
                        Self::link(&format!("{title} (Page {} / {total})", i + 1), page)
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_command_targets_bot() {
        let renderer = AoRenderer::new("Wordy", DEFAULT_MAX_PAGE_SIZE);
        assert_eq!(
            renderer.chat_command("jog", "dict jog"),
            "<a href='chatcmd:///tell Wordy dict jog'>jog</a>"
        );
    }

    #[test]
    fn test_default_uses_name_placeholder() {
        let link = AoRenderer::default().chat_command("jog", "dict jog");
        assert!(link.contains("/tell <myname> dict jog"));
    }

    #[test]
    fn test_single_page_blob() {
        let pages = AoRenderer::default().blob("Found 1 definition for run", "\n\n<pagebreak>body");
        assert_eq!(
            pages,
            vec![
                "<a href=\"text://<header>Found 1 definition for run<end>\n\nbody\">\
                 Found 1 definition for run</a>"
                    .to_owned()
            ]
        );
    }

    #[test]
    fn test_quotes_are_escaped() {
        let pages = AoRenderer::default().blob("t", "say \"hi\"");
        assert!(pages[0].contains("say &quot;hi&quot;"));
    }

    #[test]
    fn test_empty_body_still_yields_a_page() {
        assert_eq!(AoRenderer::default().blob("t", "").len(), 1);
    }

    #[test]
    fn test_large_blob_is_paged() {
        let renderer = AoRenderer::new("<myname>", 1000);
        let section = format!("<pagebreak>{}", "word ".repeat(160));
        let body = section.repeat(4);
        let pages = renderer.blob("Found 4 definitions for word", &body);

        assert_eq!(pages.len(), 4);
        assert!(pages[0].ends_with(">Found 4 definitions for word (Page 1 / 4)</a>"));
        assert!(pages[3].contains("(Page 4 / 4)"));
        assert!(pages.iter().all(|p| p.len() <= 1000));
        assert!(pages.iter().all(|p| !p.contains("<pagebreak>")));
    }

    #[test]
    fn test_tiny_page_size_is_raised() {
        let renderer = AoRenderer::new("<myname>", 150);
        assert_eq!(renderer.max_page_size(), MIN_PAGE_SIZE);

        let pages = renderer.blob("Found 2 definitions for run", &"word ".repeat(60));
        assert_eq!(pages.len(), 1);
        assert!(pages[0].contains(&"word ".repeat(59)));
    }

    #[test]
    fn test_long_title_keeps_body_budget() {
        let title = "t".repeat(600);
        let pages = AoRenderer::new("<myname>", MIN_PAGE_SIZE).blob(&title, &"word ".repeat(90));
        assert_eq!(pages.len(), 1);
    }
}
