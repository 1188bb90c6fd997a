//! The `dict` command: WordNet definitions for a word.

use tracing::debug;

use crate::lexicon::{LexicalDatabase, LexiconError, PartOfSpeech, Synset};
use crate::render::TextRenderer;

/// Column at which glosses are wrapped.
pub const WRAP_WIDTH: usize = 80;

/// Footer crediting the data source.
pub const ATTRIBUTION: &str = "Dictionary data provided by Princeton University";

/// Suffixes WordNet attaches to adjectives restricted to predicate or
/// attributive position.
const POSITION_MARKERS: [&str; 2] = ["(p)", "(a)"];

/// Looks up words and formats their definitions for chat.
pub struct DefinitionLookup {
    database: Box<dyn LexicalDatabase>,
    renderer: Box<dyn TextRenderer>,
}

impl DefinitionLookup {
    /// Creates a lookup over the given database, replying with `renderer`.
    #[must_use]
    pub fn new(database: Box<dyn LexicalDatabase>, renderer: Box<dyn TextRenderer>) -> Self {
        Self { database, renderer }
    }

    /// Looks up `term` and returns the reply messages.
    ///
    /// An unknown word yields a single "no definition found" message.
    ///
    /// # Errors
    ///
    /// Returns the database error unchanged if the search fails.
    pub fn lookup(&self, term: &str) -> Result<Vec<String>, LexiconError> {
        let synsets = self.database.search_lemma(term)?;
        debug!("Found {} synsets for '{}'", synsets.len(), term);

        if synsets.is_empty() {
            return Ok(vec![self.not_found(term)]);
        }

        let body = self.render_body(&synsets, term);
        Ok(self.renderer.blob(&summary_line(synsets.len(), term), &body))
    }

    fn not_found(&self, term: &str) -> String {
        format!(
            "No definition found for {}.",
            self.renderer.markup().highlight(term)
        )
    }

    /// Renders all synsets, starting a new section whenever the part of
    /// speech changes from one synset to the next.
    #[must_use]
    pub fn render_body(&self, synsets: &[Synset], term: &str) -> String {
        let markup = self.renderer.markup();
        let mut blob = String::new();
        let mut current: Option<PartOfSpeech> = None;

        for synset in synsets {
            if current == Some(synset.pos) {
                blob.push('\n');
            } else {
                blob.push_str("\n\n");
                blob.push_str(markup.page_break);
                blob.push_str(&markup.header(synset.pos.heading()));
                current = Some(synset.pos);
            }
            blob.push('\n');
            blob.push_str(&self.render_synset(synset, term));
        }

        blob.push_str("\n\n\n");
        blob.push_str(&markup.italic(ATTRIBUTION));
        blob
    }

    /// Renders one definition entry with its "See also" line.
    #[must_use]
    pub fn render_synset(&self, synset: &Synset, term: &str) -> String {
        let markup = self.renderer.markup();
        let mut entry = String::from(markup.bullet);
        entry.push_str(&word_wrap(
            &capitalize_first(&synset.gloss),
            WRAP_WIDTH,
            markup.indent,
        ));

        let synonyms: Vec<String> = synonyms(synset, term)
            .map(|word| self.renderer.chat_command(word, &format!("dict {word}")))
            .collect();

        if !synonyms.is_empty() {
            entry.push_str(markup.indent);
            entry.push_str("See also: ");
            entry.push_str(&synonyms.join(", "));
        }

        entry
    }
}

impl std::fmt::Debug for DefinitionLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefinitionLookup").finish_non_exhaustive()
    }
}

/// Builds the blob title, e.g. `Found 2 definitions for run`.
#[must_use]
pub fn summary_line(count: usize, term: &str) -> String {
    let plural = if count > 1 { "s" } else { "" };
    format!("Found {count} definition{plural} for {term}")
}

/// Member lemmas of `synset` other than the search term itself.
fn synonyms<'a>(synset: &'a Synset, term: &str) -> impl Iterator<Item = &'a str> {
    let term = term.to_lowercase();
    synset.lemmas().filter(move |lemma| !is_search_term(lemma, &term))
}

fn is_search_term(lemma: &str, term_lower: &str) -> bool {
    let lemma = lemma.to_lowercase();
    lemma == term_lower
        || POSITION_MARKERS.iter().any(|marker| {
            lemma
                .strip_suffix(marker)
                .is_some_and(|stem| stem == term_lower)
        })
}

/// Uppercases the first character of `text`.
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Wraps `text` at `width` characters, inserting `line_break` between
/// lines. Words longer than `width` are kept whole. Newlines already in the
/// text start a new line.
fn word_wrap(text: &str, width: usize, line_break: &str) -> String {
    let mut wrapped = String::with_capacity(text.len());

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            wrapped.push('\n');
        }

        let mut column = 0;
        for (j, word) in line.split(' ').enumerate() {
            let len = word.chars().count();
            if j == 0 {
                column = len;
            } else if column > 0 && column + 1 + len > width {
                wrapped.push_str(line_break);
                column = len;
            } else {
                wrapped.push(' ');
                column += 1 + len;
            }
            wrapped.push_str(word);
        }
    }

    wrapped
}
