//! Lexical database module.
//!
//! Defines the synset data model, the [`LexicalDatabase`] seam the
//! dictionary command queries, and a JSON-backed implementation.

mod json;
mod types;

pub use json::{JsonLexicon, LexiconFile, ValidationError};
pub use types::{PartOfSpeech, Synset, Word};

use thiserror::Error;

/// Errors returned by a lexical database.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("Failed to read lexicon file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse lexicon file: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid lexicon: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Lexical database unavailable: {0}")]
    Unavailable(String),
}

/// A source of word senses.
///
/// Implementations must be safe to query from several threads at once;
/// every call is independent.
pub trait LexicalDatabase: Send + Sync {
    /// Returns every synset whose member words contain `term`, in the
    /// database's natural order. Membership is case-insensitive.
    fn search_lemma(&self, term: &str) -> Result<Vec<Synset>, LexiconError>;
}
