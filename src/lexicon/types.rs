//! Synset data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Grammatical category of a synset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    #[serde(alias = "n")]
    Noun,

    #[serde(alias = "v")]
    Verb,

    #[serde(alias = "a")]
    Adjective,

    /// Adjective that only makes sense next to a head adjective cluster.
    #[serde(alias = "s")]
    AdjectiveSatellite,

    #[serde(alias = "r")]
    Adverb,
}

impl PartOfSpeech {
    /// Returns the lowercase name used in lexicon files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::AdjectiveSatellite => "adjective_satellite",
            Self::Adverb => "adverb",
        }
    }

    /// Returns the section heading shown above definitions.
    ///
    /// Satellite adjectives are displayed as plain adjectives.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Noun => "NOUN",
            Self::Verb => "VERB",
            Self::Adjective | Self::AdjectiveSatellite => "ADJECTIVE",
            Self::Adverb => "ADVERB",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A member word of a synset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word {
    /// Surface form of the lemma.
    pub lemma: String,
}

impl Word {
    #[must_use]
    pub fn new(lemma: impl Into<String>) -> Self {
        Self {
            lemma: lemma.into(),
        }
    }
}

/// One meaning of a word together with every word sharing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synset {
    /// Grammatical category.
    pub pos: PartOfSpeech,

    /// Definition text, optionally followed by usage examples.
    pub gloss: String,

    /// Member words in lexicon order.
    pub words: Vec<Word>,
}

impl Synset {
    /// Creates a synset from plain lemma strings.
    #[must_use]
    pub fn new(pos: PartOfSpeech, gloss: impl Into<String>, lemmas: &[&str]) -> Self {
        Self {
            pos,
            gloss: gloss.into(),
            words: lemmas.iter().map(|l| Word::new(*l)).collect(),
        }
    }

    /// Iterates over the member lemmas.
    pub fn lemmas(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.lemma.as_str())
    }
}
