//! JSON lexicon loading, validation and lemma search.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use super::{LexicalDatabase, LexiconError, PartOfSpeech, Synset};

/// Errors that can occur during lexicon validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Synset at index {index} has an empty gloss")]
    EmptyGloss { index: usize },

    #[error("Synset at index {index} has no member words")]
    NoWords { index: usize },

    #[error("Synset at index {index} has an empty word at position {position}")]
    EmptyWord { index: usize, position: usize },

    #[error("Synset at index {index} lists '{word}' more than once")]
    DuplicateWord { index: usize, word: String },

    #[error("No synsets in lexicon")]
    NoSynsets,
}

/// On-disk representation of a lexicon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconFile {
    /// Where the data came from, shown by the validator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Synsets in the order searches return them.
    pub synsets: Vec<Synset>,
}

impl LexiconFile {
    /// Loads a lexicon file without validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let content = std::fs::read_to_string(path)?;
        let file: Self = serde_json::from_str(&content)?;
        Ok(file)
    }

    /// Saves the lexicon as pretty-printed JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), LexiconError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates all synsets, stopping at the first problem.
    ///
    /// # Errors
    ///
    /// Returns the first validation error encountered.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.synsets.is_empty() {
            return Err(ValidationError::NoSynsets);
        }

        self.synsets
            .iter()
            .enumerate()
            .try_for_each(|(index, synset)| validate_synset(index, synset))
    }

    /// Returns one validation result per synset.
    #[must_use]
    pub fn validate_all(&self) -> Vec<Result<(), ValidationError>> {
        if self.synsets.is_empty() {
            return vec![Err(ValidationError::NoSynsets)];
        }

        self.synsets
            .iter()
            .enumerate()
            .map(|(index, synset)| validate_synset(index, synset))
            .collect()
    }

    /// Returns the number of synsets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    /// Checks if there are no synsets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }

    /// A short excerpt of WordNet for users to start from.
    #[must_use]
    pub fn example() -> Self {
        Self {
            source: Some("Princeton WordNet 3.1 (excerpt)".to_owned()),
            synsets: vec![
                Synset::new(
                    PartOfSpeech::Noun,
                    "a score in baseball made by a runner touching all four bases safely; \
                     \"the Yankees scored 3 runs in the bottom of the 9th\"",
                    &["run", "tally"],
                ),
                Synset::new(
                    PartOfSpeech::Noun,
                    "the act of testing something; \"in the experimental trials the amount \
                     of carbon was measured separately\"",
                    &["test", "trial", "run"],
                ),
                Synset::new(
                    PartOfSpeech::Verb,
                    "move fast by using one's feet, with one foot off the ground at any \
                     given time; \"Don't run--you'll be out of breath\"",
                    &["run"],
                ),
                Synset::new(
                    PartOfSpeech::Verb,
                    "travel on foot at a moderate pace",
                    &["jog", "trot", "run"],
                ),
                Synset::new(
                    PartOfSpeech::AdjectiveSatellite,
                    "(of fish) migrating from the sea to fresh water to spawn",
                    &["run"],
                ),
                Synset::new(
                    PartOfSpeech::Adverb,
                    "with rapid movements; \"he works quickly\"",
                    &["quickly", "rapidly", "speedily", "chop-chop", "apace"],
                ),
            ],
        }
    }
}

fn validate_synset(index: usize, synset: &Synset) -> Result<(), ValidationError> {
    if synset.gloss.trim().is_empty() {
        return Err(ValidationError::EmptyGloss { index });
    }

    if synset.words.is_empty() {
        return Err(ValidationError::NoWords { index });
    }

    let mut seen = HashSet::new();
    for (position, word) in synset.words.iter().enumerate() {
        if word.lemma.trim().is_empty() {
            return Err(ValidationError::EmptyWord { index, position });
        }
        if !seen.insert(word.lemma.to_lowercase()) {
            return Err(ValidationError::DuplicateWord {
                index,
                word: word.lemma.clone(),
            });
        }
    }

    Ok(())
}

/// A validated lexicon indexed by lowercase lemma.
#[derive(Debug, Clone)]
pub struct JsonLexicon {
    source: Option<String>,
    synsets: Vec<Synset>,

    /// Lowercase lemma -> ascending synset positions.
    lemma_index: HashMap<String, Vec<usize>>,
}

impl JsonLexicon {
    /// Loads, validates and indexes a lexicon file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let file = LexiconFile::load_from_file(path)?;
        let lexicon = Self::from_file_contents(file)?;
        info!(
            "Loaded lexicon {} ({} synsets, {} lemmas)",
            path.display(),
            lexicon.len(),
            lexicon.lemma_index.len()
        );
        Ok(lexicon)
    }

    /// Validates and indexes an in-memory lexicon.
    pub fn from_file_contents(file: LexiconFile) -> Result<Self, LexiconError> {
        file.validate()?;

        let mut lemma_index: HashMap<String, Vec<usize>> = HashMap::new();
        for (position, synset) in file.synsets.iter().enumerate() {
            for lemma in synset.lemmas() {
                let positions = lemma_index.entry(lemma.to_lowercase()).or_default();
                // Validation rejects duplicates, but a synset is only listed once regardless.
                if positions.last() != Some(&position) {
                    positions.push(position);
                }
            }
        }

        Ok(Self {
            source: file.source,
            synsets: file.synsets,
            lemma_index,
        })
    }

    /// Returns the data source recorded in the file.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Returns the number of synsets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    /// Checks if there are no synsets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }
}

impl LexicalDatabase for JsonLexicon {
    fn search_lemma(&self, term: &str) -> Result<Vec<Synset>, LexiconError> {
        let found: Vec<Synset> = self
            .lemma_index
            .get(&term.to_lowercase())
            .map(|positions| positions.iter().map(|&i| self.synsets[i].clone()).collect())
            .unwrap_or_default();

        debug!("Lemma search for '{}' matched {} synsets", term, found.len());
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Word;

    fn lexicon() -> JsonLexicon {
        JsonLexicon::from_file_contents(LexiconFile::example()).unwrap()
    }

    #[test]
    fn test_example_is_valid() {
        let file = LexiconFile::example();
        assert!(file.validate().is_ok());
        assert!(file.validate_all().iter().all(Result::is_ok));
    }

    #[test]
    fn test_search_preserves_file_order() {
        let found = lexicon().search_lemma("run").unwrap();
        let kinds: Vec<PartOfSpeech> = found.iter().map(|s| s.pos).collect();
        assert_eq!(
            kinds,
            vec![
                PartOfSpeech::Noun,
                PartOfSpeech::Noun,
                PartOfSpeech::Verb,
                PartOfSpeech::Verb,
                PartOfSpeech::AdjectiveSatellite,
            ]
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let lexicon = lexicon();
        let lower = lexicon.search_lemma("jog").unwrap();
        let upper = lexicon.search_lemma("JoG").unwrap();
        assert_eq!(lower.len(), 1);
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_search_unknown_word_is_empty() {
        let found = lexicon().search_lemma("xyzzy").unwrap();
        assert!(found.is_empty());
        let blank = lexicon().search_lemma("   ").unwrap();
        assert!(blank.is_empty());
    }

    #[test]
    fn test_validation_no_synsets() {
        let file = LexiconFile {
            source: None,
            synsets: vec![],
        };
        assert_eq!(file.validate(), Err(ValidationError::NoSynsets));
        assert!(matches!(
            JsonLexicon::from_file_contents(file),
            Err(LexiconError::Invalid(ValidationError::NoSynsets))
        ));
    }

    #[test]
    fn test_validation_empty_gloss() {
        let file = LexiconFile {
            source: None,
            synsets: vec![Synset::new(PartOfSpeech::Noun, "  ", &["run"])],
        };
        assert_eq!(file.validate(), Err(ValidationError::EmptyGloss { index: 0 }));
    }

    #[test]
    fn test_validation_no_words_and_empty_word() {
        let file = LexiconFile {
            source: None,
            synsets: vec![
                Synset::new(PartOfSpeech::Noun, "a thing", &["thing"]),
                Synset::new(PartOfSpeech::Noun, "another thing", &[]),
                Synset {
                    pos: PartOfSpeech::Verb,
                    gloss: "do a thing".to_owned(),
                    words: vec![Word::new("do"), Word::new("")],
                },
            ],
        };
        let results = file.validate_all();
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert_eq!(results[1], Err(ValidationError::NoWords { index: 1 }));
        assert_eq!(
            results[2],
            Err(ValidationError::EmptyWord {
                index: 2,
                position: 1
            })
        );
    }

    #[test]
    fn test_validation_duplicate_word_ignores_case() {
        let file = LexiconFile {
            source: None,
            synsets: vec![Synset::new(PartOfSpeech::Noun, "a run", &["run", "Run"])],
        };
        assert!(matches!(
            file.validate(),
            Err(ValidationError::DuplicateWord { index: 0, .. })
        ));
    }

    #[test]
    fn test_parse_letter_codes() {
        let json = r#"{
            "synsets": [
                { "pos": "s", "gloss": "fast", "words": ["quick", "speedy"] }
            ]
        }"#;
        let file: LexiconFile = serde_json::from_str(json).unwrap();
        assert!(file.source.is_none());
        assert_eq!(file.synsets[0].pos, PartOfSpeech::AdjectiveSatellite);
        assert_eq!(file.synsets[0].words[1].lemma, "speedy");
    }
}
