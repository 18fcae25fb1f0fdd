//! Language catalog and selection persistence.
//!
//! Each language carries an embedded proverb corpus. The last chosen
//! language is remembered in a single plain-text file under the user
//! config directory and read back at startup.

use crate::corpus::{Corpus, CorpusError};
use log::warn;
use std::fmt;
use std::fs;
use std::path::PathBuf;

const ENGLISH_CORPUS: &str = include_str!("resources/english.txt");
const HUNGARIAN_CORPUS: &str = include_str!("resources/hungarian.txt");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Hungarian,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Hungarian];

    /// Stable identifier used on the command line and in the selection file.
    pub fn id(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hungarian => "hungarian",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hungarian => "Magyar",
        }
    }

    pub fn from_id(id: &str) -> Option<Language> {
        match id.trim().to_lowercase().as_str() {
            "english" | "en" => Some(Language::English),
            "hungarian" | "hu" | "magyar" => Some(Language::Hungarian),
            _ => None,
        }
    }

    pub fn corpus(self) -> Result<Corpus, CorpusError> {
        match self {
            Language::English => Corpus::parse(ENGLISH_CORPUS),
            Language::Hungarian => Corpus::parse(HUNGARIAN_CORPUS),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Path of the file remembering the last chosen language.
pub fn selected_language_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("proverbial-hangman").join("language"))
}

/// Language stored by a previous run, if any.
pub fn load_selected() -> Option<Language> {
    let path = selected_language_path()?;
    let contents = fs::read_to_string(path).ok()?;
    Language::from_id(&contents)
}

/// Remember the chosen language for the next run. Failure only costs the
/// saved preference, so it is logged instead of propagated.
pub fn save_selected(language: Language) {
    let Some(path) = selected_language_path() else {
        return;
    };
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("could not create {}: {e}", parent.display());
        return;
    }
    if let Err(e) = fs::write(&path, language.id()) {
        warn!("could not save language selection to {}: {e}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_id(language.id()), Some(language));
        }
    }

    #[test]
    fn test_from_id_accepts_aliases_and_stray_case() {
        assert_eq!(Language::from_id("EN"), Some(Language::English));
        assert_eq!(Language::from_id(" Magyar\n"), Some(Language::Hungarian));
        assert_eq!(Language::from_id("klingon"), None);
        assert_eq!(Language::from_id(""), None);
    }

    #[test]
    fn test_embedded_corpora_parse() {
        for language in Language::ALL {
            let corpus = language.corpus().unwrap();
            assert!(corpus.proverb_count() > 5, "{language} corpus too small");
        }
    }

    #[test]
    fn test_hungarian_alphabet_has_accents() {
        let corpus = Language::Hungarian.corpus().unwrap();
        assert!(corpus.alphabet().contains('Ő'));
        assert!(corpus.alphabet().contains('A'));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Language::English.to_string(), "English");
        assert_eq!(Language::Hungarian.to_string(), "Magyar");
    }
}
