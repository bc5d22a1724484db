//! Game data for the letters solver
//!
//! Provides the embedded dictionary and letter table compiled into the binary,
//! plus loaders for user-supplied files.

mod embedded;
pub mod loader;

use crate::core::{Dictionary, LettersSet};
use crate::error::Result;
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, LETTERS};

/// Where to read dictionary or letter data from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DataSource {
    /// Data compiled into the binary
    #[default]
    Embedded,
    /// A file on disk
    File(PathBuf),
}

impl FromStr for DataSource {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(if s.eq_ignore_ascii_case("embedded") {
            Self::Embedded
        } else {
            Self::File(PathBuf::from(s))
        })
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl DataSource {
    /// Load a dictionary from this source
    ///
    /// # Errors
    ///
    /// Returns an error if a file source cannot be read.
    pub fn dictionary(&self) -> Result<Dictionary> {
        match self {
            Self::Embedded => Ok(embedded_dictionary()),
            Self::File(path) => loader::load_dictionary(path),
        }
    }

    /// Load a letter set from this source
    ///
    /// # Errors
    ///
    /// Returns an error if a file source cannot be read or parsed.
    pub fn letters(&self) -> Result<LettersSet> {
        match self {
            Self::Embedded => embedded_letters(),
            Self::File(path) => loader::load_letters(path),
        }
    }
}

/// Dictionary built from the embedded word list
#[must_use]
pub fn embedded_dictionary() -> Dictionary {
    let dictionary: Dictionary = DICTIONARY.iter().collect();
    log::debug!("built embedded dictionary with {} words", dictionary.len());
    dictionary
}

/// Letter set parsed from the embedded letter table
///
/// # Errors
///
/// Returns a parse error if the embedded table is malformed.
pub fn embedded_letters() -> Result<LettersSet> {
    loader::parse_letters(LETTERS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_words_are_lowercase() {
        for &word in DICTIONARY {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_dictionary_has_every_word() {
        let dictionary = embedded_dictionary();
        assert_eq!(dictionary.len(), DICTIONARY_COUNT);
        assert!(DICTIONARY.iter().all(|w| dictionary.exists(w)));
    }

    #[test]
    fn embedded_letters_cover_alphabet() {
        let letters = embedded_letters().unwrap();
        assert_eq!(letters.len(), 26);
        assert_eq!(letters.total_tiles(), 98);
        assert_eq!(letters.info('q').score, 10);
        assert_eq!(letters.info('e').repetitions, 12);
    }

    #[test]
    fn data_source_parsing() {
        assert_eq!("embedded".parse::<DataSource>(), Ok(DataSource::Embedded));
        assert_eq!("Embedded".parse::<DataSource>(), Ok(DataSource::Embedded));
        assert_eq!(
            "words.txt".parse::<DataSource>(),
            Ok(DataSource::File(PathBuf::from("words.txt")))
        );
        assert_eq!(DataSource::Embedded.to_string(), "embedded");
    }
}
