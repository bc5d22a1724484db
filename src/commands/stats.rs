//! Dictionary statistics
//!
//! Per-letter usage counts and an overall summary of a dictionary.

use crate::core::{Dictionary, LettersSet};
use std::collections::BTreeMap;

/// Usage figures for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterStats {
    pub letter: char,
    /// Words containing the letter
    pub usages: usize,
    /// Trie nodes carrying the letter
    pub occurrences: usize,
}

/// Statistics for every letter of `letters` that has tiles in the bag
///
/// Letters with zero repetitions are skipped. Rows come out alphabetically.
#[must_use]
pub fn letter_statistics(dictionary: &Dictionary, letters: &LettersSet) -> Vec<LetterStats> {
    letters
        .iter()
        .filter(|(_, info)| info.repetitions != 0)
        .map(|(letter, _)| LetterStats {
            letter,
            usages: dictionary.total_usages(letter),
            occurrences: dictionary.occurrences(letter),
        })
        .collect()
}

/// Overall shape of a dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionarySummary {
    pub words: usize,
    pub total_letters: usize,
    pub nodes: usize,
    pub length_distribution: BTreeMap<usize, usize>,
}

impl DictionarySummary {
    #[must_use]
    pub fn new(dictionary: &Dictionary) -> Self {
        Self {
            words: dictionary.len(),
            total_letters: dictionary.total_letters(),
            nodes: dictionary.node_count(),
            length_distribution: dictionary.length_distribution(),
        }
    }

    /// Mean word length, 0 for an empty dictionary
    #[must_use]
    pub fn average_length(&self) -> f64 {
        if self.words == 0 {
            0.0
        } else {
            self.total_letters as f64 / self.words as f64
        }
    }
}
