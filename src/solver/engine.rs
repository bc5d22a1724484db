//! Main letters-game solver interface

use super::mode::GameMode;
use super::selection::Solutions;
use super::strategy::{NaiveStrategy, PrunedStrategy, Strategy};
use crate::core::{Dictionary, LettersSet};

/// Letters-game solver
///
/// Owns its own copy of the dictionary and letter rules; later changes to the
/// values it was built from do not affect it.
#[derive(Debug, Clone)]
pub struct Solver<S: Strategy> {
    strategy: S,
    dictionary: Dictionary,
    letters: LettersSet,
}

/// Solver that checks every dictionary word
pub type NaiveSolver = Solver<NaiveStrategy>;

/// Solver that prunes the trie by available letters
pub type EfficientSolver = Solver<PrunedStrategy>;

impl<S: Strategy> Solver<S> {
    /// Create a new solver with the given strategy, dictionary and letter rules
    pub fn new(strategy: S, dictionary: &Dictionary, letters: &LettersSet) -> Self {
        Self {
            strategy,
            dictionary: dictionary.clone(),
            letters: letters.clone(),
        }
    }

    /// Best words for `available` under `mode`
    ///
    /// Returns every word tied at the best metric, in dictionary order. When
    /// nothing can be formed the word list is empty and the metric is 0.
    pub fn get_solutions(&self, available: &[char], mode: GameMode) -> Solutions {
        self.strategy
            .search(&self.dictionary, &self.letters, available, mode)
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub const fn letters_set(&self) -> &LettersSet {
        &self.letters
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }
}

impl NaiveSolver {
    #[must_use]
    pub fn naive(dictionary: &Dictionary, letters: &LettersSet) -> Self {
        Self::new(NaiveStrategy, dictionary, letters)
    }
}

impl EfficientSolver {
    #[must_use]
    pub fn efficient(dictionary: &Dictionary, letters: &LettersSet) -> Self {
        Self::new(PrunedStrategy, dictionary, letters)
    }
}
