//! Search strategies
//!
//! Defines the Strategy trait and the two ways of enumerating candidates: a
//! naive scan over the whole dictionary, and a pruned walk that only reaches
//! words spellable with the available letters.

use super::mode::GameMode;
use super::selection::{BestSet, Solutions};
use crate::core::{Dictionary, LettersSet, normalize};

/// A way of finding the best words for a draw of letters
pub trait Strategy {
    /// Best words of `dictionary` that can be formed from `available`
    fn search(
        &self,
        dictionary: &Dictionary,
        letters: &LettersSet,
        available: &[char],
        mode: GameMode,
    ) -> Solutions;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Scan every word, check feasibility afterwards
    Naive(NaiveStrategy),
    /// Walk only feasible branches of the trie (default)
    Pruned(PrunedStrategy),
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Pruned(PrunedStrategy)
    }
}

impl Strategy for StrategyType {
    fn search(
        &self,
        dictionary: &Dictionary,
        letters: &LettersSet,
        available: &[char],
        mode: GameMode,
    ) -> Solutions {
        match self {
            Self::Naive(s) => s.search(dictionary, letters, available, mode),
            Self::Pruned(s) => s.search(dictionary, letters, available, mode),
        }
    }
}

/// Strategy names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StrategyName {
    /// Scan every dictionary word
    #[value(alias = "simple")]
    Naive,
    /// Prune the trie by available letters
    #[default]
    #[value(alias = "pruned")]
    Efficient,
}

impl From<StrategyName> for StrategyType {
    fn from(name: StrategyName) -> Self {
        match name {
            StrategyName::Naive => Self::Naive(NaiveStrategy),
            StrategyName::Efficient => Self::Pruned(PrunedStrategy),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "naive", "efficient", "pruned".
    /// Defaults to the pruned search if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "naive" | "simple" => Self::Naive(NaiveStrategy),
            _ => Self::Pruned(PrunedStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Naive(_) => "naive",
            Self::Pruned(_) => "efficient",
        }
    }
}

/// Check every dictionary word against the available letters
///
/// Words whose metric cannot reach the current best are skipped before the
/// feasibility check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaiveStrategy;

impl NaiveStrategy {
    /// Whether `word` can be spelled using each available letter at most once
    #[must_use]
    pub fn is_word_possible(word: &str, available: &[char]) -> bool {
        if word.chars().count() > available.len() {
            return false;
        }

        let mut remaining: Vec<char> = available.iter().map(|&c| normalize(c)).collect();
        word.chars().all(|c| {
            let c = normalize(c);
            match remaining.iter().position(|&r| r == c) {
                Some(index) => {
                    remaining.swap_remove(index);
                    true
                }
                None => false,
            }
        })
    }
}

impl Strategy for NaiveStrategy {
    fn search(
        &self,
        dictionary: &Dictionary,
        letters: &LettersSet,
        available: &[char],
        mode: GameMode,
    ) -> Solutions {
        let mut best = BestSet::new();
        let mut checked = 0_usize;

        for word in dictionary.words() {
            let metric = mode.metric(&word, letters);
            if !best.can_improve(metric) {
                continue;
            }
            checked += 1;
            if Self::is_word_possible(&word, available) {
                best.consider(word, metric);
            }
        }

        log::debug!(
            "naive search: {} words, {checked} feasibility checks, best {} = {}",
            dictionary.len(),
            mode.metric_name(),
            best.metric()
        );
        best.into_solutions()
    }
}

/// Drive the dictionary's constrained iterator
///
/// Every candidate is already spellable, so only the metric is compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrunedStrategy;

impl Strategy for PrunedStrategy {
    fn search(
        &self,
        dictionary: &Dictionary,
        letters: &LettersSet,
        available: &[char],
        mode: GameMode,
    ) -> Solutions {
        let mut best = BestSet::new();
        let mut candidates = dictionary.possible_words(available);

        for word in candidates.by_ref() {
            let metric = mode.metric(&word, letters);
            best.consider(word, metric);
        }

        log::debug!(
            "pruned search: visited {} of {} trie nodes, best {} = {}",
            candidates.nodes_visited(),
            dictionary.node_count(),
            mode.metric_name(),
            best.metric()
        );
        best.into_solutions()
    }
}
