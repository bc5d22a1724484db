//! Game rounds
//!
//! Draws letters from a fresh bag, solves them, and judges player answers.

use crate::core::{LettersBag, normalize};
use crate::error::Result;
use crate::solver::{GameMode, NaiveStrategy, Solutions, Solver, Strategy};
use rand::Rng;

/// Configuration for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayConfig {
    pub count: usize,
    pub mode: GameMode,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(mode: GameMode) -> Self {
        Self { count: 9, mode }
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self::new(GameMode::Length)
    }
}

/// Letters of a round and the best words for them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub letters: Vec<char>,
    pub mode: GameMode,
    pub solutions: Solutions,
}

/// Draw `config.count` letters from a full bag and solve them
///
/// # Errors
///
/// Returns [`crate::error::GameError::InvalidLetterCount`] if the letter set
/// holds fewer tiles than requested.
pub fn play_round<S: Strategy, R: Rng + ?Sized>(
    config: PlayConfig,
    solver: &Solver<S>,
    rng: &mut R,
) -> Result<RoundResult> {
    let mut bag = LettersBag::new(solver.letters_set());
    let letters = bag.extract_letters(config.count, rng)?;
    log::debug!("drew {} letters, {} left in bag", letters.len(), bag.len());
    Ok(solve_letters(solver, letters, config.mode))
}

/// Solve an explicit set of letters
#[must_use]
pub fn solve_letters<S: Strategy>(
    solver: &Solver<S>,
    letters: Vec<char>,
    mode: GameMode,
) -> RoundResult {
    let solutions = solver.get_solutions(&letters, mode);
    RoundResult {
        letters,
        mode,
        solutions,
    }
}

/// Letters typed by the user, lowercased, non-letters dropped
#[must_use]
pub fn parse_letters_arg(input: &str) -> Vec<char> {
    input
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(normalize)
        .collect()
}

/// How a player's answer fares against the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Not in the dictionary
    Unknown,
    /// In the dictionary but needs letters that were not drawn
    NotFormable,
    /// Valid, with its metric and whether it ties the best
    Valid { metric: u32, best: bool },
}

/// Judge a player's word against a solved round
#[must_use]
pub fn judge_answer<S: Strategy>(solver: &Solver<S>, round: &RoundResult, word: &str) -> Verdict {
    let word = word.trim();
    if !solver.dictionary().exists(word) {
        return Verdict::Unknown;
    }
    if !NaiveStrategy::is_word_possible(word, &round.letters) {
        return Verdict::NotFormable;
    }

    let metric = round.mode.metric(word, solver.letters_set());
    Verdict::Valid {
        metric,
        best: metric >= round.solutions.metric,
    }
}
