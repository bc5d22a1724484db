//! Benchmark command
//!
//! Times both search strategies on the same random draws and checks that they
//! agree.

use crate::core::{Dictionary, LettersBag, LettersSet};
use crate::error::{GameError, Result};
use crate::solver::{EfficientSolver, GameMode, NaiveSolver, Solutions, Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    pub rounds: usize,
    pub count: usize,
    pub mode: GameMode,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(mode: GameMode) -> Self {
        Self {
            rounds: 100,
            count: 9,
            mode,
            show_progress: true,
        }
    }
}

/// Accumulated timing for one strategy
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StrategyTiming {
    pub total: Duration,
    pub slowest: Duration,
}

impl StrategyTiming {
    fn record(&mut self, elapsed: Duration) {
        self.total += elapsed;
        self.slowest = self.slowest.max(elapsed);
    }

    /// Mean time per round in microseconds
    #[must_use]
    pub fn average_micros(&self, rounds: usize) -> f64 {
        if rounds == 0 {
            0.0
        } else {
            self.total.as_secs_f64() * 1e6 / rounds as f64
        }
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub rounds: usize,
    pub letters_per_round: usize,
    pub mode: GameMode,
    pub naive: StrategyTiming,
    pub efficient: StrategyTiming,
    pub agreements: usize,
    /// Draws on which the two strategies returned different answers
    pub disagreements: Vec<Vec<char>>,
    pub nodes_visited: usize,
    pub dictionary_nodes: usize,
}

impl BenchmarkResult {
    /// Mean share of trie nodes the pruned walk touched per round
    #[must_use]
    pub fn visited_fraction(&self) -> f64 {
        if self.rounds == 0 || self.dictionary_nodes == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.rounds * self.dictionary_nodes) as f64
        }
    }

    /// How many times faster the pruned search was overall
    #[must_use]
    pub fn speedup(&self) -> f64 {
        let efficient = self.efficient.total.as_secs_f64();
        if efficient <= 0.0 {
            0.0
        } else {
            self.naive.total.as_secs_f64() / efficient
        }
    }
}

fn timed<S: Strategy>(
    solver: &Solver<S>,
    letters: &[char],
    mode: GameMode,
    timing: &mut StrategyTiming,
) -> Solutions {
    let start = Instant::now();
    let solutions = solver.get_solutions(letters, mode);
    timing.record(start.elapsed());
    solutions
}

fn progress_bar(config: &BenchmarkConfig) -> ProgressBar {
    if !config.show_progress {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(config.rounds as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb
}

/// Run both strategies over `config.rounds` random draws
///
/// Each round draws from a full bag, so rounds are independent.
///
/// # Errors
///
/// Returns [`GameError::InvalidLetterCount`] if the letter set holds fewer
/// tiles than `config.count`.
pub fn run_benchmark<R: Rng + ?Sized>(
    config: &BenchmarkConfig,
    dictionary: &Dictionary,
    letters: &LettersSet,
    rng: &mut R,
) -> Result<BenchmarkResult> {
    let full_bag = LettersBag::new(letters);
    if config.count > full_bag.len() {
        return Err(GameError::InvalidLetterCount {
            requested: config.count,
            available: full_bag.len(),
        });
    }

    let naive_solver = NaiveSolver::naive(dictionary, letters);
    let efficient_solver = EfficientSolver::efficient(dictionary, letters);

    let mut result = BenchmarkResult {
        rounds: config.rounds,
        letters_per_round: config.count,
        mode: config.mode,
        naive: StrategyTiming::default(),
        efficient: StrategyTiming::default(),
        agreements: 0,
        disagreements: Vec::new(),
        nodes_visited: 0,
        dictionary_nodes: dictionary.node_count(),
    };

    let pb = progress_bar(config);
    for _ in 0..config.rounds {
        let draw = full_bag.clone().extract_letters(config.count, rng)?;

        let naive = timed(&naive_solver, &draw, config.mode, &mut result.naive);
        let efficient = timed(&efficient_solver, &draw, config.mode, &mut result.efficient);

        let mut walk = dictionary.possible_words(&draw);
        walk.by_ref().for_each(drop);
        result.nodes_visited += walk.nodes_visited();

        if naive == efficient {
            result.agreements += 1;
        } else {
            log::warn!("strategies disagree on {draw:?}: {naive:?} vs {efficient:?}");
            result.disagreements.push(draw);
        }

        pb.set_message(format!("best {}", efficient.metric));
        pb.inc(1);
    }
    pb.finish_and_clear();

    log::info!(
        "benchmark: {} rounds, {} disagreements",
        result.rounds,
        result.disagreements.len()
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{embedded_dictionary, embedded_letters};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn quiet_config(rounds: usize, count: usize) -> BenchmarkConfig {
        let mut config = BenchmarkConfig::new(GameMode::Score);
        config.rounds = rounds;
        config.count = count;
        config.show_progress = false;
        config
    }

    #[test]
    fn strategies_agree_on_embedded_data() {
        let dictionary = embedded_dictionary();
        let letters = embedded_letters().unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let result = run_benchmark(&quiet_config(20, 9), &dictionary, &letters, &mut rng).unwrap();
        assert_eq!(result.rounds, 20);
        assert_eq!(result.agreements, 20);
        assert!(result.disagreements.is_empty());
        assert!(result.nodes_visited > 0);
        assert!(result.visited_fraction() <= 1.0);
    }

    #[test]
    fn zero_rounds() {
        let dictionary = embedded_dictionary();
        let letters = embedded_letters().unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let result = run_benchmark(&quiet_config(0, 9), &dictionary, &letters, &mut rng).unwrap();
        assert_eq!(result.agreements, 0);
        assert!(result.visited_fraction().abs() < f64::EPSILON);
        assert!(result.naive.average_micros(result.rounds).abs() < f64::EPSILON);
    }

    #[test]
    fn too_many_letters_is_an_error() {
        let dictionary = embedded_dictionary();
        let letters = embedded_letters().unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let err = run_benchmark(&quiet_config(1, 99), &dictionary, &letters, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidLetterCount {
                requested: 99,
                available: 98
            }
        ));
    }
}
