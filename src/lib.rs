//! Letters Solver
//!
//! A letters-game engine: a trie dictionary built on an ordered arena tree, the
//! letter rules and tile bag of a game, and solvers that find the best words
//! for a draw by length or by score.
//!
//! # Quick Start
//!
//! ```rust
//! use letters_solver::core::{Dictionary, LetterInfo, LettersSet};
//! use letters_solver::solver::{EfficientSolver, GameMode};
//!
//! let dictionary: Dictionary = ["cat", "car", "cart"].into_iter().collect();
//! let letters: LettersSet = [
//!     ('a', LetterInfo::new(2, 1)),
//!     ('c', LetterInfo::new(2, 3)),
//!     ('r', LetterInfo::new(2, 1)),
//!     ('t', LetterInfo::new(2, 1)),
//! ]
//! .into_iter()
//! .collect();
//!
//! let solver = EfficientSolver::efficient(&dictionary, &letters);
//! let best = solver.get_solutions(&['c', 'a', 'r', 't'], GameMode::Score);
//! assert_eq!(best.words, vec!["cart"]);
//! assert_eq!(best.metric, 6);
//! ```

// Generic ordered tree
pub mod tree;

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Game data
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub mod error;
pub mod log;
