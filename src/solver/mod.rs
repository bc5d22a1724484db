//! Letters-game solving
//!
//! Scoring modes, tie-aware best selection, and the naive and pruned search
//! strategies behind a common solver.

mod engine;
mod mode;
mod selection;
pub mod strategy;

pub use engine::{EfficientSolver, NaiveSolver, Solver};
pub use mode::GameMode;
pub use selection::{BestSet, Solutions};
pub use strategy::{NaiveStrategy, PrunedStrategy, Strategy, StrategyName, StrategyType};
