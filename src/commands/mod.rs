//! Command implementations

pub mod benchmark;
pub mod draw;
pub mod play;
pub mod score;
pub mod simple;
pub mod stats;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use draw::draw_all;
pub use play::{
    PlayConfig, RoundResult, Verdict, judge_answer, parse_letters_arg, play_round, solve_letters,
};
pub use score::{WordScore, score_word};
pub use simple::run_simple;
pub use stats::{DictionarySummary, LetterStats, letter_statistics};
