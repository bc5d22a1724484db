//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_dictionary_summary, print_drawn, print_letter_statistics,
    print_round_result, print_word_score, print_words,
};
