//! Formatting utilities for terminal output

use crate::solver::{GameMode, Solutions};
use colored::Colorize;

/// Format letters as spaced uppercase tiles
#[must_use]
pub fn format_letters(letters: &[char]) -> String {
    letters
        .iter()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format the best words of a round with their shared metric
#[must_use]
pub fn format_solutions(solutions: &Solutions, mode: GameMode) -> String {
    if solutions.is_empty() {
        return format!("{}", "No word can be formed".red());
    }

    let words = solutions
        .words
        .iter()
        .map(|w| w.to_uppercase())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Best ({} {}): {}",
        mode.metric_name(),
        solutions.metric.to_string().bright_yellow().bold(),
        words.bright_white().bold()
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
