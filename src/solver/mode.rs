//! Scoring modes

use crate::core::LettersSet;
use std::fmt;

/// What makes a word better than another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum GameMode {
    /// Longer words win
    #[default]
    #[value(alias = "l")]
    Length,
    /// Higher point totals win
    #[value(alias = "p", alias = "points")]
    Score,
}

impl GameMode {
    /// Value of `word` under this mode
    #[must_use]
    pub fn metric(self, word: &str, letters: &LettersSet) -> u32 {
        match self {
            Self::Length => word.chars().count() as u32,
            Self::Score => letters.get_score(word),
        }
    }

    /// Label used in printed results
    #[must_use]
    pub const fn metric_name(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Score => "score",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length => write!(f, "Length"),
            Self::Score => write!(f, "Score"),
        }
    }
}
