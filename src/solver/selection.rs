//! Tie-aware best-word bookkeeping

/// Best words found by a search and the metric they share
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solutions {
    pub words: Vec<String>,
    pub metric: u32,
}

impl Solutions {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

/// Running best metric and every word tied at it
///
/// A strictly better word replaces the tie-set, an equal one joins it, a worse
/// one is ignored. The metric starts at 0.
#[derive(Debug, Default)]
pub struct BestSet {
    best: Solutions,
}

impl BestSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a word with `metric` would make it into the tie-set
    #[inline]
    #[must_use]
    pub const fn can_improve(&self, metric: u32) -> bool {
        metric >= self.best.metric
    }

    /// Offer a feasible word
    pub fn consider(&mut self, word: impl Into<String>, metric: u32) {
        if metric > self.best.metric {
            self.best.words.clear();
            self.best.metric = metric;
            self.best.words.push(word.into());
        } else if metric == self.best.metric {
            self.best.words.push(word.into());
        }
    }

    #[must_use]
    pub const fn metric(&self) -> u32 {
        self.best.metric
    }

    #[must_use]
    pub fn into_solutions(self) -> Solutions {
        self.best
    }
}
