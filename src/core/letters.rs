//! Letter rules for a game: how many tiles of each letter exist and what each
//! one is worth.

use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

/// Normalize a letter to the case used for keys and trie labels
#[inline]
#[must_use]
pub const fn normalize(letter: char) -> char {
    letter.to_ascii_lowercase()
}

/// Tile count and point value of a single letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterInfo {
    pub repetitions: u32,
    pub score: u32,
}

impl LetterInfo {
    #[must_use]
    pub const fn new(repetitions: u32, score: u32) -> Self {
        Self { repetitions, score }
    }
}

/// Mapping from letter to its [`LetterInfo`]
///
/// Keys are stored lowercase and kept in alphabetical order.
///
/// # Examples
/// ```
/// use letters_solver::core::{LetterInfo, LettersSet};
///
/// let mut set = LettersSet::new();
/// set.insert('C', LetterInfo::new(2, 3));
/// set.insert('a', LetterInfo::new(9, 1));
/// set.insert('t', LetterInfo::new(6, 1));
///
/// assert_eq!(set.get_score("cat"), 5);
/// assert_eq!(set.get_score("CAT"), 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LettersSet {
    letters: BTreeMap<char, LetterInfo>,
}

impl LettersSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a letter if it is not present yet
    ///
    /// Returns `false` and leaves the existing entry untouched when the letter
    /// is already in the set.
    pub fn insert(&mut self, letter: char, info: LetterInfo) -> bool {
        match self.letters.entry(normalize(letter)) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(info);
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }

    /// Remove a letter, returning whether it was present
    pub fn erase(&mut self, letter: char) -> bool {
        self.letters.remove(&normalize(letter)).is_some()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains_key(&normalize(letter))
    }

    #[must_use]
    pub fn get(&self, letter: char) -> Option<&LetterInfo> {
        self.letters.get(&normalize(letter))
    }

    /// Info for a letter, or a zeroed entry if the letter is unknown
    #[must_use]
    pub fn info(&self, letter: char) -> LetterInfo {
        self.get(letter).copied().unwrap_or_default()
    }

    /// Insert-or-access: unknown letters are registered with a zeroed entry
    pub fn entry(&mut self, letter: char) -> &mut LetterInfo {
        self.letters.entry(normalize(letter)).or_default()
    }

    /// Sum of the scores of the letters of `word`
    ///
    /// Letters missing from the set are worth 0.
    #[must_use]
    pub fn get_score(&self, word: &str) -> u32 {
        word.chars().map(|c| self.info(c).score).sum()
    }

    /// Number of tiles across every letter
    #[must_use]
    pub fn total_tiles(&self) -> u32 {
        self.letters.values().map(|info| info.repetitions).sum()
    }

    /// Letters in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, &LetterInfo)> {
        self.letters.iter().map(|(&c, info)| (c, info))
    }
}

impl FromIterator<(char, LetterInfo)> for LettersSet {
    fn from_iter<I: IntoIterator<Item = (char, LetterInfo)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (letter, info) in iter {
            set.insert(letter, info);
        }
        set
    }
}

impl fmt::Display for LettersSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Letter\tCount\tScore")?;
        for (letter, info) in self.iter() {
            writeln!(
                f,
                "{}\t{}\t{}",
                letter.to_ascii_uppercase(),
                info.repetitions,
                info.score
            )?;
        }
        Ok(())
    }
}

/// Consumable multiset of available letters
///
/// Used while walking the dictionary: a letter is taken when the walk enters a
/// node labelled with it and given back when the walk leaves that node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, u32>,
    total: usize,
}

impl LetterPool {
    #[must_use]
    pub fn new(letters: &[char]) -> Self {
        letters.iter().copied().collect()
    }

    /// Take one copy of `letter`, returning `false` if none is left
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&normalize(letter)) {
            Some(count) if *count > 0 => {
                *count -= 1;
                self.total -= 1;
                true
            }
            _ => false,
        }
    }

    /// Return one copy of `letter` to the pool
    pub fn give_back(&mut self, letter: char) {
        *self.counts.entry(normalize(letter)).or_insert(0) += 1;
        self.total += 1;
    }

    /// Copies of `letter` still available
    #[must_use]
    pub fn remaining(&self, letter: char) -> u32 {
        self.counts.get(&normalize(letter)).copied().unwrap_or(0)
    }

    /// Total letters left in the pool
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl FromIterator<char> for LetterPool {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut pool = Self::default();
        for letter in iter {
            pool.give_back(letter);
        }
        pool
    }
}
