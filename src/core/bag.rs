//! Random-extraction bags
//!
//! A [`Bag`] is an unordered multiset that hands out elements at random and
//! never takes them back. [`LettersBag`] fills one with the tiles described by a
//! [`LettersSet`].

use super::letters::LettersSet;
use crate::error::{GameError, Result};
use rand::Rng;

/// Unordered multiset with destructive random extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bag<T> {
    items: Vec<T>,
}

impl<T> Default for Bag<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Bag<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return a uniformly chosen element
    ///
    /// # Errors
    /// Returns [`GameError::EmptyCollection`] if the bag is empty.
    pub fn extract<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<T> {
        if self.items.is_empty() {
            return Err(GameError::EmptyCollection);
        }
        let index = rng.random_range(0..self.items.len());
        Ok(self.items.swap_remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Extend<T> for Bag<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

/// Bag of letter tiles
///
/// # Examples
/// ```
/// use letters_solver::core::{LetterInfo, LettersBag, LettersSet};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut set = LettersSet::new();
/// set.insert('a', LetterInfo::new(3, 1));
/// set.insert('b', LetterInfo::new(1, 3));
///
/// let mut bag = LettersBag::new(&set);
/// let mut rng = StdRng::seed_from_u64(7);
/// let drawn = bag.extract_letters(4, &mut rng).unwrap();
///
/// assert_eq!(drawn.iter().filter(|&&c| c == 'a').count(), 3);
/// assert!(bag.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LettersBag {
    letters: Bag<char>,
}

impl LettersBag {
    /// Fill a bag with `repetitions` tiles of every letter in `letters_set`
    #[must_use]
    pub fn new(letters_set: &LettersSet) -> Self {
        let mut letters = Bag::new();
        for (letter, info) in letters_set.iter() {
            letters.extend(std::iter::repeat_n(letter, info.repetitions as usize));
        }
        Self { letters }
    }

    pub fn insert_letter(&mut self, letter: char) {
        self.letters.add(letter);
    }

    /// Draw one random tile
    ///
    /// # Errors
    /// Returns [`GameError::EmptyCollection`] if no tiles are left.
    pub fn extract_letter<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<char> {
        self.letters.extract(rng)
    }

    /// Draw `count` tiles without replacement
    ///
    /// # Errors
    /// Returns [`GameError::InvalidLetterCount`] if fewer than `count` tiles
    /// remain. The bag is left untouched in that case.
    pub fn extract_letters<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<char>> {
        if count > self.letters.len() {
            return Err(GameError::InvalidLetterCount {
                requested: count,
                available: self.letters.len(),
            });
        }
        (0..count).map(|_| self.extract_letter(rng)).collect()
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
}
