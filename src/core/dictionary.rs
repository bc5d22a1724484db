//! Trie dictionary of valid words
//!
//! Words are stored in an [`OrderedTree`] whose nodes carry a letter and an
//! end-of-word flag. The children of every node are kept sorted by letter, so
//! a preorder walk lists words alphabetically. Only the nodes that are actually
//! used exist; there is no fixed fan-out per node.

use super::letters::normalize;
use super::walk::{PossibleWords, Words};
use crate::tree::{NodeId, OrderedTree};
use std::collections::BTreeMap;
use std::fmt;

/// Label of the root node; never a real letter
const ROOT_SENTINEL: char = '\0';

/// Payload of a trie node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharInfo {
    pub character: char,
    pub is_end_of_word: bool,
}

impl CharInfo {
    const fn new(character: char) -> Self {
        Self {
            character,
            is_end_of_word: false,
        }
    }
}

/// Where a letter sits among the children of a node
enum ChildSlot {
    /// A child with that letter exists
    Found(NodeId),
    /// No such child; it belongs right after this sibling
    After(NodeId),
    /// No such child; it belongs first
    First,
}

/// Set of words backed by a sparse trie
///
/// Letters are lowercased (ASCII) both when inserting and when looking up.
///
/// # Examples
/// ```
/// use letters_solver::core::Dictionary;
///
/// let mut dictionary = Dictionary::new();
/// assert!(dictionary.insert("cart"));
/// assert!(dictionary.insert("Car"));
/// assert!(!dictionary.insert("car"));
///
/// assert!(dictionary.exists("CAR"));
/// assert!(!dictionary.exists("ca"));
/// assert_eq!(dictionary.len(), 2);
///
/// let words: Vec<String> = dictionary.words().collect();
/// assert_eq!(words, vec!["car", "cart"]);
/// ```
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: OrderedTree<CharInfo>,
    word_count: usize,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary {
    /// Create an empty dictionary
    #[must_use]
    pub fn new() -> Self {
        Self {
            words: OrderedTree::new(CharInfo::new(ROOT_SENTINEL)),
            word_count: 0,
        }
    }

    /// Number of words stored
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.word_count
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of letter nodes in the trie, including those left behind by
    /// erased words
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.words.len() - 1
    }

    /// Remove every word
    pub fn clear(&mut self) {
        self.words.clear(CharInfo::new(ROOT_SENTINEL));
        self.word_count = 0;
    }

    /// Locate `letter` among the children of `parent` by a lower-bound scan
    fn find_child_slot(&self, letter: char, parent: NodeId) -> ChildSlot {
        let mut previous = None;
        for child in self.words.children(parent) {
            let character = self.words.get(child).character;
            if character == letter {
                return ChildSlot::Found(child);
            }
            if character > letter {
                break;
            }
            previous = Some(child);
        }
        previous.map_or(ChildSlot::First, ChildSlot::After)
    }

    /// Child of `parent` labelled `letter`, created in sorted position if missing
    fn insert_character(&mut self, letter: char, parent: NodeId) -> NodeId {
        match self.find_child_slot(letter, parent) {
            ChildSlot::Found(id) => id,
            ChildSlot::First => self.words.insert_left_child(parent, CharInfo::new(letter)),
            ChildSlot::After(sibling) => self
                .words
                .insert_right_sibling(sibling, CharInfo::new(letter))
                .unwrap_or_else(|| unreachable!("children always have a parent")),
        }
    }

    /// Node spelling `word`, if the whole path exists
    fn find_node(&self, word: &str) -> Option<NodeId> {
        word.chars().try_fold(self.words.root(), |node, c| {
            match self.find_child_slot(normalize(c), node) {
                ChildSlot::Found(id) => Some(id),
                ChildSlot::After(_) | ChildSlot::First => None,
            }
        })
    }

    /// Whether `word` is a stored word
    ///
    /// Prefixes of stored words are not words themselves unless inserted.
    #[must_use]
    pub fn exists(&self, word: &str) -> bool {
        !word.is_empty()
            && self
                .find_node(word)
                .is_some_and(|id| self.words.get(id).is_end_of_word)
    }

    /// Add `word`, returning `true` if it was not already present
    ///
    /// The empty word is never stored.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut current = self.words.root();
        for c in word.chars() {
            current = self.insert_character(normalize(c), current);
        }

        let info = self.words.get_mut(current);
        if info.is_end_of_word {
            return false;
        }
        info.is_end_of_word = true;
        self.word_count += 1;
        true
    }

    /// Remove `word`, returning `true` if it was present
    ///
    /// The nodes of the word stay in the trie; only the end-of-word mark is
    /// cleared, so other words sharing the prefix are unaffected.
    pub fn erase(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let Some(id) = self.find_node(word) else {
            return false;
        };

        let info = self.words.get_mut(id);
        if !info.is_end_of_word {
            return false;
        }
        info.is_end_of_word = false;
        self.word_count -= 1;
        true
    }

    /// How many trie nodes carry `letter`
    ///
    /// This counts distinct stored prefixes ending in the letter, whether or not
    /// they are words.
    #[must_use]
    pub fn occurrences(&self, letter: char) -> usize {
        let letter = normalize(letter);
        self.words
            .values()
            .skip(1)
            .filter(|info| info.character == letter)
            .count()
    }

    /// How many stored words contain `letter` at least once
    ///
    /// Post-order fold over the trie propagating, per subtree, the number of
    /// words ending in it and how many of those use the letter. A node carrying
    /// the letter marks every word of its subtree as a user, once.
    #[must_use]
    pub fn total_usages(&self, letter: char) -> usize {
        let letter = normalize(letter);
        if letter == ROOT_SENTINEL {
            return 0;
        }

        // (usages, words) per node, filled in post-order
        let mut folded: Vec<(usize, usize)> = vec![(0, 0); self.words.len()];
        let mut stack: Vec<(NodeId, bool)> = vec![(self.words.root(), false)];

        while let Some((id, children_done)) = stack.pop() {
            if !children_done {
                stack.push((id, true));
                stack.extend(self.words.children(id).map(|child| (child, false)));
                continue;
            }

            let (child_usages, child_words) = self
                .words
                .children(id)
                .map(|child| folded[child.index()])
                .fold((0, 0), |(u, w), (cu, cw)| (u + cu, w + cw));

            let info = self.words.get(id);
            let words = child_words + usize::from(info.is_end_of_word);
            let usages = if info.character == letter {
                words
            } else {
                child_usages
            };
            folded[id.index()] = (usages, words);
        }

        folded[self.words.root().index()].0
    }

    /// Sum of the lengths of every stored word
    #[must_use]
    pub fn total_letters(&self) -> usize {
        self.length_distribution()
            .iter()
            .map(|(length, count)| length * count)
            .sum()
    }

    /// Stored words with exactly `length` letters, alphabetically
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> Vec<String> {
        self.words()
            .filter(|word| word.chars().count() == length)
            .collect()
    }

    /// Number of stored words per word length
    #[must_use]
    pub fn length_distribution(&self) -> BTreeMap<usize, usize> {
        let mut distribution = BTreeMap::new();
        for (id, level) in self.words.preorder() {
            if self.words.get(id).is_end_of_word {
                *distribution.entry(level).or_insert(0) += 1;
            }
        }
        distribution
    }

    /// Every word, alphabetically
    #[must_use]
    pub fn words(&self) -> Words<'_> {
        Words::new(&self.words)
    }

    /// Words that can be formed from `available`, each letter usable as many
    /// times as it appears in the slice
    #[must_use]
    pub fn possible_words(&self, available: &[char]) -> PossibleWords<'_> {
        PossibleWords::new(&self.words, available)
    }
}

impl<S: AsRef<str>> Extend<S> for Dictionary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        dictionary.extend(iter);
        dictionary
    }
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.words() {
            writeln!(f, "{word}")?;
        }
        Ok(())
    }
}
