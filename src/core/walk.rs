//! Word iterators over the dictionary trie
//!
//! Both iterators are built on [`TrieWalk`], a depth-first walk that keeps the
//! word spelled by the current path. Before entering a node the walk asks an
//! [`Admission`] policy whether the node's letter may be used; a refused node is
//! skipped together with its whole subtree. Leaving a node hands its letter
//! back to the policy.

use super::dictionary::CharInfo;
use super::letters::LetterPool;
use crate::tree::{NodeId, OrderedTree};

/// Gate deciding whether the walk may enter a node labelled `letter`
pub trait Admission {
    /// Called before entering a node; `false` prunes the node's subtree
    fn admit(&mut self, letter: char) -> bool;

    /// Called when the walk leaves a node it was admitted into
    fn release(&mut self, letter: char);
}

/// Admits every letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unconstrained;

impl Admission for Unconstrained {
    fn admit(&mut self, _letter: char) -> bool {
        true
    }

    fn release(&mut self, _letter: char) {}
}

impl Admission for LetterPool {
    fn admit(&mut self, letter: char) -> bool {
        self.take(letter)
    }

    fn release(&mut self, letter: char) {
        self.give_back(letter);
    }
}

/// Pruned preorder walk over a dictionary trie
#[derive(Debug, Clone)]
pub struct TrieWalk<'a, A> {
    tree: &'a OrderedTree<CharInfo>,
    current: NodeId,
    word: String,
    depth: usize,
    admission: A,
    exhausted: bool,
    visited: usize,
}

impl<'a, A: Admission> TrieWalk<'a, A> {
    pub(crate) fn new(tree: &'a OrderedTree<CharInfo>, admission: A) -> Self {
        Self {
            tree,
            current: tree.root(),
            word: String::new(),
            depth: 0,
            admission,
            exhausted: false,
            visited: 0,
        }
    }

    /// Move to the next admitted node in preorder
    ///
    /// Returns `None` once the pruned search space is exhausted.
    pub fn step(&mut self) -> Option<NodeId> {
        if self.exhausted {
            return None;
        }

        // Candidates are always children of `self.current`.
        let mut candidate = self.tree.left_child(self.current);
        loop {
            while let Some(id) = candidate {
                let letter = self.tree.get(id).character;
                if self.admission.admit(letter) {
                    self.word.push(letter);
                    self.depth += 1;
                    self.current = id;
                    self.visited += 1;
                    return Some(id);
                }
                candidate = self.tree.right_sibling(id);
            }

            // Children of `current` are used up, back out of it.
            let Some(parent) = self.tree.parent(self.current) else {
                self.exhausted = true;
                return None;
            };
            if let Some(letter) = self.word.pop() {
                self.admission.release(letter);
            }
            self.depth -= 1;
            candidate = self.tree.right_sibling(self.current);
            self.current = parent;
        }
    }

    /// Advance to the next node that ends a word
    pub fn next_word(&mut self) -> Option<&str> {
        while let Some(id) = self.step() {
            if self.tree.get(id).is_end_of_word {
                return Some(&self.word);
            }
        }
        None
    }

    /// Word spelled by the current path
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Depth of the current node, the root being 0
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Number of nodes entered so far
    #[must_use]
    pub const fn nodes_visited(&self) -> usize {
        self.visited
    }

    #[must_use]
    pub const fn admission(&self) -> &A {
        &self.admission
    }
}

/// Two walks are at the same position when they sit on the same node with the
/// same spelled word, or are both exhausted. Admission state is not compared.
impl<A> PartialEq for TrieWalk<'_, A> {
    fn eq(&self, other: &Self) -> bool {
        if self.exhausted || other.exhausted {
            return self.exhausted == other.exhausted;
        }
        std::ptr::eq(self.tree, other.tree)
            && self.current == other.current
            && self.depth == other.depth
            && self.word == other.word
    }
}

/// Every word of a dictionary in lexicographic order
#[derive(Debug, Clone, PartialEq)]
pub struct Words<'a> {
    walk: TrieWalk<'a, Unconstrained>,
}

impl<'a> Words<'a> {
    pub(crate) fn new(tree: &'a OrderedTree<CharInfo>) -> Self {
        Self {
            walk: TrieWalk::new(tree, Unconstrained),
        }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.walk.next_word().map(str::to_owned)
    }
}

/// Words that can be spelled from a multiset of available letters
///
/// Each available letter may be used at most as many times as it was supplied.
/// Subtrees rooted at a letter that is no longer available are never entered.
#[derive(Debug, Clone, PartialEq)]
pub struct PossibleWords<'a> {
    walk: TrieWalk<'a, LetterPool>,
}

impl<'a> PossibleWords<'a> {
    pub(crate) fn new(tree: &'a OrderedTree<CharInfo>, available: &[char]) -> Self {
        Self {
            walk: TrieWalk::new(tree, LetterPool::new(available)),
        }
    }

    /// Trie nodes entered so far
    #[must_use]
    pub const fn nodes_visited(&self) -> usize {
        self.walk.nodes_visited()
    }

    /// Letters not used by the current path
    #[must_use]
    pub const fn remaining_letters(&self) -> &LetterPool {
        self.walk.admission()
    }

    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.walk.is_exhausted()
    }
}

impl Iterator for PossibleWords<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.walk.next_word().map(str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::Dictionary;

    fn sample_dictionary() -> Dictionary {
        ["cat", "car", "cart", "dog", "do", "act", "a", "tact"]
            .into_iter()
            .collect()
    }

    #[test]
    fn words_are_lexicographic() {
        let dictionary = sample_dictionary();
        let words: Vec<String> = dictionary.words().collect();
        assert_eq!(
            words,
            vec!["a", "act", "car", "cart", "cat", "do", "dog", "tact"]
        );
    }

    #[test]
    fn words_restart_from_the_beginning() {
        let dictionary = sample_dictionary();
        let first: Vec<String> = dictionary.words().collect();
        let second: Vec<String> = dictionary.words().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn possible_words_respect_multiplicity() {
        let dictionary = sample_dictionary();
        let words: Vec<String> = dictionary.possible_words(&['c', 'a', 't']).collect();
        assert_eq!(words, vec!["a", "act", "cat"]);

        let words: Vec<String> = dictionary
            .possible_words(&['t', 'a', 'c', 't'])
            .collect();
        assert_eq!(words, vec!["a", "act", "cat", "tact"]);
    }

    #[test]
    fn possible_words_match_brute_force_filter() {
        let dictionary = sample_dictionary();
        let available = ['d', 'o', 'g', 'c', 'a', 'r'];

        let fast: Vec<String> = dictionary.possible_words(&available).collect();
        let slow: Vec<String> = dictionary
            .words()
            .filter(|w| {
                let mut pool = available.to_vec();
                w.chars().all(|c| match pool.iter().position(|&p| p == c) {
                    Some(i) => {
                        pool.swap_remove(i);
                        true
                    }
                    None => false,
                })
            })
            .collect();
        assert_eq!(fast, slow);
    }

    #[test]
    fn possible_words_accept_uppercase_letters() {
        let dictionary = sample_dictionary();
        let words: Vec<String> = dictionary.possible_words(&['D', 'O']).collect();
        assert_eq!(words, vec!["do"]);
    }

    #[test]
    fn possible_words_with_no_letters_is_empty() {
        let dictionary = sample_dictionary();
        let mut iter = dictionary.possible_words(&[]);
        assert_eq!(iter.next(), None);
        assert!(iter.is_exhausted());
        assert_eq!(iter.nodes_visited(), 0);
    }

    #[test]
    fn pruned_subtrees_are_never_entered() {
        let dictionary = sample_dictionary();
        // Only the 'd' branch is reachable: d, o, g
        let mut iter = dictionary.possible_words(&['d', 'o', 'g']);
        let words: Vec<String> = iter.by_ref().collect();
        assert_eq!(words, vec!["do", "dog"]);
        assert_eq!(iter.nodes_visited(), 3);
    }

    #[test]
    fn letters_are_returned_after_the_walk() {
        let dictionary = sample_dictionary();
        let mut iter = dictionary.possible_words(&['c', 'a', 'r', 't']);
        while iter.next().is_some() {}
        assert_eq!(iter.remaining_letters().len(), 4);
    }

    #[test]
    fn iterators_compare_by_position() {
        let dictionary = sample_dictionary();
        let mut a = dictionary.possible_words(&['c', 'a', 't']);
        let mut b = dictionary.possible_words(&['c', 'a', 't', 'z']);
        assert_eq!(a, b);

        a.next();
        assert_ne!(a, b);
        b.next();
        assert_eq!(a, b);

        a.by_ref().for_each(drop);
        b.by_ref().for_each(drop);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_dictionary_yields_nothing() {
        let dictionary = crate::core::Dictionary::new();
        assert_eq!(dictionary.words().count(), 0);
        assert_eq!(dictionary.possible_words(&['a']).count(), 0);
    }
}
