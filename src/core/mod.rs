//! Core domain types for the letters game
//!
//! The dictionary trie, the letter rules, and the tile bag. Nothing in here
//! reads files or talks to the terminal.

mod bag;
mod dictionary;
mod letters;
mod walk;

pub use bag::{Bag, LettersBag};
pub use dictionary::{CharInfo, Dictionary};
pub use letters::{LetterInfo, LetterPool, LettersSet, normalize};
pub use walk::{Admission, PossibleWords, TrieWalk, Unconstrained, Words};
