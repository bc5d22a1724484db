//! Embedded game data
//!
//! The default dictionary and letter table compiled into the binary.

// Include generated dictionary from build script
include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));

/// Default letter table (English tile distribution and values)
pub const LETTERS: &str = include_str!("../../data/letters.txt");
