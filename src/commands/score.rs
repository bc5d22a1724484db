//! Word scoring command

use crate::core::{Dictionary, LettersSet};

/// Score breakdown of a single word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordScore {
    pub word: String,
    pub length: usize,
    pub score: u32,
    /// Per-letter points, in word order
    pub letters: Vec<(char, u32)>,
    pub in_dictionary: bool,
}

/// Score `word` under `letters`, noting whether the dictionary knows it
#[must_use]
pub fn score_word(word: &str, dictionary: &Dictionary, letters: &LettersSet) -> WordScore {
    let word = word.trim().to_ascii_lowercase();
    let breakdown: Vec<(char, u32)> = word
        .chars()
        .map(|c| (c, letters.info(c).score))
        .collect();

    WordScore {
        length: breakdown.len(),
        score: letters.get_score(&word),
        in_dictionary: dictionary.exists(&word),
        letters: breakdown,
        word,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterInfo;

    #[test]
    fn scores_known_word() {
        let dictionary: Dictionary = ["cart"].into_iter().collect();
        let letters: LettersSet = [('c', LetterInfo::new(2, 3)), ('a', LetterInfo::new(9, 1))]
            .into_iter()
            .collect();

        let result = score_word(" Cart ", &dictionary, &letters);
        assert_eq!(result.word, "cart");
        assert_eq!(result.length, 4);
        assert_eq!(result.score, 4);
        assert_eq!(result.letters, vec![('c', 3), ('a', 1), ('r', 0), ('t', 0)]);
        assert!(result.in_dictionary);
    }

    #[test]
    fn unknown_word_still_scored() {
        let letters: LettersSet = [('z', LetterInfo::new(1, 10))].into_iter().collect();
        let result = score_word("zz", &Dictionary::new(), &letters);
        assert_eq!(result.score, 20);
        assert!(!result.in_dictionary);
    }
}
