//! Dictionary and letter-set loading
//!
//! Dictionary files hold one word per line. Letter files hold an optional
//! header line followed by `<letter> <repetitions> <score>` rows.

use crate::core::{Dictionary, LetterInfo, LettersSet};
use crate::error::{GameError, Result};
use std::fs;
use std::path::Path;

/// Build a dictionary from newline-separated words
///
/// Surrounding whitespace is trimmed and blank lines are skipped.
///
/// # Examples
/// ```
/// use letters_solver::wordlists::loader::parse_dictionary;
///
/// let dictionary = parse_dictionary("cat\n\nCar\ncart\n");
/// assert_eq!(dictionary.len(), 3);
/// assert!(dictionary.exists("car"));
/// ```
#[must_use]
pub fn parse_dictionary(content: &str) -> Dictionary {
    let mut dictionary = Dictionary::new();
    let mut duplicates = 0_usize;

    for word in content.lines().map(str::trim).filter(|w| !w.is_empty()) {
        if !dictionary.insert(word) {
            duplicates += 1;
        }
    }

    if duplicates > 0 {
        log::warn!("ignored {duplicates} duplicate dictionary entries");
    }
    dictionary
}

/// Build a letter set from a letters table
///
/// The first line is taken as a header when its second field is not a number.
/// A letter listed twice keeps its first definition.
///
/// # Errors
///
/// Returns [`GameError::Parse`] with the 1-based line number when a row does not
/// hold exactly one letter followed by two unsigned integers.
pub fn parse_letters(content: &str) -> Result<LettersSet> {
    let mut letters = LettersSet::new();

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if line_number == 1 && is_header(&fields) {
            log::debug!("skipping letters header {:?}", line.trim());
            continue;
        }

        let (letter, info) = parse_row(&fields).map_err(|reason| GameError::Parse {
            line: line_number,
            reason,
        })?;

        if !letters.insert(letter, info) {
            log::warn!("line {line_number}: letter '{letter}' already defined, keeping the first");
        }
    }

    Ok(letters)
}

fn is_header(fields: &[&str]) -> bool {
    fields.get(1).is_none_or(|f| f.parse::<u32>().is_err())
}

fn parse_row(fields: &[&str]) -> std::result::Result<(char, LetterInfo), String> {
    let [letter, repetitions, score] = fields else {
        return Err(format!("expected 3 fields, found {}", fields.len()));
    };

    let mut chars = letter.chars();
    let (Some(letter), None) = (chars.next(), chars.next()) else {
        return Err(format!("expected a single letter, found {letter:?}"));
    };

    let repetitions = repetitions
        .parse::<u32>()
        .map_err(|e| format!("invalid repetitions {repetitions:?}: {e}"))?;
    let score = score
        .parse::<u32>()
        .map_err(|e| format!("invalid score {score:?}: {e}"))?;

    Ok((letter, LetterInfo::new(repetitions, score)))
}

/// Load a dictionary file
///
/// # Errors
///
/// Returns [`GameError::Io`] if the file cannot be read.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Dictionary> {
    let path = path.as_ref();
    let content = read(path)?;
    let dictionary = parse_dictionary(&content);
    log::info!("loaded {} words from {}", dictionary.len(), path.display());
    Ok(dictionary)
}

/// Load a letters file
///
/// # Errors
///
/// Returns [`GameError::Io`] if the file cannot be read, or
/// [`GameError::Parse`] if a row is malformed.
pub fn load_letters<P: AsRef<Path>>(path: P) -> Result<LettersSet> {
    let path = path.as_ref();
    let content = read(path)?;
    let letters = parse_letters(&content)?;
    log::info!("loaded {} letters from {}", letters.len(), path.display());
    Ok(letters)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| GameError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_skips_blank_lines_and_duplicates() {
        let dictionary = parse_dictionary("  cat \n\ncar\nCAT\n\t\ncart");
        assert_eq!(dictionary.len(), 3);
        assert_eq!(
            dictionary.words().collect::<Vec<_>>(),
            vec!["car", "cart", "cat"]
        );
    }

    #[test]
    fn letters_with_header() {
        let letters = parse_letters("Letra Cantidad Puntos\nA 12 1\nc 5 3\n").unwrap();
        assert_eq!(letters.len(), 2);
        assert_eq!(letters.info('a'), LetterInfo::new(12, 1));
        assert_eq!(letters.info('C'), LetterInfo::new(5, 3));
    }

    #[test]
    fn letters_without_header() {
        let letters = parse_letters("A 12 1\n\nB 2 3").unwrap();
        assert_eq!(letters.len(), 2);
        assert_eq!(letters.info('b').score, 3);
    }

    #[test]
    fn duplicate_letter_keeps_first() {
        let letters = parse_letters("a 1 1\nA 9 9").unwrap();
        assert_eq!(letters.info('a'), LetterInfo::new(1, 1));
    }

    #[test]
    fn malformed_row_reports_line() {
        let err = parse_letters("Letter Count Score\nA 1 1\nB two 3").unwrap_err();
        match err {
            GameError::Parse { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains("two"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn multi_character_letter_is_rejected() {
        let err = parse_letters("AB 1 1").unwrap_err();
        assert!(matches!(err, GameError::Parse { line: 1, .. }));
    }

    #[test]
    fn missing_fields_are_rejected() {
        let err = parse_letters("A 1 1\nB 2").unwrap_err();
        assert!(matches!(err, GameError::Parse { line: 2, .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_dictionary("definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, GameError::Io { .. }));
    }
}
