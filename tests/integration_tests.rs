//! Integration tests for the letters solver.
//!
//! These tests run the full pipeline from loading dictionary and letter files
//! through solving draws and computing statistics.

use letters_solver::commands::{DictionarySummary, draw_all, letter_statistics};
use letters_solver::core::{Dictionary, LettersSet};
use letters_solver::error::GameError;
use letters_solver::solver::{EfficientSolver, GameMode, NaiveSolver};
use letters_solver::wordlists::loader::{load_dictionary, load_letters};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Load the fixture dictionary and letter table
fn load_fixtures() -> (Dictionary, LettersSet) {
    let dictionary =
        load_dictionary("tests/fixtures/dictionary.txt").expect("Failed to read test dictionary");
    let letters = load_letters("tests/fixtures/letters.txt").expect("Failed to read test letters");
    (dictionary, letters)
}

/// Solve with both strategies, check they agree, return the shared answer
fn solve_both(letters: &[char], mode: GameMode) -> (Vec<String>, u32) {
    let (dictionary, set) = load_fixtures();
    let naive = NaiveSolver::naive(&dictionary, &set).get_solutions(letters, mode);
    let efficient = EfficientSolver::efficient(&dictionary, &set).get_solutions(letters, mode);
    assert_eq!(naive, efficient, "strategies disagree for {letters:?}");
    (efficient.words, efficient.metric)
}

#[cfg(test)]
mod loading {
    use super::*;

    #[test]
    fn fixtures_load() {
        let (dictionary, letters) = load_fixtures();
        // "Cart" duplicates "cart" after lowercasing
        assert_eq!(dictionary.len(), 11);
        assert!(dictionary.exists("cartoon"));
        assert!(!dictionary.exists(""));

        assert_eq!(letters.len(), 6);
        assert_eq!(letters.total_tiles(), 13);
        assert_eq!(letters.info('c').score, 3);
    }

    #[test]
    fn malformed_letters_report_line() {
        let err = load_letters("tests/fixtures/bad_letters.txt").unwrap_err();
        assert!(matches!(err, GameError::Parse { line: 3, .. }), "{err}");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_letters("tests/fixtures/nope.txt").unwrap_err();
        assert!(matches!(err, GameError::Io { .. }));
        assert!(err.to_string().contains("nope.txt"));
    }
}

#[cfg(test)]
mod solving {
    use super::*;

    #[test]
    fn longest_word_uses_most_letters() {
        let letters = ['c', 'a', 'r', 't', 'o', 'o', 'n'];
        assert_eq!(
            solve_both(&letters, GameMode::Length),
            (vec!["cartoon".to_string()], 7)
        );
        assert_eq!(
            solve_both(&letters, GameMode::Score),
            (vec!["cartoon".to_string()], 9)
        );
    }

    #[test]
    fn missing_second_o_falls_back_to_carton() {
        let letters = ['n', 'o', 't', 'r', 'a', 'c'];
        assert_eq!(
            solve_both(&letters, GameMode::Length),
            (vec!["carton".to_string()], 6)
        );
    }

    #[test]
    fn anagram_ties_come_out_alphabetically() {
        let letters = ['r', 'a', 't'];
        let expected = vec!["art".to_string(), "rat".to_string(), "tar".to_string()];
        assert_eq!(solve_both(&letters, GameMode::Length), (expected.clone(), 3));
        assert_eq!(solve_both(&letters, GameMode::Score), (expected, 3));
    }

    #[test]
    fn nothing_formable() {
        assert_eq!(solve_both(&['z', 'q'], GameMode::Score), (vec![], 0));
        assert_eq!(solve_both(&[], GameMode::Length), (vec![], 0));
    }

    #[test]
    fn random_draws_agree() {
        let (dictionary, letters) = load_fixtures();
        let naive = NaiveSolver::naive(&dictionary, &letters);
        let efficient = EfficientSolver::efficient(&dictionary, &letters);
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..50 {
            let mut draw = draw_all(&letters, &mut rng).unwrap();
            draw.truncate(6);
            for mode in [GameMode::Length, GameMode::Score] {
                assert_eq!(
                    naive.get_solutions(&draw, mode),
                    efficient.get_solutions(&draw, mode)
                );
            }
        }
    }
}

#[cfg(test)]
mod statistics {
    use super::*;

    #[test]
    fn usages_and_occurrences() {
        let (dictionary, letters) = load_fixtures();
        let stats = letter_statistics(&dictionary, &letters);

        let c = stats.iter().find(|s| s.letter == 'c').unwrap();
        assert_eq!(c.usages, 6);
        assert_eq!(c.occurrences, 2);

        let a = stats.iter().find(|s| s.letter == 'a').unwrap();
        assert_eq!(a.usages, 11);
        assert_eq!(a.occurrences, 4);

        for row in &stats {
            assert!(row.usages <= dictionary.len());
        }
    }

    #[test]
    fn summary_matches_dictionary() {
        let (dictionary, _) = load_fixtures();
        let summary = DictionarySummary::new(&dictionary);

        assert_eq!(summary.words, 11);
        assert_eq!(summary.total_letters, 38);
        assert_eq!(summary.length_distribution.get(&3), Some(&6));
        assert_eq!(
            dictionary.words_of_length(3),
            vec!["act", "art", "car", "cat", "rat", "tar"]
        );
    }

    #[test]
    fn full_draw_matches_repetitions() {
        let (_, letters) = load_fixtures();
        let mut rng = StdRng::seed_from_u64(1);
        let drawn = draw_all(&letters, &mut rng).unwrap();

        assert_eq!(drawn.len(), 13);
        for (letter, info) in letters.iter() {
            let copies = drawn.iter().filter(|&&c| c == letter).count();
            assert_eq!(copies, info.repetitions as usize, "letter {letter}");
        }
    }

    #[test]
    fn insert_then_erase_restores_state() {
        let (mut dictionary, _) = load_fixtures();
        let before = dictionary.len();

        assert!(dictionary.insert("tarot"));
        assert!(!dictionary.insert("TAROT"));
        assert_eq!(dictionary.len(), before + 1);

        assert!(dictionary.erase("tarot"));
        assert!(!dictionary.exists("tarot"));
        assert_eq!(dictionary.len(), before);
        assert!(dictionary.exists("tar"));
    }
}
