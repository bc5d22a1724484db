//! Bag emptying command

use crate::core::{LettersBag, LettersSet};
use crate::error::Result;
use rand::Rng;

/// Draw every tile of a fresh bag in random order
///
/// # Errors
///
/// Never fails for a freshly built bag; the error is propagated from the bag.
pub fn draw_all<R: Rng + ?Sized>(letters: &LettersSet, rng: &mut R) -> Result<Vec<char>> {
    let mut bag = LettersBag::new(letters);
    let count = bag.len();
    let drawn = bag.extract_letters(count, rng)?;
    log::debug!("emptied bag of {count} tiles");
    Ok(drawn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterInfo;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn draws_every_repetition() {
        let letters: LettersSet = [('a', LetterInfo::new(3, 1)), ('b', LetterInfo::new(2, 3))]
            .into_iter()
            .collect();
        let mut rng = StdRng::seed_from_u64(11);

        let mut drawn = draw_all(&letters, &mut rng).unwrap();
        drawn.sort_unstable();
        assert_eq!(drawn, vec!['a', 'a', 'a', 'b', 'b']);
    }

    #[test]
    fn empty_set_draws_nothing() {
        let mut rng = StdRng::seed_from_u64(11);
        assert!(draw_all(&LettersSet::new(), &mut rng).unwrap().is_empty());
    }
}
