//! Pangram base selection
//!
//! A puzzle is seeded from a 9-letter dictionary word with 9 distinct
//! letters: the letters are shuffled for display order and one of them
//! becomes the mandatory center letter.

use super::GenerateError;
use crate::core::PUZZLE_LETTERS;
use crate::wordlists::Dictionary;
use rand::Rng;
use rand::prelude::{IndexedRandom, SliceRandom};

/// The letters and center of a puzzle, before its solution set is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleSeed {
    /// Puzzle letters in display order
    pub letters: [u8; PUZZLE_LETTERS],
    /// Mandatory center letter, one of `letters`
    pub center: u8,
}

/// All pangram base words in the dictionary, sorted
///
/// Sorted so that selection under a fixed RNG seed is deterministic (set
/// iteration order is not).
#[must_use]
pub fn pangram_bases(dictionary: &Dictionary) -> Vec<&str> {
    let mut bases: Vec<&str> = dictionary
        .iter()
        .filter(|word| word.len() == PUZZLE_LETTERS && distinct_letters(word) == PUZZLE_LETTERS)
        .collect();
    bases.sort_unstable();
    bases
}

/// Select a puzzle seed uniformly at random
///
/// The base word is chosen uniformly from the pangram bases, its letters
/// shuffled into a display order (order never affects validity), and the
/// center chosen uniformly from the nine letters.
///
/// # Errors
/// Returns `GenerateError::NoPangramAvailable` if no base word qualifies.
pub fn select_seed<R: Rng>(
    dictionary: &Dictionary,
    rng: &mut R,
) -> Result<PuzzleSeed, GenerateError> {
    let bases = pangram_bases(dictionary);
    let base = bases.choose(rng).ok_or(GenerateError::NoPangramAvailable)?;

    let mut letters: [u8; PUZZLE_LETTERS] = base
        .as_bytes()
        .try_into()
        .expect("base word length already checked");
    letters.shuffle(rng);

    let center = *letters
        .as_slice()
        .choose(rng)
        .expect("puzzle letters are non-empty");

    Ok(PuzzleSeed { letters, center })
}

/// Count the distinct letters of a normalized (lowercase ASCII) word
fn distinct_letters(word: &str) -> usize {
    let mut seen = [false; 26];
    let mut count = 0;
    for byte in word.bytes() {
        let idx = usize::from(byte - b'a');
        if !seen[idx] {
            seen[idx] = true;
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn test_dictionary() -> Dictionary {
        Dictionary::new([
            "dangerous", // 9 distinct letters
            "education", // 9 distinct letters
            "oranges",   // too short
            "excellent", // 9 letters but repeats
            "garden",
        ])
    }

    #[test]
    fn pangram_bases_filters_and_sorts() {
        let dictionary = test_dictionary();
        let bases = pangram_bases(&dictionary);

        assert_eq!(bases, vec!["dangerous", "education"]);
    }

    #[test]
    fn seed_letters_are_a_permutation_of_a_base() {
        let dictionary = test_dictionary();
        let seed = select_seed(&dictionary, &mut StdRng::seed_from_u64(3)).unwrap();

        let mut letters = seed.letters;
        letters.sort_unstable();

        let matches_base = pangram_bases(&dictionary).iter().any(|base| {
            let mut base_letters: Vec<u8> = base.bytes().collect();
            base_letters.sort_unstable();
            base_letters == letters
        });
        assert!(matches_base);
    }

    #[test]
    fn seed_center_is_one_of_the_letters() {
        let dictionary = test_dictionary();

        for seed_value in 0..20 {
            let seed = select_seed(&dictionary, &mut StdRng::seed_from_u64(seed_value)).unwrap();
            assert!(seed.letters.contains(&seed.center));
        }
    }

    #[test]
    fn select_seed_is_reproducible() {
        let dictionary = test_dictionary();

        let a = select_seed(&dictionary, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = select_seed(&dictionary, &mut StdRng::seed_from_u64(99)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn select_seed_errors_without_bases() {
        let dictionary = Dictionary::new(["garden", "excellent"]);
        let result = select_seed(&dictionary, &mut StdRng::seed_from_u64(0));

        assert_eq!(result.unwrap_err(), GenerateError::NoPangramAvailable);
    }
}
