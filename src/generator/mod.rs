//! Puzzle generation
//!
//! Selects a pangram base word from the dictionary and derives a playable
//! puzzle from it. Randomness is injected (`&mut impl Rng`) so generation
//! is reproducible under a fixed seed.

mod selector;

pub use selector::{PuzzleSeed, pangram_bases, select_seed};

use crate::core::{BudgetPolicy, Puzzle};
use crate::wordlists::Dictionary;
use rand::Rng;
use std::fmt;

/// Error type for puzzle generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// The dictionary has no 9-letter word with 9 distinct letters
    NoPangramAvailable,
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPangramAvailable => {
                write!(
                    f,
                    "dictionary contains no 9-letter word with 9 distinct letters"
                )
            }
        }
    }
}

impl std::error::Error for GenerateError {}

/// Generate a puzzle: select a seed, then build its solution set
///
/// # Errors
/// Returns `GenerateError::NoPangramAvailable` if the dictionary has no
/// usable base word. Fatal to puzzle creation; there is no play state
/// without a puzzle.
pub fn generate_puzzle<R: Rng>(
    dictionary: &Dictionary,
    policy: BudgetPolicy,
    rng: &mut R,
) -> Result<Puzzle, GenerateError> {
    let seed = select_seed(dictionary, rng)?;
    Ok(Puzzle::build(dictionary, seed.letters, seed.center, policy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generate_puzzle_is_reproducible() {
        let dictionary = Dictionary::embedded();

        let a = generate_puzzle(
            &dictionary,
            BudgetPolicy::BoundedByOccurrence,
            &mut StdRng::seed_from_u64(42),
        )
        .unwrap();
        let b = generate_puzzle(
            &dictionary,
            BudgetPolicy::BoundedByOccurrence,
            &mut StdRng::seed_from_u64(42),
        )
        .unwrap();

        assert_eq!(a.letters(), b.letters());
        assert_eq!(a.center(), b.center());
        assert_eq!(a.solutions(), b.solutions());
    }

    #[test]
    fn generated_puzzle_upholds_invariants() {
        let dictionary = Dictionary::embedded();
        let puzzle = generate_puzzle(
            &dictionary,
            BudgetPolicy::BoundedByOccurrence,
            &mut StdRng::seed_from_u64(7),
        )
        .unwrap();

        assert!(puzzle.letters().contains(&puzzle.center()));
        // The base word itself is always a solution
        assert!(puzzle.solution_count() >= 1);
        for word in puzzle.solutions() {
            assert!(dictionary.contains(word));
        }
    }

    #[test]
    fn generate_fails_without_pangram_base() {
        let dictionary = Dictionary::new(["garden", "sound", "rose"]);
        let result = generate_puzzle(
            &dictionary,
            BudgetPolicy::BoundedByOccurrence,
            &mut StdRng::seed_from_u64(0),
        );

        assert_eq!(result.unwrap_err(), GenerateError::NoPangramAvailable);
    }
}
