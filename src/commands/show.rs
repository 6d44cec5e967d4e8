//! Puzzle preview command
//!
//! Generates a puzzle and returns it for display without entering play.
//! Useful with a fixed seed to inspect a reproducible puzzle.

use crate::core::{BudgetPolicy, Puzzle};
use crate::generator::{GenerateError, generate_puzzle};
use crate::wordlists::Dictionary;
use rand::Rng;

/// Configuration for the show command
#[derive(Debug, Clone, Copy)]
pub struct ShowConfig {
    /// Letter-reuse policy for the generated puzzle
    pub policy: BudgetPolicy,
    /// Whether to include the full solution list (spoiler)
    pub reveal: bool,
}

/// A generated puzzle ready for display
#[derive(Debug, Clone)]
pub struct ShowResult {
    pub puzzle: Puzzle,
    pub reveal: bool,
}

/// Generate a puzzle for display
///
/// # Errors
/// Returns `GenerateError::NoPangramAvailable` if the dictionary has no
/// usable base word.
pub fn show_puzzle<R: Rng>(
    config: &ShowConfig,
    dictionary: &Dictionary,
    rng: &mut R,
) -> Result<ShowResult, GenerateError> {
    let puzzle = generate_puzzle(dictionary, config.policy, rng)?;
    Ok(ShowResult {
        puzzle,
        reveal: config.reveal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn show_puzzle_is_reproducible() {
        let dictionary = Dictionary::new(["dangerous", "education", "garden"]);
        let config = ShowConfig {
            policy: BudgetPolicy::BoundedByOccurrence,
            reveal: false,
        };

        let a = show_puzzle(&config, &dictionary, &mut StdRng::seed_from_u64(5)).unwrap();
        let b = show_puzzle(&config, &dictionary, &mut StdRng::seed_from_u64(5)).unwrap();

        assert_eq!(a.puzzle.letters(), b.puzzle.letters());
        assert_eq!(a.puzzle.center(), b.puzzle.center());
    }

    #[test]
    fn show_puzzle_carries_reveal_flag() {
        let dictionary = Dictionary::new(["dangerous"]);
        let config = ShowConfig {
            policy: BudgetPolicy::BoundedByOccurrence,
            reveal: true,
        };

        let result = show_puzzle(&config, &dictionary, &mut StdRng::seed_from_u64(0)).unwrap();
        assert!(result.reveal);
    }

    #[test]
    fn show_puzzle_fails_without_base() {
        let dictionary = Dictionary::new(["garden", "sound"]);
        let config = ShowConfig {
            policy: BudgetPolicy::BoundedByOccurrence,
            reveal: false,
        };

        let result = show_puzzle(&config, &dictionary, &mut StdRng::seed_from_u64(0));
        assert_eq!(result.unwrap_err(), GenerateError::NoPangramAvailable);
    }
}
