//! Puzzle state and the acceptance predicate
//!
//! A `Puzzle` owns its nine letters, the mandatory center letter, the
//! letter budget, and the precomputed solution set. The acceptance rules
//! live in one place (`letter_failure`) so the solution-set builder and the
//! guess classifier can never diverge.

use super::budget::{BudgetPolicy, LetterBudget};
use super::outcome::Outcome;
use crate::wordlists::Dictionary;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Number of letters in a puzzle
pub const PUZZLE_LETTERS: usize = 9;

/// Minimum length of an accepted word
pub const MIN_WORD_LENGTH: usize = 4;

/// Which letter rule a word breaks
///
/// Ordered by check priority; used by both the builder and `classify`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LetterFailure {
    TooShort,
    MissingCenter,
    OverBudget,
}

/// An immutable puzzle: letters, center, budget, and its full solution set
///
/// The solution set is computed once at construction and cached for the
/// life of the puzzle. Letter order matters only for display.
#[derive(Debug, Clone)]
pub struct Puzzle {
    letters: [u8; PUZZLE_LETTERS],
    center: u8,
    budget: LetterBudget,
    solutions: FxHashSet<String>,
}

impl Puzzle {
    /// Build a puzzle from chosen letters and compute its solution set
    ///
    /// Scans the whole dictionary once, O(|dictionary| x word length).
    ///
    /// # Panics
    /// Debug builds assert that `center` is one of `letters`.
    #[must_use]
    pub fn build(
        dictionary: &Dictionary,
        letters: [u8; PUZZLE_LETTERS],
        center: u8,
        policy: BudgetPolicy,
    ) -> Self {
        debug_assert!(letters.contains(&center));

        let budget = LetterBudget::new(&letters, policy);
        let solutions: FxHashSet<String> = dictionary
            .words()
            .par_iter()
            .filter(|word| letter_failure(word, center, &budget).is_none())
            .cloned()
            .collect();

        Self {
            letters,
            center,
            budget,
            solutions,
        }
    }

    /// Classify a normalized guess against this puzzle
    ///
    /// Priority order: too short, missing center, letter budget, dictionary
    /// membership, already found, accepted. Total: every guess maps to an
    /// `Outcome`. Pure read; recording accepted words is the session's job.
    #[must_use]
    pub fn classify(&self, guess: &str, found: &FxHashSet<String>) -> Outcome {
        match letter_failure(guess, self.center, &self.budget) {
            Some(LetterFailure::TooShort) => Outcome::TooShort,
            Some(LetterFailure::MissingCenter) => Outcome::MissingCenter,
            Some(LetterFailure::OverBudget) => Outcome::LetterBudgetExceeded,
            None => {
                // For a guess passing the letter rules, solution membership
                // and dictionary membership are the same question.
                if !self.solutions.contains(guess) {
                    Outcome::NotInDictionary
                } else if found.contains(guess) {
                    Outcome::AlreadyFound
                } else {
                    Outcome::Accepted
                }
            }
        }
    }

    /// Whether `word` is one of this puzzle's solutions
    #[inline]
    #[must_use]
    pub fn accepts(&self, word: &str) -> bool {
        self.solutions.contains(word)
    }

    /// The puzzle letters in display order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; PUZZLE_LETTERS] {
        &self.letters
    }

    /// The mandatory center letter
    #[inline]
    #[must_use]
    pub const fn center(&self) -> u8 {
        self.center
    }

    /// The per-letter usage caps
    #[inline]
    #[must_use]
    pub const fn budget(&self) -> &LetterBudget {
        &self.budget
    }

    /// The full solution set
    #[inline]
    #[must_use]
    pub const fn solutions(&self) -> &FxHashSet<String> {
        &self.solutions
    }

    /// Number of solution words
    #[inline]
    #[must_use]
    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    /// Solution words sorted by length, then alphabetically
    ///
    /// Consumers sort for display; the set itself is unordered.
    #[must_use]
    pub fn solutions_sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.solutions.iter().map(String::as_str).collect();
        words.sort_unstable_by_key(|&w| (w.len(), w));
        words
    }
}

/// The shared acceptance predicate, reported as the first failing check
fn letter_failure(word: &str, center: u8, budget: &LetterBudget) -> Option<LetterFailure> {
    if word.len() < MIN_WORD_LENGTH {
        return Some(LetterFailure::TooShort);
    }
    if !word.bytes().any(|b| b == center) {
        return Some(LetterFailure::MissingCenter);
    }
    if !budget.allows(word) {
        return Some(LetterFailure::OverBudget);
    }
    None
}
