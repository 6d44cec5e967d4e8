//! Play session state
//!
//! Tracks the words found so far for one puzzle. A session is created
//! alongside a puzzle and replaced wholesale on restart or new-puzzle;
//! the found set only ever grows within a puzzle's lifetime.

use crate::core::{Outcome, Puzzle};
use rustc_hash::FxHashSet;

/// Mutable per-puzzle state: the set of found words
///
/// Submission runs normalize, classify, record as one step behind
/// `&mut self`, so two guesses can never interleave and double-score.
#[derive(Debug, Clone, Default)]
pub struct Session {
    found: FxHashSet<String>,
}

impl Session {
    /// Create an empty session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit a raw guess
    ///
    /// The guess is trimmed and lowercased before classification; an input
    /// that is empty after trimming classifies as `TooShort`. Only an
    /// `Accepted` outcome mutates the session.
    pub fn submit(&mut self, puzzle: &Puzzle, raw: &str) -> Outcome {
        let guess = normalize_guess(raw);
        let outcome = puzzle.classify(&guess, &self.found);
        if outcome.is_accepted() {
            self.found.insert(guess);
        }
        outcome
    }

    /// Words found so far
    #[inline]
    #[must_use]
    pub const fn found(&self) -> &FxHashSet<String> {
        &self.found
    }

    /// Number of words found
    #[inline]
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    /// Found words sorted by length, then alphabetically
    #[must_use]
    pub fn found_sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.found.iter().map(String::as_str).collect();
        words.sort_unstable_by_key(|&w| (w.len(), w));
        words
    }

    /// Whether every solution word has been found
    ///
    /// The found set is always a subset of the solutions, so comparing
    /// sizes is comparing the sets.
    #[must_use]
    pub fn is_complete(&self, puzzle: &Puzzle) -> bool {
        self.found.len() == puzzle.solution_count()
    }
}

/// Trim and lowercase a raw guess
///
/// Normalization happens before classification, not inside it.
#[must_use]
pub fn normalize_guess(raw: &str) -> String {
    raw.trim().to_lowercase()
}
