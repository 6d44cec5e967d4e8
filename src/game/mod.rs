//! Game state and host-facing commands
//!
//! `Game` couples one immutable puzzle with one mutable session plus the
//! scoring configuration, and exposes the entire surface a presentation
//! layer needs: new-puzzle, submit-guess, reveal, restart, and the
//! score/rank/completion accessors.

mod progress;
mod session;

pub use progress::{RankTable, RankTableError, ScoringPolicy};
pub use session::{Session, normalize_guess};

use crate::core::{BudgetPolicy, Outcome, Puzzle};
use crate::generator::{GenerateError, generate_puzzle};
use crate::wordlists::Dictionary;
use rand::Rng;

/// Configuration for a game
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// Letter-reuse policy for generated puzzles
    pub policy: BudgetPolicy,
    /// How found words are scored
    pub scoring: ScoringPolicy,
    /// Rank tier thresholds
    pub ranks: RankTable,
}

/// One playable game: an immutable puzzle plus its mutable session
///
/// Borrows the dictionary; many games can share one dictionary without
/// copying it. The puzzle is never partially mutated: new-puzzle and
/// restart replace state wholesale.
#[derive(Debug)]
pub struct Game<'a> {
    dictionary: &'a Dictionary,
    config: GameConfig,
    puzzle: Puzzle,
    session: Session,
}

impl<'a> Game<'a> {
    /// Start a game with a freshly generated puzzle
    ///
    /// # Errors
    /// Returns `GenerateError::NoPangramAvailable` if the dictionary has
    /// no usable base word.
    pub fn new<R: Rng>(
        dictionary: &'a Dictionary,
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, GenerateError> {
        let puzzle = generate_puzzle(dictionary, config.policy, rng)?;
        Ok(Self {
            dictionary,
            config,
            puzzle,
            session: Session::new(),
        })
    }

    /// Generate a new puzzle, replacing the puzzle and session wholesale
    ///
    /// # Errors
    /// Returns `GenerateError::NoPangramAvailable` if the dictionary has
    /// no usable base word; the current puzzle is left untouched.
    pub fn new_puzzle<R: Rng>(&mut self, rng: &mut R) -> Result<(), GenerateError> {
        self.puzzle = generate_puzzle(self.dictionary, self.config.policy, rng)?;
        self.session = Session::new();
        Ok(())
    }

    /// Reset the session, keeping the current puzzle
    pub fn restart(&mut self) {
        self.session = Session::new();
    }

    /// Submit a raw guess
    ///
    /// Normalizes, classifies, and records in one step; only `Accepted`
    /// changes state.
    pub fn submit_guess(&mut self, raw: &str) -> Outcome {
        self.session.submit(&self.puzzle, raw)
    }

    /// The full solution list, sorted by length then alphabetically
    ///
    /// Spoiler view; only produced on explicit request.
    #[must_use]
    pub fn reveal_solution(&self) -> Vec<&str> {
        self.puzzle.solutions_sorted()
    }

    /// The current puzzle
    #[inline]
    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// The current session
    #[inline]
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Current score under the configured scoring policy
    #[must_use]
    pub fn score(&self) -> u32 {
        self.config
            .scoring
            .score(self.session.found().iter().map(String::as_str))
    }

    /// Maximum reachable score, same aggregation as `score`
    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.config
            .scoring
            .score(self.puzzle.solutions().iter().map(String::as_str))
    }

    /// Points the given word is worth under the configured policy
    #[inline]
    #[must_use]
    pub fn word_points(&self, word: &str) -> u32 {
        self.config.scoring.word_points(word)
    }

    /// Rank label for the current score
    #[must_use]
    pub fn rank(&self) -> &str {
        self.config.ranks.rank(self.score(), self.max_score())
    }

    /// Whether every solution word has been found
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete(&self.puzzle)
    }
}
