//! Pangram Game
//!
//! A Spelling-Bee-style word game engine: nine letters seeded from a
//! pangram base word (9 letters, 9 distinct), one mandatory center letter,
//! and a precomputed solution set that every guess is classified against.
//!
//! # Quick Start
//!
//! ```rust
//! use pangram_game::core::BudgetPolicy;
//! use pangram_game::generator::generate_puzzle;
//! use pangram_game::wordlists::Dictionary;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let dictionary = Dictionary::embedded();
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let puzzle =
//!     generate_puzzle(&dictionary, BudgetPolicy::BoundedByOccurrence, &mut rng).unwrap();
//! assert!(puzzle.letters().contains(&puzzle.center()));
//! println!("{} words to find", puzzle.solution_count());
//! ```

// Core domain types
pub mod core;

// Puzzle generation
pub mod generator;

// Session, scoring, and the host-facing game facade
pub mod game;

// Word lists and the dictionary
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
