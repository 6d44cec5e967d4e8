//! Formatting utilities for terminal output
//!
//! Pure string builders; the colored printing lives in `display`.

use crate::core::{Outcome, PUZZLE_LETTERS, Puzzle};

/// Grid cells in display order, with the center letter moved to the
/// middle cell
///
/// Each cell is `(letter, is_center)`. The move is display-only; letter
/// order never affects validity.
#[must_use]
pub fn grid_cells(puzzle: &Puzzle) -> [(u8, bool); PUZZLE_LETTERS] {
    let mut letters = *puzzle.letters();
    if let Some(position) = letters.iter().position(|&b| b == puzzle.center()) {
        letters.swap(position, PUZZLE_LETTERS / 2);
    }

    let mut cells = [(0u8, false); PUZZLE_LETTERS];
    for (cell, &letter) in cells.iter_mut().zip(letters.iter()) {
        *cell = (letter, letter == puzzle.center());
    }
    cells
}

/// Format the puzzle letters as a 3x3 grid
///
/// Letters are uppercased; the center letter is bracketed.
#[must_use]
pub fn letter_grid(puzzle: &Puzzle) -> String {
    let mut out = String::new();
    for row in grid_cells(puzzle).chunks(3) {
        for &(letter, is_center) in row {
            let upper = letter.to_ascii_uppercase() as char;
            if is_center {
                out.push('[');
                out.push(upper);
                out.push(']');
            } else {
                out.push(' ');
                out.push(upper);
                out.push(' ');
            }
            out.push(' ');
        }
        // Drop the trailing cell separator
        out.pop();
        out.push('\n');
    }
    out
}

/// One-line user-facing message for a guess outcome
#[must_use]
pub fn outcome_message(outcome: Outcome, points: u32) -> String {
    match outcome {
        Outcome::TooShort => "Too short - words need at least 4 letters.".to_string(),
        Outcome::MissingCenter => "Missing the center letter.".to_string(),
        Outcome::LetterBudgetExceeded => "Uses a letter that isn't available.".to_string(),
        Outcome::NotInDictionary => "Not in the word list.".to_string(),
        Outcome::AlreadyFound => "Word already found.".to_string(),
        Outcome::Accepted => format!("Nice! +{points} points"),
    }
}

/// Format the reveal listing: nine-letter words uppercased first, then
/// everything else
///
/// Expects solutions already sorted by length then alphabetically.
#[must_use]
pub fn reveal_listing(solutions: &[&str]) -> String {
    let mut out = String::from("Nine-letter words:\n");
    for word in solutions.iter().filter(|w| w.len() == PUZZLE_LETTERS) {
        out.push_str("  - ");
        out.push_str(&word.to_uppercase());
        out.push('\n');
    }

    out.push_str("Other valid words:\n");
    for word in solutions.iter().filter(|w| w.len() != PUZZLE_LETTERS) {
        out.push_str("  - ");
        out.push_str(word);
        out.push('\n');
    }
    out
}

/// Format the score line
#[must_use]
pub fn score_line(score: u32, max_score: u32, rank: &str) -> String {
    format!("Score: {score} / {max_score}  Rank: {rank}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BudgetPolicy;
    use crate::wordlists::Dictionary;

    fn test_puzzle() -> Puzzle {
        let dictionary = Dictionary::new(["dangerous", "garden", "ranged"]);
        Puzzle::build(
            &dictionary,
            *b"dangerous",
            b'r',
            BudgetPolicy::BoundedByOccurrence,
        )
    }

    #[test]
    fn grid_cells_put_center_in_the_middle() {
        let puzzle = test_puzzle();
        let cells = grid_cells(&puzzle);

        assert_eq!(cells[4], (b'r', true));
        assert_eq!(cells.iter().filter(|(_, is_center)| *is_center).count(), 1);

        // Same multiset of letters as the puzzle
        let mut shown: Vec<u8> = cells.iter().map(|&(letter, _)| letter).collect();
        let mut expected = puzzle.letters().to_vec();
        shown.sort_unstable();
        expected.sort_unstable();
        assert_eq!(shown, expected);
    }

    #[test]
    fn letter_grid_has_three_rows_and_brackets_center() {
        let puzzle = test_puzzle();
        let grid = letter_grid(&puzzle);

        assert_eq!(grid.lines().count(), 3);
        assert!(grid.contains("[R]"));
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(
            outcome_message(Outcome::Accepted, 6),
            "Nice! +6 points".to_string()
        );
        assert!(outcome_message(Outcome::TooShort, 0).contains("Too short"));
        assert!(outcome_message(Outcome::AlreadyFound, 0).contains("already"));
    }

    #[test]
    fn reveal_listing_splits_nine_letter_words() {
        let listing = reveal_listing(&["garden", "ranged", "dangerous"]);

        assert!(listing.contains("DANGEROUS"));
        assert!(listing.contains("garden"));
        let nine_section = listing.split("Other valid words:").next().unwrap();
        assert!(nine_section.contains("DANGEROUS"));
        assert!(!nine_section.contains("garden"));
    }

    #[test]
    fn score_line_format() {
        assert_eq!(
            score_line(12, 250, "Good"),
            "Score: 12 / 250  Rank: Good"
        );
    }
}
