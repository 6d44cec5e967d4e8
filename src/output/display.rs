//! Display functions for command results

use super::formatters::{letter_grid, reveal_listing};
use crate::commands::ShowResult;
use colored::Colorize;

/// Print a generated puzzle, optionally revealing its solutions
pub fn print_show_result(result: &ShowResult) {
    let puzzle = &result.puzzle;

    println!("\n{}", "─".repeat(40).cyan());
    println!(" Puzzle");
    println!("{}", "─".repeat(40).cyan());
    print!("{}", letter_grid(puzzle));

    let center = puzzle.center().to_ascii_uppercase() as char;
    println!(
        "\nCenter letter: {}",
        center.to_string().bright_yellow().bold()
    );
    println!("Valid words:   {}", puzzle.solution_count());

    if result.reveal {
        println!("\n{}", "Solution (spoiler):".bright_red().bold());
        print!("{}", reveal_listing(&puzzle.solutions_sorted()));
    }
    println!();
}
