//! Interactive play mode
//!
//! Text-based game loop on stdin. Command words are reserved; everything
//! else is treated as a guess.

use crate::core::Outcome;
use crate::game::Game;
use crate::output::formatters::{letter_grid, outcome_message, reveal_listing, score_line};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

const COMMANDS_HELP: &str =
    "Commands: 'score', 'found', 'grid', 'reveal', 'restart', 'new', 'quit'";

/// Run the interactive play loop
///
/// # Errors
///
/// Returns an error on I/O failure reading user input, or if a requested
/// new puzzle cannot be generated.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_play<R: Rng>(game: &mut Game<'_>, rng: &mut R) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Pangram Game - Find the Words                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Make words of 4+ letters from the grid below.");
    println!("Every word must use the bracketed center letter.\n");
    println!("{COMMANDS_HELP}\n");

    print_puzzle(game);

    loop {
        let input = get_user_input("Guess")?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "help" | "?" => println!("{COMMANDS_HELP}\n"),
            "grid" | "letters" => print_puzzle(game),
            "score" => {
                println!(
                    "{}\n",
                    score_line(game.score(), game.max_score(), game.rank())
                );
            }
            "found" => {
                let found = game.session().found_sorted();
                if found.is_empty() {
                    println!("Nothing found yet.\n");
                } else {
                    for word in found {
                        println!("  • {word}");
                    }
                    println!();
                }
            }
            "reveal" => {
                println!("{}", "Solution (spoiler):".bright_red().bold());
                print!("{}", reveal_listing(&game.reveal_solution()));
                println!();
            }
            "restart" => {
                game.restart();
                println!("\n🔄 Same puzzle, fresh start!\n");
                print_puzzle(game);
            }
            "new" | "n" => {
                game.new_puzzle(rng).map_err(|e| e.to_string())?;
                println!("\n🔄 New puzzle!\n");
                print_puzzle(game);
            }
            "" => {}
            guess => {
                let outcome = game.submit_guess(guess);
                let message = outcome_message(outcome, game.word_points(guess));

                match outcome {
                    Outcome::Accepted => {
                        println!("{}", message.green().bold());
                        if game.is_complete() {
                            print_completion(game);
                        } else {
                            println!(
                                "{}\n",
                                score_line(game.score(), game.max_score(), game.rank())
                                    .bright_black()
                            );
                        }
                    }
                    Outcome::AlreadyFound => println!("{message}\n"),
                    _ => println!("{}\n", message.red()),
                }
            }
        }
    }
}

fn print_puzzle(game: &Game<'_>) {
    print!("{}", letter_grid(game.puzzle()));
    println!("\n{} valid words to find.", game.puzzle().solution_count());
    println!(
        "{}\n",
        score_line(game.score(), game.max_score(), game.rank())
    );
}

fn print_completion(game: &Game<'_>) {
    println!("\n{}", "═".repeat(62).bright_cyan());
    println!(
        "{}",
        "    🎉 ✨  A L L   W O R D S   F O U N D !  ✨ 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(62).bright_cyan());
    println!(
        "\n  Final {}",
        score_line(game.score(), game.max_score(), game.rank()).bright_white()
    );
    println!("  Type 'new' for another puzzle.\n");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
