//! Pangram Game - CLI
//!
//! Spelling-Bee-style pangram word game: nine letters, one mandatory
//! center letter, find every word the puzzle accepts.

use anyhow::Result;
use clap::{Parser, Subcommand};
use pangram_game::{
    commands::{ShowConfig, run_play, show_puzzle},
    core::BudgetPolicy,
    game::{Game, GameConfig, RankTable, ScoringPolicy},
    output::print_show_result,
    wordlists::{Dictionary, loader::load_from_file},
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(
    name = "pangram_game",
    about = "Spelling-Bee-style pangram word game (nine letters, one center)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or a path to a file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Letter reuse: bounded (default, each letter as often as it appears
    /// in the base word) or unlimited
    #[arg(short, long, global = true, default_value = "bounded")]
    policy: String,

    /// Scoring: length (default, point per letter) or count (point per word)
    #[arg(long, global = true, default_value = "length")]
    scoring: String,

    /// Seed for reproducible puzzle generation
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive play mode (default)
    Play,

    /// Generate a puzzle and print it without playing
    Show {
        /// Also print the full solution list (spoiler)
        #[arg(short, long)]
        reveal: bool,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(mode: &str) -> Result<Dictionary> {
    match mode {
        "embedded" => Ok(Dictionary::embedded()),
        path => Ok(load_from_file(path)?),
    }
}

/// Seeded RNG if requested, OS-seeded otherwise
fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;
    let mut rng = make_rng(cli.seed);

    let config = GameConfig {
        policy: BudgetPolicy::from_name(&cli.policy),
        scoring: ScoringPolicy::from_name(&cli.scoring),
        ranks: RankTable::default(),
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let mut game = Game::new(&dictionary, config, &mut rng)?;
            run_play(&mut game, &mut rng).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Show { reveal } => {
            let show_config = ShowConfig {
                policy: config.policy,
                reveal,
            };
            let result = show_puzzle(&show_config, &dictionary, &mut rng)?;
            print_show_result(&result);
            Ok(())
        }
    }
}
