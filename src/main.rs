//! Wordle - CLI
//!
//! Plays one game in the terminal. Every option has a default, so a bare
//! invocation starts a standard five-letter, six-guess game.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::{Path, PathBuf};
use wordle_game::{
    commands::{run_check, run_play},
    output::ConsoleRenderer,
    session::{GameConfig, Session},
    wordlists::WordList,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden word with per-letter feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of letters in the hidden word
    #[arg(short = 'l', long, global = true, default_value_t = 5)]
    length: usize,

    /// Number of guesses before the game is lost
    #[arg(short = 'g', long, global = true, default_value_t = 6)]
    guesses: usize,

    /// Newline-delimited word list (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for picking the hidden word
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one interactive game (default)
    Play,

    /// Score a single guess against a goal word
    Check {
        /// The guessed word
        guess: String,

        /// The goal word
        goal: String,
    },
}

/// Load the word list based on the -w flag
fn load_words(path: Option<&Path>, word_length: usize) -> Result<WordList> {
    match path {
        Some(path) => WordList::load(path, word_length)
            .with_context(|| format!("could not load word list {}", path.display())),
        None => WordList::embedded(word_length).context("built-in word list unusable"),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut cli = Cli::parse();

    match cli.command.take().unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&cli),
        Commands::Check { guess, goal } => run_check_command(&guess, &goal),
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    let config = GameConfig::new(cli.length, cli.guesses).context("invalid game settings")?;
    let words = load_words(cli.wordlist.as_deref(), config.word_length)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut session = Session::new(&words, config, &mut rng)?;

    let mut renderer = ConsoleRenderer::stdout();
    run_play(&mut session, io::stdin().lock(), &mut renderer)?;
    Ok(())
}

fn run_check_command(guess: &str, goal: &str) -> Result<()> {
    let mut renderer = ConsoleRenderer::stdout();
    run_check(guess, goal, &mut renderer)?;
    Ok(())
}
