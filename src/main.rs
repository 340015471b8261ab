//! Tebak Kata - CLI
//!
//! Lebaran word-guessing game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tebak_kata::{
    commands::{run_autoplay, run_simple},
    core::WordList,
    game::{GameController, RngSource, SystemClock},
    output::{print_autoplay_result, print_word_list},
    wordlists::{
        WORDS,
        loader::{entries_from_slice, load_from_file},
    },
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "tebak_kata",
    about = "Lebaran word-guessing game: reveal each hidden word letter by letter",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'embedded' (default) or path to a WORD|hint|emoji file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    words: String,

    /// Seed for hint randomness (random each run if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Print the word list in play order
    Words,

    /// Solve every word using hints only
    Autoplay,
}

/// Load the word list based on the -w flag
fn load_words(source: &str) -> Result<WordList> {
    let words = match source {
        "embedded" => entries_from_slice(WORDS).context("embedded word list is empty")?,
        path => load_from_file(path).with_context(|| format!("loading word list {path}"))?,
    };
    tracing::info!(source, count = words.len(), "word list loaded");
    Ok(words)
}

fn main() -> Result<()> {
    // Logs go to stderr; RUST_LOG opts in beyond errors
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let words = load_words(&cli.words)?;
    let game = GameController::with_sources(
        words,
        RngSource::from_seed_option(cli.seed),
        SystemClock::new(),
    );

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(game),
        Commands::Simple => {
            let mut game = game;
            run_simple(&mut game).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Words => {
            print_word_list(game.words());
            Ok(())
        }
        Commands::Autoplay => run_autoplay_command(game),
    }
}

fn run_play_command(game: GameController) -> Result<()> {
    use tebak_kata::interactive::{App, run_tui};

    let app = App::new(game);
    run_tui(app)
}

fn run_autoplay_command(mut game: GameController) -> Result<()> {
    println!("Autoplaying {} words with hints only...", game.words().len());
    let result = run_autoplay(&mut game).map_err(|e| anyhow::anyhow!(e))?;
    print_autoplay_result(&result);
    Ok(())
}
