//! Terminal Tetris runner (default binary).
//!
//! Reads keys through crossterm and draws with the framebuffer renderer.
//! Logging is off unless a log file is given, since the terminal belongs to
//! the game.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

use term_tetris::core::Game;
use term_tetris::engine::Session;
use term_tetris::input::CrosstermInput;
use term_tetris::term::TerminalRenderer;

#[derive(Debug, Parser)]
#[command(name = "term-tetris", version, about = "Falling-block puzzle game for the terminal")]
struct Cli {
    #[arg(long, env = "TETRIS_SEED", help = "Seed for the piece sequence (random when absent)")]
    seed: Option<u64>,

    #[arg(long, env = "TETRIS_LOG_FILE", help = "Write logs to this file")]
    log_file: Option<PathBuf>,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v = INFO, -vv = DEBUG, -vvv = TRACE)")]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(log_level(cli.verbose))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let game = match cli.seed {
        Some(seed) => Game::new(seed),
        None => Game::from_entropy(),
    };
    tracing::info!(seed = ?cli.seed, "starting");

    let mut session = Session::new(game, TerminalRenderer::new(), CrosstermInput::new());
    let score = session.run()?;

    println!("Final score: {score}");
    Ok(())
}
