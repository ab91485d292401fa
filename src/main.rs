use std::{fs::File, path::{Path, PathBuf}, sync::Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

use torus_snake::{run_at_speed, term::TermUi, GameState, Level, Outcome, ANIMATION_SPEED};

/// Snake on a 32x24 wrap-around grid. Arrow keys or WASD to steer, q or Esc to quit.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Options {
    /// Level file with the initial snake, direction and walls
    #[arg(long, value_name = "FILE")]
    level: Option<PathBuf>,

    /// Ticks per second
    #[arg(long, default_value_t = ANIMATION_SPEED, value_parser = clap::value_parser!(u32).range(1..=60))]
    speed: u32,

    /// Seed for food placement, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs here (filtered by RUST_LOG, default `info`)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let options = Options::parse();

    if let Some(path) = &options.log_file {
        init_logging(path)?;
    }

    let level = match &options.level {
        Some(path) => Level::load(path)?,
        None => Level::default(),
    };

    let rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut ui = TermUi::open(rng).context("could not set up the terminal")?;
    let mut game = GameState::new(level, &mut ui)?;
    let outcome = run_at_speed(&mut game, &mut ui, options.speed);
    drop(ui);

    match outcome.context("terminal error during the game")? {
        Outcome::GameOver { length, board_full } => {
            println!("GAME OVER");
            if board_full {
                println!("The snake filled the board.");
            }
            println!("Final length: {}", length);
        },
        Outcome::Quit => {},
    }

    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("could not create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
