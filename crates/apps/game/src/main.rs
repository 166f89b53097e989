use anyhow::Result;
use clap::Parser;
use game::{run, GameConfig};
use puzzle::{Difficulty, Game};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "cube-views")]
#[command(about = "Pick the right 2D view of a cube cluster", long_about = None)]
struct Args {
    /// Config file (defaults to ./cube-views.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Difficulty: easy (3-5 cubes) or hard (7-10 cubes)
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many rounds
    #[arg(long)]
    rounds: Option<u32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Directives for the binary and both library crates at one level
fn default_filter(level: tracing::Level) -> String {
    format!("cube_views={level},game={level},puzzle={level}")
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they stay out of the board
    let log_level = args.log_level.parse().unwrap_or(tracing::Level::WARN);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut config = GameConfig::load(args.config.as_deref())?;
    if let Some(difficulty) = args.difficulty {
        config.puzzle.difficulty = difficulty;
    }
    tracing::info!(difficulty = %config.puzzle.difficulty, seed = ?args.seed, "starting session");

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut game = Game::new(config.puzzle.clone(), rng)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    run(
        &mut game,
        &config.display,
        args.rounds,
        stdin.lock(),
        &mut stdout,
    )?;

    Ok(())
}
