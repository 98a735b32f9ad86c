//! Console high-low game.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use hilo::{Console, Game, GameOptions, InvalidPredictionPolicy};

/// Guess whether the next card is higher, lower, or the same.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the shuffle (defaults to the current time).
    #[arg(long)]
    seed: Option<u64>,
    /// Ask again on unrecognized input instead of scoring it as wrong.
    #[arg(long)]
    strict: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(time_seed);
    log::debug!("shuffling with seed {seed}");

    let policy = if args.strict {
        InvalidPredictionPolicy::Reprompt
    } else {
        InvalidPredictionPolicy::CountAsIncorrect
    };
    let options = GameOptions::default().with_invalid_prediction(policy);
    let mut game = Game::new(options, seed);

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    let summary = console.play(&mut game)?;
    log::info!("{summary:?}");

    Ok(())
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}
