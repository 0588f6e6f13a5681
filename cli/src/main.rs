//! Terminal frontend for the campo rules engine.
//!
//! Only the thin glue lives here: argument parsing, seeding, the input loop,
//! and end-of-game presentation. All rules belong to `campo-core`.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use campo_core::GameConfig;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};

mod play;

#[derive(Parser, Debug)]
#[command(name = "campo", version, about = "Single-player grid-mining puzzle")]
struct Args {
    /// Board width and height
    #[arg(short, long, default_value_t = 10)]
    size: u8,

    /// Number of mines, which is also the flag budget
    #[arg(short, long, default_value_t = 10)]
    mines: u16,

    /// Force a seed instead of random
    #[arg(long)]
    seed: Option<u64>,

    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(args.verbose.log_level_filter().to_string())
        .init();

    let seed = match args.seed {
        Some(seed) => seed,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("system clock is before the unix epoch")?
            .as_nanos() as u64,
    };
    tracing::debug!(seed, "seeding mine generator");

    let config = GameConfig::new(args.size, args.mines);
    play::run(config, seed)
}
