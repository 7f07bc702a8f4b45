//! Console entry point for the two demos.

use std::io;
use std::num::NonZeroU16;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use treeheap::console::Console;
use treeheap::lineup::{self, LineupConfig};
use treeheap::madlibs;

/// Data structure demos: a word tree for mad libs and a popularity heap for a festival lineup
#[derive(Parser, Debug)]
#[command(name = "treeheap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The demo to run
    #[command(subcommand)]
    command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fill a story with your own words, stored in a binary search tree
    Madlibs,
    /// Organize a festival lineup with a max-heap
    Lineup(LineupArgs),
}

#[derive(Args, Debug)]
struct LineupArgs {
    /// Seed for the randomly rated bands (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// How many randomly rated bands to schedule
    #[arg(long, default_value_t = 5)]
    random_bands: usize,

    /// Exclusive upper bound on generated popularity
    #[arg(long, default_value_t = lineup::DEFAULT_MAX_POPULARITY)]
    max_popularity: NonZeroU16,
}

impl LineupArgs {
    fn config(&self) -> LineupConfig {
        LineupConfig {
            random_bands: self.random_bands,
            max_popularity: self.max_popularity,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they don't land in the middle of a prompt.
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());

    match cli.command {
        Command::Madlibs => madlibs::run(&mut console).context("mad libs session failed")?,
        Command::Lineup(args) => {
            info!(seed = ?args.seed, "starting lineup");
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            lineup::run(&mut console, &mut rng, &args.config())
                .context("lineup session failed")?;
        }
    }

    Ok(())
}
