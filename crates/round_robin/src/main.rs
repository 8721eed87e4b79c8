//! Round-robin CLI
//!
//! Print the pairings for every round of a round-robin tournament.

use anyhow::Context;
use clap::Parser;
use round_robin::Scheduler;
use tracing_subscriber::EnvFilter;

/// Field size used when no count is given
const DEFAULT_PLAYERS: u32 = 8;

#[derive(Parser)]
#[command(
    name = "round_robin",
    about = "Schedule a round-robin tournament where everyone plays everyone once",
    version
)]
struct Cli {
    /// Number of players (odd counts add a bye, so one player sits out each round)
    #[arg(default_value_t = DEFAULT_PLAYERS)]
    players: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("round_robin=warn")),
        )
        .init();

    let cli = Cli::parse();

    let scheduler = Scheduler::new(cli.players)
        .with_context(|| format!("cannot schedule {} players", cli.players))?;
    scheduler.schedule().print_report();

    Ok(())
}
