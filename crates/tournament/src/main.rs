//! Tournament CLI
//!
//! Register competitors, record results and print standings or pairings.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use swiss_core::{CompetitorId, PairingMode};
use tournament::{
    pairings_table, standings_table, JsonFileStore, RoundReport, Tournament, TournamentConfig,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tournament")]
#[command(about = "Swiss-system tournament tracker", long_about = None)]
struct Cli {
    /// TOML config file
    #[arg(long, default_value = "tournament.toml")]
    config: PathBuf,

    /// Record file, overriding the config's store_path
    #[arg(long)]
    store: Option<PathBuf>,

    /// Pairing mode (bridged, equal-wins-only), overriding the config's pairing_mode
    #[arg(long)]
    mode: Option<PairingMode>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a competitor and print its id
    Register {
        name: String,
    },
    /// Record a match result
    Report {
        winner: CompetitorId,
        loser: CompetitorId,
    },
    /// Print current standings
    Standings {
        #[arg(long)]
        json: bool,
    },
    /// Print pairings for the next round
    Pairings {
        #[arg(long)]
        json: bool,
    },
    /// Print standings and next-round pairings together
    Summary {
        #[arg(long)]
        json: bool,
    },
    /// Print the number of registered competitors
    Count,
    /// Delete all match results
    DeleteMatches,
    /// Delete all competitors (requires no recorded matches)
    DeletePlayers,
    /// Delete all match results and competitors
    Clear,
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = TournamentConfig::load_or_default(&cli.config)?;
    if let Some(store) = cli.store {
        config.store_path = store;
    }
    if let Some(mode) = cli.mode {
        config.pairing_mode = mode;
    }
    init_tracing(&config.log_filter);

    let store = JsonFileStore::new(&config.store_path);
    let mut tournament = Tournament::new(store).with_mode(config.pairing_mode);

    match cli.command {
        Commands::Register { name } => {
            let id = tournament.register_competitor(&name)?;
            println!("{}", id);
        }
        Commands::Report { winner, loser } => {
            tournament
                .record_match(winner, loser)
                .with_context(|| format!("failed to record {} beating {}", winner, loser))?;
        }
        Commands::Standings { json } => {
            let standings = tournament.standings()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&standings)?);
            } else {
                print!("{}", standings_table(&standings));
            }
        }
        Commands::Pairings { json } => {
            let plan = tournament.plan_round()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&plan.pairings)?);
            } else {
                print!("{}", pairings_table(&plan.pairings, &plan.unpaired));
            }
        }
        Commands::Summary { json } => {
            let plan = tournament.plan_round()?;
            let report = RoundReport::new(&config.name, &plan);
            if json {
                println!("{}", report.to_json()?);
            } else {
                print!("{}", report.generate_report());
            }
        }
        Commands::Count => {
            println!("{}", tournament.count_competitors()?);
        }
        Commands::DeleteMatches => tournament.delete_matches()?,
        Commands::DeletePlayers => tournament.delete_competitors()?,
        Commands::Clear => tournament.clear_all()?,
    }

    Ok(())
}
