//! Headless angling simulation.
//!
//! Loads a scenario, lets a scripted angler play it for a number of turns
//! and prints the narrated log.
mod angler;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use angler::ScriptedAngler;
use angler_content::{ContentFactory, bundled_data_dir};
use angler_runtime::Session;

/// Headless angling simulation
#[derive(Debug, Parser)]
#[command(name = "angler")]
#[command(about = "Run a scripted angler through a scenario", long_about = None)]
#[command(version)]
struct Cli {
    /// Content directory (defaults to the bundled data)
    #[arg(long, env = "ANGLER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Scenario name under `scenarios/`
    #[arg(long, env = "ANGLER_SCENARIO", default_value = "pond")]
    scenario: String,

    /// RNG seed for a reproducible run
    #[arg(long, env = "ANGLER_SEED")]
    seed: Option<u64>,

    /// Number of turns to play
    #[arg(long, env = "ANGLER_TURNS", default_value_t = 100)]
    turns: u64,
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    setup_logging();

    let factory = ContentFactory::new(cli.data_dir.unwrap_or_else(bundled_data_dir));
    let mut builder = Session::builder().content(&factory, &cli.scenario)?;
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }
    let mut session = builder.build()?;
    tracing::info!(
        scenario = %cli.scenario,
        seed = session.seed(),
        data_dir = %factory.data_dir().display(),
        "starting session"
    );

    let mut angler = ScriptedAngler::default();
    let mut printed = 0;
    for _ in 0..cli.turns {
        if session.is_over() {
            break;
        }
        angler.play_turn(&mut session)?;

        for message in session.messages().skip(printed) {
            println!("{}", message);
        }
        printed = session.events().len();
    }

    println!();
    println!(
        "Turns: {}  Caught: {}  Seed: {}",
        session.state().turn.number,
        session.caught().len(),
        session.seed()
    );
    for actor in session.caught() {
        println!("  - {}", actor.name);
    }
    Ok(())
}

/// Logs go to stderr so the narrated log on stdout stays clean.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
