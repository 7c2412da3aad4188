//! Command-line text adventure built on `grotto-core`.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "grotto",
    about = "Grotto: a small text adventure",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log more detail to stderr (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the demo map, reading commands from stdin
    Play {
        /// Room to start in (default: Kitchen)
        #[arg(short, long)]
        start: Option<String>,

        /// Defeated enemies needed to win (default: every enemy on the map)
        #[arg(short, long)]
        goal: Option<u64>,

        /// Reject repeated direction labels when building the map
        #[arg(long)]
        strict: bool,
    },

    /// Print the demo map
    Map {
        /// Print the map as JSON
        #[arg(long)]
        json: bool,

        /// Reject repeated direction labels when building the map
        #[arg(long)]
        strict: bool,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "grotto_core=info,grotto_cli=info,warn",
        _ => "grotto_core=debug,grotto_cli=debug,info",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            start,
            goal,
            strict,
        } => commands::play::run(start.as_deref(), strict, goal),
        Commands::Map { json, strict } => commands::map::run(json, strict),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
