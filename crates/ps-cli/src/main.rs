//! CLI frontend for the PopSim food chain simulator.

mod commands;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "popsim",
    about = "PopSim: a five-level food chain simulator",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive terminal view
    Tui {
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// RNG seed for consumption noise (overrides the config file)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Start with consumption noise enabled
        #[arg(long)]
        noise: bool,

        /// Write tracing output to this file
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Run headless for a fixed number of ticks and print the result
    Simulate {
        /// Number of ticks to run (default: 600 = one simulated minute)
        #[arg(short, long, default_value = "600")]
        ticks: u64,

        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// RNG seed for consumption noise (overrides the config file)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Enable consumption noise
        #[arg(long)]
        noise: bool,

        /// Print every rate summary as it is produced
        #[arg(short, long)]
        verbose: bool,

        /// Print the final snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Params {
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Tui {
            config,
            seed,
            noise,
            log_file,
        } => logging::init_file(log_file.as_deref())
            .and_then(|()| commands::tui::run(config.as_deref(), seed, noise)),
        Commands::Simulate {
            ticks,
            config,
            seed,
            noise,
            verbose,
            json,
        } => {
            logging::init_stderr();
            commands::simulate::run(config.as_deref(), ticks, seed, noise, verbose, json)
        }
        Commands::Params { config } => commands::params::run(config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
