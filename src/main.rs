use clap::{Parser, Subcommand};
use entry_cache::commands::*;
use entry_cache::core::print_error;
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "entry-cache")]
#[command(about = "Per-selection entry-list caching over a demo dataset")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the two-phase demo pass, building or replaying entry lists
    Run {
        /// Number of records in the synthetic dataset
        #[arg(long, default_value_t = 1000)]
        records: u64,
        /// Cache directory for persisted entry lists
        #[arg(long, default_value = ".entry-cache")]
        cache_dir: PathBuf,
    },
    /// Delete the cached entry lists of the demo selections
    Clear {
        /// Number of records the lists were built against
        #[arg(long, default_value_t = 1000)]
        records: u64,
        /// Cache directory for persisted entry lists
        #[arg(long, default_value = ".entry-cache")]
        cache_dir: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    match cli.command {
        Commands::Run { records, cache_dir } => {
            if let Err(e) = execute_run(records, &cache_dir) {
                print_error(&e.to_string());
                std::process::exit(1);
            }
        }
        Commands::Clear { records, cache_dir } => {
            if let Err(e) = execute_clear(records, &cache_dir) {
                print_error(&e.to_string());
                std::process::exit(1);
            }
        }
    }
}
