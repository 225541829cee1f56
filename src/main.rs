//! Page table simulator - Main Entry Point
//!
//! Usage: rust-page-table [OPTIONS] --refs <FILE>
//!
//! Reads the replacement policy, page count and physical frames from the
//! config file, then resolves every reference in the trace and prints the
//! physical address with fault (F) and write-back (B) markers.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{info, LevelFilter};

use page_table_sim::constants::DEFAULT_CONFIG_PATH;
use page_table_sim::io::{read_trace, Config};
use page_table_sim::report::simulate;
use page_table_sim::SimError;

/// Command-line configuration
#[derive(Parser, Debug)]
#[command(name = "rust-page-table")]
#[command(about = "Simulates a page table with FIFO or CLOCK page replacement")]
#[command(version)]
struct Cli {
    /// Memory reference trace, one '<hex address> <R|W>' per line
    #[arg(short, long, value_name = "FILE")]
    refs: PathBuf,

    /// Simulation config: policy, page count, hex frame list
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Print the page table before the run and after every reference
    #[arg(short, long)]
    debug: bool,

    /// Log faults and evictions to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    // Run the simulation and handle any errors
    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Main logic separated from main() for cleaner error handling
fn run(cli: &Cli) -> Result<(), SimError> {
    // Step 1: Load the simulation parameters
    let config = Config::from_file(&cli.config)?;
    info!("config loaded from {}", cli.config.display());

    // Step 2: Decode the reference trace
    let refs = read_trace(&cli.refs)?;
    info!("{} references read from {}", refs.len(), cli.refs.display());

    // Step 3: Resolve every reference and report
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    simulate(&config, &refs, cli.debug, &mut out)?;
    out.flush()?;

    Ok(())
}
