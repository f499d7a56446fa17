//! Lineage CLI - Render declared class hierarchies as Mermaid.js class diagrams

mod cli;

use clap::Parser;
use lineage::core::logging::init_logging;

fn main() {
    let cli_args = cli::Cli::parse();

    // Flags left unset fall back to LINEAGE_LOG_LEVEL / LINEAGE_LOG_FORMAT / RUST_LOG
    let log_level = cli_args.log_level.map(|level| level.as_str());
    let log_format = cli_args.log_format.map(|format| format.as_str());
    if let Err(e) = init_logging(log_level, log_format) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let app = cli::LineageApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
