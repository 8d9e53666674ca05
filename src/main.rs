//! Inventory Report CLI
//!
//! Seeds an in-memory inventory with two products, prints it to stdout and
//! writes it to a CSV file.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --csv reports/stock.csv
//! ```
//!
//! Logs go to stderr so stdout carries only the notices and the console
//! report.
//!
//! # Exit Codes
//!
//! - 0: Always, including when the CSV report could not be written
//! - 2: Invalid arguments (reported by clap)

use inventory_report::cli;
use inventory_report::io::SharedOutput;
use tracing::Level;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::WARN)
        .with_target(false)
        .init();

    let args = cli::parse_args();
    let config = args.to_app_config();

    inventory_report::run(&config, SharedOutput::stdout());
}
