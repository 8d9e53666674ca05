use crate::app::AppConfig;
use crate::report::DEFAULT_CSV_PATH;
use clap::Parser;
use std::path::PathBuf;

/// Seed an in-memory inventory and print it to the console and a CSV file
#[derive(Parser, Debug)]
#[command(name = "inventory-report", version)]
#[command(about = "Seed an in-memory inventory and print it to the console and a CSV file", long_about = None)]
pub struct CliArgs {
    /// Path of the CSV report to write
    #[arg(
        long = "csv",
        value_name = "PATH",
        default_value = DEFAULT_CSV_PATH,
        help = "Path of the CSV report (created or truncated)"
    )]
    pub csv_path: PathBuf,
}

impl CliArgs {
    /// Create an AppConfig from CLI arguments
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            csv_path: self.csv_path.clone(),
        }
    }
}
