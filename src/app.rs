//! Entry point wiring
//!
//! Builds one inventory, seeds it with two products and prints it twice:
//! first to the console, then to a CSV file.

use crate::core::{Inventory, InventoryReader, InventoryWriter};
use crate::io::SharedOutput;
use crate::printer::Printer;
use crate::report::{ConsoleReport, CsvReport, DEFAULT_CSV_PATH};
use crate::types::{Price, Quantity};
use std::path::PathBuf;
use tracing::info;

/// Products added on every run, in order
pub const SEED_PRODUCTS: [(&str, Quantity, Price); 2] =
    [("Laptop", 5, 999.99), ("Monitor", 10, 199.99)];

/// Runtime configuration for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Target of the CSV report
    pub csv_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
        }
    }
}

/// Run the inventory demo
///
/// `output` receives both the store's `Product added.` notices and the
/// console report. A CSV failure is logged by the report and does not stop
/// the run.
pub fn run(config: &AppConfig, output: SharedOutput) {
    let inventory = Inventory::with_output(output.clone());
    let writer: &dyn InventoryWriter = &inventory;
    let reader: &dyn InventoryReader = &inventory;

    for (name, quantity, price) in SEED_PRODUCTS {
        writer.add_product(name, quantity, price);
    }

    let mut printer = Printer::new(ConsoleReport::new(output), reader);
    printer.print();

    let mut printer = Printer::new(CsvReport::new(&config.csv_path), reader);
    printer.print();

    info!(
        products = inventory.len(),
        csv = %config.csv_path.display(),
        "inventory reports generated"
    );
}
