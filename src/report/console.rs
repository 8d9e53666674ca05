//! Console report
//!
//! Writes `Product::details()` for each product, one per line.

use crate::report::InventoryReport;
use crate::types::ProductsView;
use std::io::{self, Stdout, Write};
use tracing::warn;

/// Report that prints product details line by line
#[derive(Debug)]
pub struct ConsoleReport<W: Write> {
    output: W,
}

impl ConsoleReport<Stdout> {
    /// Console report over the process's standard output
    pub fn stdout() -> Self {
        ConsoleReport::new(io::stdout())
    }
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(output: W) -> Self {
        ConsoleReport { output }
    }

    /// Consume the report and return its writer
    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> InventoryReport for ConsoleReport<W> {
    fn generate_report(&mut self, products: &ProductsView) {
        for product in products {
            if let Err(e) = writeln!(self.output, "{}", product.details()) {
                warn!(error = %e, product = product.name(), "failed to write console report line");
                return;
            }
        }
        if let Err(e) = self.output.flush() {
            warn!(error = %e, "failed to flush console report");
        }
    }
}
