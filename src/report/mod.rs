//! Report rendering module
//!
//! This module defines the report abstraction that turns the inventory's
//! product sequence into an external representation. Implementations can be
//! swapped freely behind the [`Printer`](crate::printer::Printer).
//!
//! # Variants
//!
//! - **Console**: one details line per product on a writer (stdout by default)
//! - **CSV**: header plus one row per product in a file, best effort

use crate::types::ProductsView;

pub mod console;
pub mod csv_file;

pub use console::ConsoleReport;
pub use csv_file::{CsvReport, DEFAULT_CSV_PATH};

/// Report trait for rendering a product sequence
///
/// Implementations receive whatever the reader currently returns and must
/// accept an empty sequence. Failures are handled inside the report and are
/// not returned to the caller.
pub trait InventoryReport {
    /// Render the products in sequence order
    fn generate_report(&mut self, products: &ProductsView);
}

impl<R: InventoryReport + ?Sized> InventoryReport for Box<R> {
    fn generate_report(&mut self, products: &ProductsView) {
        (**self).generate_report(products);
    }
}
