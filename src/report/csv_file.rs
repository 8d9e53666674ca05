//! CSV file report
//!
//! Writes the inventory to a CSV file using the layout in
//! [`csv_format`](crate::io::csv_format).
//!
//! # Best-effort policy
//!
//! A report that cannot be written does not fail the caller. Open, write and
//! flush errors are logged at `error` level and kept as
//! [`CsvReport::last_error`]; `generate_report` itself always returns
//! normally. The file handle is scoped to a single run and closed on every
//! path.

use crate::io::csv_format::write_products_csv;
use crate::report::InventoryReport;
use crate::types::{InventoryError, ProductsView};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// File name used by the entry point when no path is given
pub const DEFAULT_CSV_PATH: &str = "inventario.csv";

/// Report that writes products to a CSV file
#[derive(Debug, Clone)]
pub struct CsvReport {
    path: PathBuf,
    last_error: Option<InventoryError>,
}

impl CsvReport {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvReport {
            path: path.into(),
            last_error: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Error from the most recent run, if it failed
    ///
    /// Cleared by the next successful run.
    pub fn last_error(&self) -> Option<&InventoryError> {
        self.last_error.as_ref()
    }

    /// Create (or truncate) the target file and write the report
    fn write_file(&self, products: &ProductsView) -> Result<(), InventoryError> {
        let file = File::create(&self.path)
            .map_err(|e| InventoryError::file_create(&self.path.display().to_string(), &e))?;
        let mut writer = BufWriter::new(file);
        write_products_csv(products, &mut writer)
    }
}

impl InventoryReport for CsvReport {
    fn generate_report(&mut self, products: &ProductsView) {
        debug!(path = %self.path.display(), products = products.len(), "writing CSV report");

        match self.write_file(products) {
            Ok(()) => self.last_error = None,
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "CSV report failed");
                self.last_error = Some(e);
            }
        }
    }
}
