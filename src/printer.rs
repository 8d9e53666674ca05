//! Report printer
//!
//! The `Printer` binds one reader capability to one report. It knows nothing
//! about adding products or about the concrete store.

use crate::core::InventoryReader;
use crate::report::InventoryReport;
use tracing::debug;

/// Orchestrates a report over the products a reader returns
pub struct Printer<'a, R: InventoryReport> {
    report: R,
    reader: &'a dyn InventoryReader,
}

impl<'a, R: InventoryReport> Printer<'a, R> {
    pub fn new(report: R, reader: &'a dyn InventoryReader) -> Self {
        Printer { report, reader }
    }

    /// Fetch the current products and hand them to the report unmodified
    ///
    /// Every call re-reads the store, so changes made between calls show up.
    pub fn print(&mut self) {
        let products = self.reader.products();
        debug!(products = products.len(), "printing inventory report");
        self.report.generate_report(&products);
    }

    pub fn report(&self) -> &R {
        &self.report
    }

    pub fn report_mut(&mut self) -> &mut R {
        &mut self.report
    }

    pub fn into_report(self) -> R {
        self.report
    }
}
