//! I/O module
//!
//! Handles output formatting and sinks.
//!
//! # Components
//!
//! - `csv_format` - CSV layout of the inventory report (header, row serialization)
//! - `price` - Price formatting for the console and CSV reports
//! - `output` - Shared output sink for notices and console reports

pub mod csv_format;
pub mod output;
pub mod price;

pub use csv_format::{write_products_csv, CsvRow, CSV_HEADER};
pub use output::SharedOutput;
pub use price::{natural_price, two_decimal_price};
