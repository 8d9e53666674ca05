//! Inventory Report Library
//! # Overview
//!
//! This library keeps a small in-memory product inventory and renders it
//! through interchangeable reports (console text, CSV file).
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Product, ProductsView, InventoryError)
//! - [`core`] - The inventory store:
//!   - [`core::traits`] - Reader and writer capabilities
//!   - [`core::inventory`] - Store owning every product in a run
//!   - [`core::repository`] - Ordered product storage
//! - [`report`] - Report trait with console and CSV implementations
//! - [`printer`] - Binds a reader to a report
//! - [`io`] - Price formatting, CSV layout and shared output
//! - [`app`] - Entry point wiring
//! - [`cli`] - CLI arguments parsing
//!
//! # Formatting
//!
//! Prices are rendered two ways:
//!
//! - **Console**: natural form, `Product: Laptop, Quantity: 5, Price: $999.99`
//! - **CSV**: exactly two decimals, `Keyboard,8,75.00`

// Module declarations
pub mod app;
pub mod cli;
pub mod core;
pub mod io;
pub mod printer;
pub mod report;
pub mod types;

pub use app::{run, AppConfig};
pub use crate::core::{Inventory, InventoryReader, InventoryWriter, ProductRepository};
pub use printer::Printer;
pub use report::{ConsoleReport, CsvReport, InventoryReport};
pub use types::{InventoryError, Price, Product, ProductsView, Quantity};
