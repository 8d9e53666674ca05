//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `product`: the inventory line item
//! - `view`: read-only view over the product sequence
//! - `error`: Error types for the inventory reporter

pub mod error;
pub mod product;
pub mod view;

pub use error::InventoryError;
pub use product::{Price, Product, Quantity};
pub use view::ProductsView;
