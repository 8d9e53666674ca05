//! Core inventory module
//!
//! This module contains the inventory store and its capabilities:
//! - `traits` - Reader and writer capabilities collaborators depend on
//! - `inventory` - The store that owns every product in a run
//! - `repository` - Ordered product storage used by the store

pub mod inventory;
pub mod repository;
pub mod traits;

pub use inventory::{Inventory, PRODUCT_ADDED_NOTICE};
pub use repository::ProductRepository;
pub use traits::{InventoryReader, InventoryWriter};
