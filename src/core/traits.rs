//! Capability traits over the inventory store
//!
//! The store is split into two narrow capabilities so collaborators depend
//! only on what they use: a writer that can add products, and a reader that
//! can list them. Both take `&self`, so one store can be lent out as a
//! writer and a reader at the same time.

use crate::types::{Price, ProductsView, Quantity};

/// Write-only capability: add products to the inventory
pub trait InventoryWriter {
    /// Construct a product from its parts and append it
    ///
    /// No validation is performed on any of the inputs.
    fn add_product(&self, name: &str, quantity: Quantity, price: Price);
}

/// Read-only capability: list the inventory's products
pub trait InventoryReader {
    /// Current products in insertion order
    ///
    /// The returned view rejects structural mutation but shares its elements
    /// with the store.
    fn products(&self) -> ProductsView;
}
