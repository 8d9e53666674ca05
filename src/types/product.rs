//! Product type for the inventory
//!
//! A product is one inventory line: a fixed name plus a quantity and a price
//! that can be overwritten after creation.

use crate::io::price::natural_price;
use std::cell::Cell;
use std::fmt;

/// Product quantity
///
/// Signed so that negative stock levels are representable; nothing rejects them.
pub type Quantity = i32;

/// Unit price
pub type Price = f64;

/// One inventory line item
///
/// The name is fixed at construction. Quantity and price live in `Cell`s so
/// that a product handed out through a read-only view can still be updated
/// through its own setters, and the update is seen by every holder.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    quantity: Cell<Quantity>,
    price: Cell<Price>,
}

impl Product {
    /// Create a new product
    ///
    /// Always succeeds: empty names and zero or negative values are accepted.
    pub fn new(name: impl Into<String>, quantity: Quantity, price: Price) -> Self {
        Product {
            name: name.into(),
            quantity: Cell::new(quantity),
            price: Cell::new(price),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity.get()
    }

    pub fn price(&self) -> Price {
        self.price.get()
    }

    pub fn set_quantity(&self, quantity: Quantity) {
        self.quantity.set(quantity);
    }

    pub fn set_price(&self, price: Price) {
        self.price.set(price);
    }

    /// Human-readable summary line
    ///
    /// Format: `Product: {name}, Quantity: {quantity}, Price: ${price}`, with
    /// the price in its natural form (`75.0`, `999.99`) rather than fixed
    /// decimals.
    pub fn details(&self) -> String {
        format!(
            "Product: {}, Quantity: {}, Price: ${}",
            self.name,
            self.quantity(),
            natural_price(self.price())
        )
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.details())
    }
}
