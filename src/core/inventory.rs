//! Inventory store
//!
//! This module provides the `Inventory` struct, the single owner of every
//! product in a run. It is constructed explicitly and lent out to
//! collaborators through the [`InventoryWriter`] and [`InventoryReader`]
//! capabilities, never as the concrete type.
//!
//! The Inventory is responsible for:
//! - Appending products in call order
//! - Writing a `Product added.` notice for every add
//! - Handing out read-only views of the current product sequence
//!
//! State lives behind a `RefCell`, so a writer and a reader borrowed from the
//! same store can be held at once. The store is `!Sync` and meant for a
//! single thread.

use crate::core::repository::ProductRepository;
use crate::core::traits::{InventoryReader, InventoryWriter};
use crate::types::{Price, Product, ProductsView, Quantity};
use std::cell::RefCell;
use std::io::{self, Write};
use tracing::{debug, warn};

/// Confirmation line written after every add
pub const PRODUCT_ADDED_NOTICE: &str = "Product added.";

/// Owner of the ordered product collection
pub struct Inventory {
    repository: RefCell<ProductRepository>,
    notices: RefCell<Box<dyn Write>>,
}

impl Inventory {
    /// Create an empty inventory that writes its notices to stdout
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }

    /// Create an empty inventory that writes its notices to `output`
    pub fn with_output(output: impl Write + 'static) -> Self {
        Inventory {
            repository: RefCell::new(ProductRepository::new()),
            notices: RefCell::new(Box::new(output)),
        }
    }

    /// Append an already-built product
    ///
    /// Like [`InventoryWriter::add_product`], writes the `Product added.` notice.
    pub fn add(&self, product: Product) {
        debug!(
            name = product.name(),
            quantity = product.quantity(),
            price = product.price(),
            "adding product"
        );
        self.repository.borrow_mut().add(product);
        self.notify_added();
    }

    pub fn len(&self) -> usize {
        self.repository.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.repository.borrow().is_empty()
    }

    fn notify_added(&self) {
        let mut notices = self.notices.borrow_mut();
        if let Err(e) = writeln!(notices, "{}", PRODUCT_ADDED_NOTICE) {
            warn!(error = %e, "failed to write product notice");
        }
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Inventory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inventory")
            .field("repository", &self.repository)
            .finish_non_exhaustive()
    }
}

impl InventoryWriter for Inventory {
    fn add_product(&self, name: &str, quantity: Quantity, price: Price) {
        self.add(Product::new(name, quantity, price));
    }
}

impl InventoryReader for Inventory {
    fn products(&self) -> ProductsView {
        self.repository.borrow().find_all()
    }
}
