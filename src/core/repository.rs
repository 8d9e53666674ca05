//! Ordered product storage
//!
//! `ProductRepository` only stores products and hands them back; it knows
//! nothing about notices or reports. Insertion order is preserved and no
//! deduplication is performed.

use crate::types::{Product, ProductsView};
use std::rc::Rc;

/// Ordered, append-only list of products
#[derive(Debug, Default)]
pub struct ProductRepository {
    products: Vec<Rc<Product>>,
}

impl ProductRepository {
    pub fn new() -> Self {
        ProductRepository {
            products: Vec::new(),
        }
    }

    /// Append a product to the end of the list
    pub fn add(&mut self, product: Product) {
        self.products.push(Rc::new(product));
    }

    /// Read-only view over every stored product
    ///
    /// The view holds shared handles to the stored products, so setter calls
    /// made through it are visible here.
    pub fn find_all(&self) -> ProductsView {
        ProductsView::new(self.products.clone())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
