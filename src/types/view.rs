//! Read-only view over the inventory's product sequence
//!
//! A `ProductsView` is a snapshot of the store's ordered sequence that shares
//! its product elements with the store. Elements can be read and updated via
//! their own setters; the sequence itself cannot be grown or shrunk. The
//! structural mutators exist only to reject the attempt with
//! [`InventoryError::UnsupportedOperation`].

use crate::types::{InventoryError, Product};
use std::rc::Rc;

/// Read-only ordered sequence of products
#[derive(Debug, Clone, Default)]
pub struct ProductsView {
    items: Vec<Rc<Product>>,
}

impl ProductsView {
    pub(crate) fn new(items: Vec<Rc<Product>>) -> Self {
        ProductsView { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.items.get(index).map(shared_product)
    }

    /// Iterate over the products in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Product> + '_ {
        self.items.iter().map(shared_product)
    }

    /// Always fails: the view cannot be extended
    pub fn push(&mut self, _product: Product) -> Result<(), InventoryError> {
        Err(InventoryError::unsupported_operation("push"))
    }

    /// Always fails: the view cannot be extended
    pub fn insert(&mut self, _index: usize, _product: Product) -> Result<(), InventoryError> {
        Err(InventoryError::unsupported_operation("insert"))
    }

    /// Always fails: elements cannot be removed from the view
    pub fn remove(&mut self, _index: usize) -> Result<Product, InventoryError> {
        Err(InventoryError::unsupported_operation("remove"))
    }

    /// Always fails: the view cannot be emptied
    pub fn clear(&mut self) -> Result<(), InventoryError> {
        Err(InventoryError::unsupported_operation("clear"))
    }
}

impl FromIterator<Product> for ProductsView {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        ProductsView::new(iter.into_iter().map(Rc::new).collect())
    }
}

impl<'a> IntoIterator for &'a ProductsView {
    type Item = &'a Product;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, Rc<Product>>, fn(&Rc<Product>) -> &Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.items
            .iter()
            .map(shared_product as fn(&Rc<Product>) -> &Product)
    }
}

fn shared_product(item: &Rc<Product>) -> &Product {
    item
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_view() -> ProductsView {
        vec![
            Product::new("Laptop", 5, 999.99),
            Product::new("Monitor", 10, 199.99),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_view_preserves_order() {
        let view = sample_view();
        let names: Vec<&str> = view.iter().map(Product::name).collect();
        assert_eq!(names, vec!["Laptop", "Monitor"]);
        assert_eq!(view.len(), 2);
        assert!(!view.is_empty());
    }

    #[test]
    fn test_empty_view() {
        let view = ProductsView::default();
        assert!(view.is_empty());
        assert!(view.get(0).is_none());
        assert_eq!(view.iter().count(), 0);
    }

    #[test]
    fn test_structural_mutations_rejected() {
        let mut view = sample_view();

        assert!(matches!(
            view.push(Product::new("Mouse", 1, 1.0)),
            Err(InventoryError::UnsupportedOperation { .. })
        ));
        assert!(matches!(
            view.insert(0, Product::new("Mouse", 1, 1.0)),
            Err(InventoryError::UnsupportedOperation { .. })
        ));
        assert!(matches!(
            view.remove(0),
            Err(InventoryError::UnsupportedOperation { .. })
        ));
        assert!(matches!(
            view.clear(),
            Err(InventoryError::UnsupportedOperation { .. })
        ));

        // Nothing changed
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_element_setters_allowed_through_view() {
        let view = sample_view();
        let laptop = view.get(0).unwrap();
        laptop.set_quantity(1);
        assert_eq!(view.get(0).unwrap().quantity(), 1);
    }

    #[test]
    fn test_cloned_view_shares_elements() {
        let view = sample_view();
        let copy = view.clone();
        copy.get(1).unwrap().set_price(99.5);
        assert_eq!(view.get(1).unwrap().price(), 99.5);
    }

    #[test]
    fn test_ref_into_iterator() {
        let view = sample_view();
        let mut total = 0;
        for product in &view {
            total += product.quantity();
        }
        assert_eq!(total, 15);
    }
}
