//! CSV format handling for inventory reports
//!
//! This module centralizes the CSV layout of the inventory report:
//! - `CsvRow` structure for serialization
//! - Header and row output via `write_products_csv`
//!
//! Writing targets any `Write`, so the layout can be tested without touching
//! the filesystem.
//!
//! # Layout
//!
//! ```text
//! Name,Quantity,Price
//! Laptop,5,999.99
//! ```
//!
//! Fields are never quoted. A name containing a comma or a line break will
//! shift or split its row.

use crate::io::price::two_decimal_price;
use crate::types::{InventoryError, Product, ProductsView, Quantity};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::Serialize;
use std::io::Write;

/// Header columns of the inventory CSV
pub const CSV_HEADER: [&str; 3] = ["Name", "Quantity", "Price"];

/// One data row of the inventory CSV
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CsvRow<'a> {
    pub name: &'a str,
    pub quantity: Quantity,
    /// Price already rendered with two decimals
    pub price: String,
}

impl<'a> From<&'a Product> for CsvRow<'a> {
    fn from(product: &'a Product) -> Self {
        CsvRow {
            name: product.name(),
            quantity: product.quantity(),
            price: two_decimal_price(product.price()),
        }
    }
}

/// Write products to CSV format
///
/// Writes the header followed by one row per product, in sequence order.
/// The header is written even when there are no products.
///
/// # Arguments
///
/// * `products` - The products to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(InventoryError)` if a write or flush error occurred
pub fn write_products_csv(
    products: &ProductsView,
    output: &mut dyn Write,
) -> Result<(), InventoryError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(output);

    writer.write_record(CSV_HEADER)?;

    for product in products {
        writer.serialize(CsvRow::from(product))?;
    }

    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn render(products: Vec<Product>) -> String {
        let view: ProductsView = products.into_iter().collect();
        let mut output = Vec::new();
        write_products_csv(&view, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[rstest]
    #[case::empty(vec![], "Name,Quantity,Price\n")]
    #[case::single_product(
        vec![Product::new("Laptop", 5, 999.99)],
        "Name,Quantity,Price\nLaptop,5,999.99\n"
    )]
    #[case::multiple_products_in_order(
        vec![
            Product::new("Laptop", 5, 999.99),
            Product::new("Mouse", 10, 25.50),
            Product::new("Keyboard", 8, 75.00),
        ],
        "Name,Quantity,Price\nLaptop,5,999.99\nMouse,10,25.50\nKeyboard,8,75.00\n"
    )]
    #[case::zero_quantity(
        vec![Product::new("OutOfStock", 0, 50.00)],
        "Name,Quantity,Price\nOutOfStock,0,50.00\n"
    )]
    #[case::zero_price(
        vec![Product::new("Free", 5, 0.0)],
        "Name,Quantity,Price\nFree,5,0.00\n"
    )]
    #[case::empty_name(
        vec![Product::new("", 3, 100.0)],
        "Name,Quantity,Price\n,3,100.00\n"
    )]
    #[case::rounded_price(
        vec![Product::new("TestProduct", 1, 123.456)],
        "Name,Quantity,Price\nTestProduct,1,123.46\n"
    )]
    #[case::negative_values(
        vec![Product::new("Returned", -2, -9.5)],
        "Name,Quantity,Price\nReturned,-2,-9.50\n"
    )]
    fn test_write_products_csv(#[case] products: Vec<Product>, #[case] expected: &str) {
        assert_eq!(render(products), expected);
    }

    #[test]
    fn test_names_are_not_quoted() {
        let output = render(vec![Product::new("Cable, USB-C", 2, 9.99)]);
        assert_eq!(output, "Name,Quantity,Price\nCable, USB-C,2,9.99\n");
    }

    /// Writer that accepts `capacity` bytes, then fails every write and flush
    struct FullDisk {
        capacity: usize,
        written: Vec<u8>,
    }

    impl Write for FullDisk {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            let room = self.capacity - self.written.len();
            if room == 0 {
                return Err(std::io::Error::other("disk full"));
            }
            let n = buf.len().min(room);
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            if self.written.len() == self.capacity {
                Err(std::io::Error::other("disk full"))
            } else {
                Ok(())
            }
        }
    }

    #[rstest]
    #[case::nothing_written(0)]
    #[case::fails_inside_header(5)]
    #[case::fails_inside_row(25)]
    fn test_write_failure_is_io_error(#[case] capacity: usize) {
        let view: ProductsView = vec![
            Product::new("Laptop", 5, 999.99),
            Product::new("Monitor", 10, 199.99),
        ]
        .into_iter()
        .collect();
        let mut output = FullDisk {
            capacity,
            written: Vec::new(),
        };

        let result = write_products_csv(&view, &mut output);

        assert_eq!(
            result,
            Err(InventoryError::Io {
                message: "disk full".to_string()
            })
        );
        assert_eq!(output.written.len(), capacity);
    }

    #[test]
    fn test_csv_row_from_product() {
        let product = Product::new("Monitor", 10, 199.99);
        let row = CsvRow::from(&product);
        assert_eq!(
            row,
            CsvRow {
                name: "Monitor",
                quantity: 10,
                price: "199.99".to_string(),
            }
        );
    }
}
