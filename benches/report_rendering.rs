//! Benchmark suite for report rendering
//!
//! Compares the console and CSV layouts over inventories of increasing size
//! using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//! ```
//!
//! Output goes to in-memory buffers so the numbers reflect formatting cost,
//! not disk speed. `csv_file_report` includes file creation.

use inventory_report::io::write_products_csv;
use inventory_report::report::{ConsoleReport, CsvReport, InventoryReport};
use inventory_report::{Product, ProductsView};

fn main() {
    divan::main();
}

const SIZES: &[usize] = &[10, 1_000, 100_000];

fn inventory_of(size: usize) -> ProductsView {
    (0..size)
        .map(|i| Product::new(format!("Product {}", i), (i % 500) as i32, i as f64 * 1.125))
        .collect()
}

/// Console layout into a byte buffer
#[divan::bench(args = SIZES)]
fn console_report(bencher: divan::Bencher, size: usize) {
    let products = inventory_of(size);
    bencher.bench_local(|| {
        let mut report = ConsoleReport::new(Vec::new());
        report.generate_report(&products);
        report.into_inner()
    });
}

/// CSV layout into a byte buffer
#[divan::bench(args = SIZES)]
fn csv_layout(bencher: divan::Bencher, size: usize) {
    let products = inventory_of(size);
    bencher.bench_local(|| {
        let mut output = Vec::new();
        write_products_csv(&products, &mut output).expect("CSV write failed");
        output
    });
}

/// Full CSV report including file creation
#[divan::bench(args = SIZES)]
fn csv_file_report(bencher: divan::Bencher, size: usize) {
    let products = inventory_of(size);
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bench.csv");
    bencher.bench_local(|| {
        let mut report = CsvReport::new(&path);
        report.generate_report(&products);
    });
}
