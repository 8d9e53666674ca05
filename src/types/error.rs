//! Error types for the inventory reporter
//!
//! This module defines all error types that can occur while managing the
//! inventory or rendering reports.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: report target cannot be created, written or flushed
//! - **CSV Errors**: the CSV writer rejected a record
//! - **Read-only Violations**: structural mutation attempted on a product view

use thiserror::Error;

/// Main error type for the inventory reporter
///
/// I/O and CSV errors are produced inside the CSV report and are logged
/// rather than returned to the printer. `UnsupportedOperation` is the only
/// variant that reaches callers directly.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InventoryError {
    /// The report file could not be opened for writing
    #[error("Failed to create report file '{path}': {message}")]
    FileCreate {
        /// The path that could not be created
        path: String,
        /// Description of the underlying I/O error
        message: String,
    },

    /// I/O error occurred while writing or flushing output
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// The CSV writer failed to serialize a record
    #[error("CSV write error: {message}")]
    Csv {
        /// Description of the CSV error
        message: String,
    },

    /// A structural mutation was attempted on a read-only product view
    #[error("Unsupported operation '{operation}' on a read-only product view")]
    UnsupportedOperation {
        /// Name of the rejected operation
        operation: String,
    },
}

impl From<std::io::Error> for InventoryError {
    fn from(error: std::io::Error) -> Self {
        InventoryError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for InventoryError {
    fn from(error: csv::Error) -> Self {
        InventoryError::Csv {
            message: error.to_string(),
        }
    }
}

impl InventoryError {
    /// Create a FileCreate error
    pub fn file_create(path: &str, error: &std::io::Error) -> Self {
        InventoryError::FileCreate {
            path: path.to_string(),
            message: error.to_string(),
        }
    }

    /// Create an UnsupportedOperation error
    pub fn unsupported_operation(operation: &str) -> Self {
        InventoryError::UnsupportedOperation {
            operation: operation.to_string(),
        }
    }
}
