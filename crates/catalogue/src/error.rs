//! Error types for the catalogue crate.
//!
//! Fetching a catalogue can fail in three broad ways: the file can't be
//! read, its JSON doesn't match the product shape, or the records break
//! a catalogue invariant (negative price, duplicate id). Callers treat all
//! of them alike as a failed fetch.

use crate::types::ProductId;
use thiserror::Error;

/// Errors that can occur while fetching or parsing a product catalogue
#[derive(Error, Debug)]
pub enum CatalogueError {
    /// File could not be found or opened
    #[error("Failed to open catalogue: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the catalogue
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The payload is not valid JSON or doesn't match the product shape
    #[error("Malformed catalogue JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A product field had an invalid value
    #[error("Invalid value for {field} on product {id}: {value}")]
    InvalidValue {
        id: ProductId,
        field: String,
        value: String,
    },

    /// Two records share the same id
    #[error("Duplicate product id {0}")]
    DuplicateId(ProductId),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogueError>;
