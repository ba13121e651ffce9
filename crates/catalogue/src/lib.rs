//! # Catalogue Crate
//!
//! Product data model and loading for the catalogue viewer.
//!
//! ## Main Components
//!
//! - **types**: `Product` and `Review`, shaped after the `dummyjson.com` payload
//! - **parser**: parse catalogue JSON into validated products
//! - **index**: `Catalogue`, the session's product list with an id index
//! - **source**: the `ItemSource` collaborator and its file-backed implementation
//! - **error**: error types for loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalogue::{Catalogue, ItemSource, JsonFileSource};
//!
//! let source = JsonFileSource::new("data/products.json");
//! let catalogue = Catalogue::from_products(source.fetch_items().await?)?;
//!
//! let soap = catalogue.get(1).unwrap();
//! println!("{} costs {}", soap.title, soap.price);
//! ```

// Public modules
pub mod error;
pub mod index;
pub mod parser;
pub mod source;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogueError, Result};
pub use index::Catalogue;
pub use source::{ItemSource, JsonFileSource, StaticSource};
pub use types::{DESCRIPTION_PREVIEW_CHARS, Product, ProductId, Review};
