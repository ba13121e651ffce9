//! Filter implementations for the catalogue pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline. Each one is a pure
//! predicate over a single product.

pub mod category;
pub mod price_range;
pub mod title;

// Re-export for convenience
pub use category::CategoryFilter;
pub use price_range::PriceRangeFilter;
pub use title::TitleFilter;
