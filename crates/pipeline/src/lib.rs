//! Catalogue query pipeline: filtering, sorting and pagination of products.
//!
//! This crate provides:
//! - Filter trait and implementations for category, price and title criteria
//! - FilterPipeline for composing filters
//! - Stable price and title sorting
//! - Pagination with result metadata
//!
//! ## Architecture
//! A query is processed in stages:
//! 1. Filters remove products that fail any criterion (all criteria are ANDed)
//! 2. The single active sort key orders what is left, stably
//! 3. Pagination slices out the requested page and reports `total_matched`
//!
//! The whole pipeline is a pure function over a borrowed product slice;
//! callers keep their `Query` as a value and call [`apply`] again whenever
//! it changes.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{Query, PriceRange, SortDirection};
//!
//! let query = Query::new()
//!     .with_category(Some("beauty"))
//!     .with_price_range(Some(PriceRange::new(10.0, Some(50.0))))
//!     .with_price_sort(SortDirection::Ascending);
//!
//! let page = pipeline::apply(catalogue.products(), &query);
//! println!("{} of {} products", page.items.len(), page.total_matched);
//! ```

pub mod defaults;
pub mod filter_pipeline;
pub mod filters;
pub mod paginate;
pub mod query;
pub mod sort;
pub mod traits;
pub mod view;

// Re-export main types
pub use defaults::{DEFAULT_CATEGORIES, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, price_presets};
pub use filter_pipeline::FilterPipeline;
pub use paginate::{Page, paginate};
pub use query::{PriceRange, Query, SortDirection};
pub use sort::{SortKey, SortOrder};
pub use traits::Filter;
pub use view::apply;
