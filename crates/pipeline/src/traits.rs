//! Core traits for the catalogue query pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible predicates to be applied to a product list.

use catalogue::Product;

/// Core trait for filtering products.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across threads
/// - Filters work on borrowed products, so the caller's list is never touched
/// - `apply` keeps the relative order of the products it lets through
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether a single product passes this filter
    fn matches(&self, product: &Product) -> bool;

    /// Apply this filter to a set of products.
    ///
    /// # Arguments
    /// * `products` - The products to filter (takes ownership of the references)
    ///
    /// # Returns
    /// The products that passed, in their original relative order
    fn apply<'a>(&self, products: Vec<&'a Product>) -> Vec<&'a Product> {
        products
            .into_iter()
            .filter(|product| self.matches(product))
            .collect()
    }
}
