//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern. Because every
//! filter is a conjunctive predicate, the order of the chain never changes
//! which products survive, only how much work each stage does.

use crate::filters::{CategoryFilter, PriceRangeFilter, TitleFilter};
use crate::query::Query;
use crate::traits::Filter;
use catalogue::Product;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(CategoryFilter::new("beauty"))
///     .add_filter(PriceRangeFilter::new(PriceRange::new(10.0, Some(50.0))));
///
/// let filtered = pipeline.apply(products.iter().collect());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the pipeline for the criteria set on `query`.
    ///
    /// Criteria that are absent add no filter, so an empty query yields an
    /// empty pipeline that lets everything through.
    pub fn from_query(query: &Query) -> Self {
        let mut pipeline = Self::new();
        if let Some(category) = &query.category {
            pipeline = pipeline.add_filter(CategoryFilter::new(category));
        }
        if let Some(range) = query.price_range {
            pipeline = pipeline.add_filter(PriceRangeFilter::new(range));
        }
        if let Some(title) = &query.title {
            pipeline = pipeline.add_filter(TitleFilter::new(title));
        }
        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the Filter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the chain
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the products.
    ///
    /// ## Algorithm
    /// 1. Start with the input products
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set
    pub fn apply<'a>(&self, products: Vec<&'a Product>) -> Vec<&'a Product> {
        let mut current = products;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::PriceRange;

    fn products() -> Vec<Product> {
        vec![
            Product::new(1, "Soap", "Beauty", 5.0),
            Product::new(2, "Chair", "Furniture", 75.0),
            Product::new(3, "Rose Soap", "beauty", 15.0),
            Product::new(4, "Perfume", "Fragrances", 40.0),
        ]
    }

    #[test]
    fn test_empty_pipeline() {
        let products = products();
        let pipeline = FilterPipeline::new();

        let filtered = pipeline.apply(products.iter().collect());
        assert_eq!(filtered.len(), 4);
    }

    #[test]
    fn test_single_filter() {
        let products = products();
        let pipeline = FilterPipeline::new().add_filter(CategoryFilter::new("furniture"));

        let filtered = pipeline.apply(products.iter().collect());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let products = products();
        let pipeline = FilterPipeline::new()
            .add_filter(CategoryFilter::new("beauty"))
            .add_filter(PriceRangeFilter::new(PriceRange::new(10.0, Some(50.0))))
            .add_filter(TitleFilter::new("soap"));

        let filtered = pipeline.apply(products.iter().collect());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 3);
    }

    #[test]
    fn test_from_query_only_adds_set_criteria() {
        assert!(FilterPipeline::from_query(&Query::new()).is_empty());

        let query = Query::new()
            .with_category(Some("beauty"))
            .with_title(Some("soap"));
        assert_eq!(FilterPipeline::from_query(&query).len(), 2);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let products = products();
        let query = Query::new()
            .with_category(Some("beauty"))
            .with_price_range(Some(PriceRange::at_least(1.0)));
        let pipeline = FilterPipeline::from_query(&query);

        let once = pipeline.apply(products.iter().collect());
        let twice = pipeline.apply(once.clone());

        assert_eq!(once, twice);
    }
}
