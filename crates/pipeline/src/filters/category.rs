//! Filter to keep only products in one category.
//!
//! The comparison is an exact match after lowercasing both sides, so
//! "beauty", "Beauty" and "BEAUTY" all select the same products.

use crate::traits::Filter;
use catalogue::Product;

/// Keeps products whose category equals the wanted one, ignoring case.
pub struct CategoryFilter {
    category: String,
}

impl CategoryFilter {
    /// Create a new CategoryFilter.
    ///
    /// # Arguments
    /// * `category` - Category to keep, in any letter case
    pub fn new(category: &str) -> Self {
        Self {
            category: category.to_lowercase(),
        }
    }
}

impl Filter for CategoryFilter {
    fn name(&self) -> &str {
        "CategoryFilter"
    }

    fn matches(&self, product: &Product) -> bool {
        product.category.to_lowercase() == self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_filter_ignores_case() {
        let products = vec![
            Product::new(1, "Soap", "Beauty", 5.0),
            Product::new(2, "Chair", "Furniture", 75.0),
            Product::new(3, "Lipstick", "beauty", 12.0),
        ];

        let filter = CategoryFilter::new("BEAUTY");
        let filtered = filter.apply(products.iter().collect());

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, 1);
        assert_eq!(filtered[1].id, 3);
    }

    #[test]
    fn test_category_filter_is_exact() {
        let product = Product::new(1, "Perfume", "fragrances", 40.0);
        assert!(!CategoryFilter::new("fragrance").matches(&product));
        assert!(!CategoryFilter::new("fragrances and more").matches(&product));
    }
}
