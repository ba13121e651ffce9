//! Filter to keep products inside an inclusive price range.

use crate::query::PriceRange;
use crate::traits::Filter;
use catalogue::Product;

/// Keeps products with `min <= price` and, if set, `price <= max`.
///
/// An unsatisfiable or unparsable range keeps nothing; it is never an error.
pub struct PriceRangeFilter {
    range: PriceRange,
}

impl PriceRangeFilter {
    pub fn new(range: PriceRange) -> Self {
        Self { range }
    }
}

impl Filter for PriceRangeFilter {
    fn name(&self) -> &str {
        "PriceRangeFilter"
    }

    fn matches(&self, product: &Product) -> bool {
        self.range.contains(product.price)
    }
}
