//! Filter to keep products whose title contains a search string.

use crate::traits::Filter;
use catalogue::Product;

/// Case-insensitive substring match on the title.
pub struct TitleFilter {
    needle: String,
}

impl TitleFilter {
    pub fn new(needle: &str) -> Self {
        Self {
            needle: needle.to_lowercase(),
        }
    }
}

impl Filter for TitleFilter {
    fn name(&self) -> &str {
        "TitleFilter"
    }

    fn matches(&self, product: &Product) -> bool {
        product.title.to_lowercase().contains(&self.needle)
    }
}
