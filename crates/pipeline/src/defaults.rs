//! Stock values offered by the catalogue front end.

use crate::query::PriceRange;

/// Rows per page when the user hasn't picked a size
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Page sizes offered in the page-size selector
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 50, 100];

/// Categories offered in the category selector
pub const DEFAULT_CATEGORIES: [&str; 3] = ["Furniture", "Fragrances", "Beauty"];

/// Price presets offered in the price selector: 0-10, 10-50, 50-100, 100 and up.
///
/// Neighbouring presets share their boundary price since both ends are
/// inclusive.
pub fn price_presets() -> Vec<PriceRange> {
    vec![
        PriceRange::new(0.0, Some(10.0)),
        PriceRange::new(10.0, Some(50.0)),
        PriceRange::new(50.0, Some(100.0)),
        PriceRange::at_least(100.0),
    ]
}
