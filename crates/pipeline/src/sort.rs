//! Ordering of the filtered products.
//!
//! Both sorts are stable: products with equal keys keep the order they had
//! after filtering, in either direction.

use crate::query::SortDirection;
use catalogue::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Which column the products are ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Price,
    Title,
}

/// A sort key together with its direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Compare two products under this order
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let ordering = match self.key {
            SortKey::Price => compare_prices(a.price, b.price),
            SortKey::Title => compare_titles(&a.title, &b.title),
        };
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Sort `products` in place. `slice::sort_by` is stable.
pub fn sort_products(products: &mut [&Product], order: SortOrder) {
    products.sort_by(|a, b| order.compare(a, b));
}

fn compare_prices(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// Collation-style title comparison.
///
/// Titles are compared in three passes, each only breaking ties left by
/// the one before:
/// 1. base letters, case-folded with accents stripped (`É` sorts as `e`)
/// 2. accents, unaccented before accented
/// 3. case, lowercase before uppercase
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| b.cmp(a))
}

/// Canonically decomposed and lowercased, so accents become separate marks
fn folded(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd().flat_map(char::to_lowercase)
}

fn base_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    folded(text).filter(|c| !is_combining_mark(*c))
}
