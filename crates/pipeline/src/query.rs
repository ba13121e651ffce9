//! The query value object handed to the pipeline.
//!
//! A `Query` is rebuilt on every user interaction. Methods that change what
//! is matched or how it is ordered reset the page to 1, mirroring what a
//! user expects when the result set changes under them.

use crate::defaults::DEFAULT_PAGE_SIZE;
use crate::sort::{SortKey, SortOrder};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

// =============================================================================
// PriceRange
// =============================================================================

/// Inclusive price bounds with an optional upper limit.
///
/// A range with `max < min` is valid and simply matches nothing. Bounds that
/// failed to parse are stored as NaN, which also matches nothing since every
/// comparison against NaN is false.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn new(min: f64, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// `min` and up
    pub fn at_least(min: f64) -> Self {
        Self { min, max: None }
    }

    /// Parse a preset token of the form `"min-max"`.
    ///
    /// - `"10-50"` is 10 to 50 inclusive
    /// - `"100-"` is 100 and up
    /// - `"-10"` is 0 to 10 (prices are never negative)
    ///
    /// Never fails: a side that isn't a number becomes NaN and the
    /// resulting range matches no product. A token without a `-` is read
    /// as a lower bound only.
    pub fn parse_lenient(token: &str) -> Self {
        let (min, max) = match token.split_once('-') {
            Some((min, max)) => (min.trim(), Some(max.trim())),
            None => (token.trim(), None),
        };

        let min = if min.is_empty() { 0.0 } else { parse_bound(min) };
        let max = match max {
            Some("") | None => None,
            Some(max) => Some(parse_bound(max)),
        };

        Self { min, max }
    }

    /// Whether `price` lies inside the range
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && self.max.is_none_or(|max| price <= max)
    }
}

fn parse_bound(text: &str) -> f64 {
    text.parse().unwrap_or(f64::NAN)
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}-{}", self.min, max),
            None => write!(f, "{}-", self.min),
        }
    }
}

// =============================================================================
// Query
// =============================================================================

/// Filters, sort and page for one view of the catalogue.
///
/// Price sort and title sort are mutually exclusive: the toggle methods
/// clear the other key. If both are set anyway the pipeline leaves the
/// filtered order untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Exact category, compared case-insensitively
    pub category: Option<String>,
    pub price_range: Option<PriceRange>,
    /// Substring of the title, compared case-insensitively
    pub title: Option<String>,
    pub price_sort: Option<SortDirection>,
    pub title_sort: Option<SortDirection>,
    /// 1-based page number
    pub page: usize,
    pub page_size: usize,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            category: None,
            price_range: None,
            title: None,
            price_sort: None,
            title_sort: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Query {
    /// An empty query: no filters, no sort, first page of the default size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the category filter. An empty string clears it.
    pub fn with_category(mut self, category: Option<&str>) -> Self {
        self.category = category.filter(|c| !c.is_empty()).map(str::to_string);
        self.page = 1;
        self
    }

    pub fn with_price_range(mut self, price_range: Option<PriceRange>) -> Self {
        self.price_range = price_range;
        self.page = 1;
        self
    }

    /// Set or clear the title filter. An empty string clears it.
    pub fn with_title(mut self, title: Option<&str>) -> Self {
        self.title = title.filter(|t| !t.is_empty()).map(str::to_string);
        self.page = 1;
        self
    }

    /// Sort by price in `direction`, clearing any title sort
    pub fn with_price_sort(mut self, direction: SortDirection) -> Self {
        self.price_sort = Some(direction);
        self.title_sort = None;
        self.page = 1;
        self
    }

    /// Sort by title in `direction`, clearing any price sort
    pub fn with_title_sort(mut self, direction: SortDirection) -> Self {
        self.title_sort = Some(direction);
        self.price_sort = None;
        self.page = 1;
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Click on the price column header.
    ///
    /// Ascending unless the price sort is already ascending, in which case
    /// it flips to descending.
    pub fn toggle_price_sort(&mut self) {
        self.price_sort = Some(toggled(self.price_sort));
        self.title_sort = None;
        self.page = 1;
    }

    /// Click on the title column header. Same cycle as the price toggle.
    pub fn toggle_title_sort(&mut self) {
        self.title_sort = Some(toggled(self.title_sort));
        self.price_sort = None;
        self.page = 1;
    }

    /// Move to `page` if it exists.
    ///
    /// Returns `false` and leaves the query alone when `page` falls outside
    /// `1..=total_pages`.
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) -> bool {
        if page >= 1 && page <= total_pages {
            self.page = page;
            true
        } else {
            false
        }
    }

    /// The single active sort, if any.
    ///
    /// `None` when no sort is set or when both keys are set at once.
    pub fn sort_order(&self) -> Option<SortOrder> {
        match (self.price_sort, self.title_sort) {
            (Some(direction), None) => Some(SortOrder::new(SortKey::Price, direction)),
            (None, Some(direction)) => Some(SortOrder::new(SortKey::Title, direction)),
            _ => None,
        }
    }
}

fn toggled(current: Option<SortDirection>) -> SortDirection {
    current.map_or(SortDirection::Ascending, SortDirection::flipped)
}
