//! Core domain types for the product catalogue.
//!
//! The field names follow the `dummyjson.com` product payload (camelCase on
//! the wire). Only `id`, `title`, `category` and `price` are interpreted by
//! the query pipeline; everything else is display data carried along for the
//! detail view.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique, stable identifier for a product
pub type ProductId = u32;

/// Descriptions longer than this are cut in the table preview
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

// =============================================================================
// Product
// =============================================================================

/// A single catalogue record.
///
/// Rust concept: `#[serde(default)]` lets the display fields be absent in
/// the JSON without failing the whole load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    /// Non-negative unit price
    pub price: f64,

    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub brand: Option<String>,
    /// Average review score as reported by the source
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub stock: Option<u32>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Product {
    /// Create a product with only the fields the pipeline looks at.
    ///
    /// Handy for tests and for sources that don't carry display data.
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            category: category.into(),
            price,
            description: String::new(),
            brand: None,
            rating: None,
            stock: None,
            thumbnail: None,
            images: Vec::new(),
            tags: Vec::new(),
            reviews: Vec::new(),
        }
    }

    /// Builder-style setter for the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Description as shown in a table row: the first
    /// [`DESCRIPTION_PREVIEW_CHARS`] characters followed by `...` when the
    /// full text is longer.
    pub fn preview_description(&self) -> String {
        let mut chars = self.description.chars();
        let head: String = chars.by_ref().take(DESCRIPTION_PREVIEW_CHARS).collect();
        if chars.next().is_some() {
            format!("{head}...")
        } else {
            head
        }
    }
}

// =============================================================================
// Review
// =============================================================================

/// A customer review shown in the product detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub reviewer_name: String,
    /// ISO-8601 timestamp, kept as text
    #[serde(default)]
    pub date: Option<String>,
}
