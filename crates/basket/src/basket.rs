//! The basket value type.
//!
//! A basket is a set of products keyed by id. Identity is the id alone:
//! two `Product` values with the same id are the same basket entry even if
//! their other fields differ. Entries keep the order they were added in.

use catalogue::{Product, ProductId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Products the user intends to buy.
///
/// All operations return a new basket and leave `self` untouched, so a
/// caller can hold the previous state for comparison or undo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Product>", into = "Vec<Product>")]
pub struct Basket {
    items: Vec<Product>,
}

impl Basket {
    pub fn new() -> Self {
        Self::default()
    }

    /// A basket with `item` added. Unchanged if its id is already present.
    pub fn add(&self, item: &Product) -> Self {
        let mut next = self.clone();
        if !self.contains(item) {
            next.items.push(item.clone());
        }
        next
    }

    /// A basket without any entry whose id matches `item`
    pub fn remove(&self, item: &Product) -> Self {
        self.remove_id(item.id)
    }

    pub fn remove_id(&self, id: ProductId) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter(|entry| entry.id != id)
                .cloned()
                .collect(),
        }
    }

    /// Membership by id
    pub fn contains(&self, item: &Product) -> bool {
        self.contains_id(item.id)
    }

    pub fn contains_id(&self, id: ProductId) -> bool {
        self.items.iter().any(|entry| entry.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the unit prices of every entry
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }
}

/// Rebuild a basket from stored entries, dropping repeated ids.
impl From<Vec<Product>> for Basket {
    fn from(items: Vec<Product>) -> Self {
        let mut seen = HashSet::with_capacity(items.len());
        Self {
            items: items.into_iter().filter(|item| seen.insert(item.id)).collect(),
        }
    }
}

impl From<Basket> for Vec<Product> {
    fn from(basket: Basket) -> Self {
        basket.items
    }
}
