//! Write-through persistence for the basket.
//!
//! `BasketStore` keeps the current [`Basket`] in memory and mirrors every
//! change into a [`Storage`] under the `basket` key, so reopening the same
//! storage reconstructs the same basket.

use crate::basket::Basket;
use catalogue::Product;
use session::{Storage, StorageError};
use tracing::{debug, warn};

/// Storage key of the serialized basket
pub const BASKET_KEY: &str = "basket";

#[derive(Debug)]
pub struct BasketStore<S: Storage> {
    storage: S,
    basket: Basket,
}

impl<S: Storage> BasketStore<S> {
    /// Reconcile the stored basket into memory.
    ///
    /// A missing entry gives an empty basket. So does an entry that can't
    /// be parsed; it is logged and overwritten on the next change.
    pub fn load(storage: S) -> Self {
        let basket = match storage.get(BASKET_KEY) {
            None => Basket::new(),
            Some(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                warn!("Discarding unreadable stored basket: {}", e);
                Basket::new()
            }),
        };
        debug!("Loaded basket with {} items", basket.len());

        Self { storage, basket }
    }

    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    pub fn contains(&self, item: &Product) -> bool {
        self.basket.contains(item)
    }

    /// Add `item` and persist. Returns whether the basket changed.
    pub fn add(&mut self, item: &Product) -> Result<bool, StorageError> {
        let next = self.basket.add(item);
        self.replace(next)
    }

    /// Remove `item` and persist. Returns whether the basket changed.
    pub fn remove(&mut self, item: &Product) -> Result<bool, StorageError> {
        let next = self.basket.remove(item);
        self.replace(next)
    }

    /// Empty the basket and persist
    pub fn clear(&mut self) -> Result<bool, StorageError> {
        self.replace(Basket::new())
    }

    pub fn into_inner(self) -> S {
        self.storage
    }

    fn replace(&mut self, next: Basket) -> Result<bool, StorageError> {
        let changed = next != self.basket;
        let json = serde_json::to_string(&next).map_err(|source| StorageError::Serialize {
            key: BASKET_KEY.to_string(),
            source,
        })?;

        self.storage.set(BASKET_KEY, &json)?;
        self.basket = next;
        Ok(changed)
    }
}
