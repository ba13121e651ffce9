//! # Basket Crate
//!
//! Client-side shopping basket for the catalogue viewer.
//!
//! ## Components
//!
//! - **basket**: `Basket`, an id-keyed set of products with value semantics
//! - **store**: `BasketStore`, which writes every change through to a
//!   `session::Storage` and reloads it on start-up
//!
//! ## Example Usage
//!
//! ```ignore
//! use basket::BasketStore;
//! use session::JsonFileStorage;
//!
//! let storage = JsonFileStorage::open(".catalogue/state.json")?;
//! let mut store = BasketStore::load(storage);
//!
//! store.add(&product)?;
//! assert!(store.contains(&product));
//! ```

pub mod basket;
pub mod store;

pub use basket::Basket;
pub use store::{BASKET_KEY, BasketStore};
