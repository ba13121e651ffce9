//! Parser for catalogue JSON files.
//!
//! Two layouts are accepted:
//! - the `dummyjson.com` envelope: `{"products": [...], "total": 194, ...}`
//! - a bare array of products: `[...]`
//!
//! After deserializing, every record is validated so the pipeline can rely
//! on non-negative prices and unique ids.

use crate::error::{CatalogueError, Result};
use crate::types::*;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Either JSON layout, decided by serde at parse time
#[derive(Deserialize)]
#[serde(untagged)]
enum CataloguePayload {
    Envelope { products: Vec<Product> },
    Bare(Vec<Product>),
}

/// Parse a catalogue from JSON text.
pub fn parse_products(json: &str) -> Result<Vec<Product>> {
    let payload: CataloguePayload = serde_json::from_str(json)?;
    let products = match payload {
        CataloguePayload::Envelope { products } => products,
        CataloguePayload::Bare(products) => products,
    };

    validate(&products)?;
    Ok(products)
}

/// Read and parse a catalogue file from disk.
pub fn parse_file(path: &Path) -> Result<Vec<Product>> {
    if !path.exists() {
        return Err(CatalogueError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let json = fs::read_to_string(path)?;
    parse_products(&json)
}

/// Check the invariants the query pipeline depends on
pub(crate) fn validate(products: &[Product]) -> Result<()> {
    let mut seen = HashSet::with_capacity(products.len());

    for product in products {
        if !product.price.is_finite() || product.price < 0.0 {
            return Err(CatalogueError::InvalidValue {
                id: product.id,
                field: "price".to_string(),
                value: product.price.to_string(),
            });
        }
        if !seen.insert(product.id) {
            return Err(CatalogueError::DuplicateId(product.id));
        }
    }

    Ok(())
}
