//! Item sources: where the catalogue comes from.
//!
//! The query pipeline never fetches anything itself. A caller obtains the
//! products from an `ItemSource` once per session and only runs the
//! pipeline when the fetch succeeded.

use crate::error::{CatalogueError, Result};
use crate::parser;
use crate::types::Product;
use std::future::Future;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Anything that can produce the full product list.
///
/// `Send` on the returned future lets callers drive the fetch from a
/// multi-threaded tokio runtime.
pub trait ItemSource {
    /// Fetch every product. May fail with a generic fetch error.
    fn fetch_items(&self) -> impl Future<Output = Result<Vec<Product>>> + Send;
}

/// Reads a catalogue JSON file asynchronously.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this source reads from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ItemSource for JsonFileSource {
    async fn fetch_items(&self) -> Result<Vec<Product>> {
        info!("Fetching products from {}", self.path.display());

        let json = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            error!("Error fetching products: {}", e);
            if e.kind() == std::io::ErrorKind::NotFound {
                CatalogueError::FileNotFound {
                    path: self.path.display().to_string(),
                }
            } else {
                CatalogueError::IoError(e)
            }
        })?;

        parser::parse_products(&json)
    }
}

/// A fixed list of products, mostly useful in tests and demos.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    products: Vec<Product>,
}

impl StaticSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl ItemSource for StaticSource {
    async fn fetch_items(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_json_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "title": "Soap", "category": "beauty", "price": 5}}]"#
        )
        .unwrap();

        let source = JsonFileSource::new(file.path());
        let products = source.fetch_items().await.unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].title, "Soap");
    }

    #[tokio::test]
    async fn test_json_file_source_missing_file() {
        let source = JsonFileSource::new("no/such/catalogue.json");
        let err = source.fetch_items().await.unwrap_err();
        assert!(matches!(err, CatalogueError::FileNotFound { .. }));
    }

    #[tokio::test]
    async fn test_static_source() {
        let source = StaticSource::new(vec![Product::new(1, "Soap", "beauty", 5.0)]);
        assert_eq!(source.fetch_items().await.unwrap().len(), 1);
    }
}
