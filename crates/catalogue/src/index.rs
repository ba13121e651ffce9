//! In-memory catalogue with an id index.
//!
//! `Catalogue` owns the product list in source order (the pipeline's
//! "original order") and keeps a `HashMap` from id to position so the
//! detail view and the basket can resolve ids in O(1).

use crate::error::Result;
use crate::parser;
use crate::types::*;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

/// The product list for one session, fetched once.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    products: Vec<Product>,
    by_id: HashMap<ProductId, usize>,
}

impl Catalogue {
    /// Build a catalogue from already-fetched products.
    ///
    /// Returns an error if the records break a catalogue invariant.
    pub fn from_products(products: Vec<Product>) -> Result<Self> {
        parser::validate(&products)?;

        let by_id = products
            .iter()
            .enumerate()
            .map(|(position, product)| (product.id, position))
            .collect();

        Ok(Self { products, by_id })
    }

    /// Load a catalogue file from disk
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let products = parser::parse_file(path)?;
        tracing::info!("Loaded {} products from {}", products.len(), path.display());
        Self::from_products(products)
    }

    /// All products in source order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.by_id.get(&id).map(|&position| &self.products[position])
    }

    /// Distinct categories, sorted and de-duplicated case-insensitively.
    ///
    /// The first spelling seen for each category wins.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut categories = Vec::new();
        for product in &self.products {
            if seen.insert(product.category.to_lowercase()) {
                categories.push(product.category.clone());
            }
        }
        categories.sort_by_key(|category| category.to_lowercase());
        categories
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalogue {
        Catalogue::from_products(vec![
            Product::new(10, "Soap", "Beauty", 5.0),
            Product::new(20, "Chair", "furniture", 75.0),
            Product::new(30, "Perfume", "fragrances", 40.0),
            Product::new(40, "Lipstick", "beauty", 12.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_get_by_id() {
        let catalogue = sample();
        assert_eq!(catalogue.get(30).unwrap().title, "Perfume");
        assert!(catalogue.get(99).is_none());
    }

    #[test]
    fn test_source_order_is_kept() {
        let catalogue = sample();
        let ids: Vec<_> = catalogue.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![10, 20, 30, 40]);
    }

    #[test]
    fn test_categories_are_distinct_case_insensitively() {
        let catalogue = sample();
        assert_eq!(
            catalogue.categories(),
            vec!["Beauty".to_string(), "fragrances".to_string(), "furniture".to_string()]
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            br#"{"products": [{"id": 5, "title": "Mug", "category": "kitchen", "price": 3}]}"#,
        )
        .unwrap();

        let catalogue = Catalogue::load_from_file(file.path()).unwrap();
        assert_eq!(catalogue.len(), 1);
        assert_eq!(catalogue.get(5).unwrap().title, "Mug");
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = Catalogue::from_products(vec![
            Product::new(1, "Soap", "beauty", 5.0),
            Product::new(1, "Other soap", "beauty", 6.0),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_catalogue() {
        let catalogue = Catalogue::default();
        assert!(catalogue.is_empty());
        assert!(catalogue.categories().is_empty());
    }
}
