//! # Product Catalog
//!
//! The lookup seam between the cart store and wherever products live.
//!
//! ## The Seam
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Implementations                        │
//! │                                                                     │
//! │  CartStore ──► dyn Catalog ──┬──► StaticCatalog (this crate)       │
//! │                              ├──► database-backed (caller's crate) │
//! │                              └──► remote service  (caller's crate) │
//! │                                                                     │
//! │  The store only ever sees `lookup`; swapping backends never        │
//! │  touches the mutation path.                                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contract
//! - `Ok(Some(product))` - exact-match hit
//! - `Ok(None)`          - no such product (empty catalog included)
//! - `Err(_)`            - the backend itself failed; the store passes
//!                         this through to the caller unchanged

use std::collections::HashMap;

use crate::error::CoreResult;
use crate::types::Product;

// =============================================================================
// Catalog Trait
// =============================================================================

/// Read-only product lookup.
pub trait Catalog: Send + Sync {
    /// Exact-match lookup by product id.
    ///
    /// A miss is `Ok(None)`, not an error: "the product does not exist"
    /// and "the catalog could not answer" are different conditions and
    /// the caller treats them differently.
    fn lookup(&self, product_id: &str) -> CoreResult<Option<Product>>;
}

// =============================================================================
// Static Catalog
// =============================================================================

/// In-memory catalog backed by a fixed map, populated at construction.
///
/// ## Example
/// ```rust
/// use checkout_core::{Catalog, Money, Product, StaticCatalog};
///
/// let catalog = StaticCatalog::new([Product {
///     id: "Dove Soap".into(),
///     name: "Dove Soap".into(),
///     price: Money::from_cents(3999),
/// }]);
///
/// assert!(catalog.lookup("Dove Soap").unwrap().is_some());
/// assert!(catalog.lookup("unknown").unwrap().is_none());
///
/// // an empty catalog is valid and simply never finds anything
/// assert!(StaticCatalog::empty().lookup("Dove Soap").unwrap().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: HashMap<String, Product>,
}

impl StaticCatalog {
    /// Builds a catalog from any collection of products, keyed by id.
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        StaticCatalog {
            products: products
                .into_iter()
                .map(|p| (p.id.clone(), p))
                .collect(),
        }
    }

    /// A catalog with no products; every lookup answers `Ok(None)`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Catalog for StaticCatalog {
    fn lookup(&self, product_id: &str) -> CoreResult<Option<Product>> {
        Ok(self.products.get(product_id).cloned())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn soap() -> Product {
        Product {
            id: "Dove Soap".to_string(),
            name: "Dove Soap".to_string(),
            price: Money::from_cents(3999),
        }
    }

    #[test]
    fn test_lookup_hit() {
        let catalog = StaticCatalog::new([soap()]);
        let found = catalog.lookup("Dove Soap").unwrap();
        assert_eq!(found, Some(soap()));
    }

    #[test]
    fn test_lookup_miss() {
        let catalog = StaticCatalog::new([soap()]);
        assert_eq!(catalog.lookup("Axe Deo").unwrap(), None);
    }

    #[test]
    fn test_empty_catalog_never_panics() {
        let catalog = StaticCatalog::empty();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert_eq!(catalog.lookup("anything").unwrap(), None);
    }
}
