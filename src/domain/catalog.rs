//! Immutable product catalog.
//!
//! The catalog is the fixed, ordered set of products available in the
//! storefront. It is built once at initialization from the seed list and is
//! never mutated afterwards; display order is catalog order.

use super::product::{Product, ProductId};

/// The fixed, ordered collection of purchasable products.
///
/// Wraps the product list behind read-only accessors so nothing downstream
/// can reorder or mutate it. Lookup is a linear scan, which is fine for the
/// small, fixed cardinality of a storefront screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog from an explicit product list.
    ///
    /// Used by tests and by hosts that supply their own assortment; the
    /// production storefront uses [`Catalog::seed`].
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Builds the seed catalog of six featured products.
    ///
    /// The assortment, ordering, and copy are fixed for the lifetime of the
    /// process; there is no remote fetch and no mutation path.
    #[must_use]
    pub fn seed() -> Self {
        let entry = |id: ProductId,
                     name: &str,
                     price_cents: u32,
                     emoji: &str,
                     rating: f32,
                     description: &str,
                     category: &str| Product {
            id,
            name: name.to_string(),
            price_cents,
            emoji: emoji.to_string(),
            rating,
            description: description.to_string(),
            category: category.to_string(),
        };

        Self::new(vec![
            entry(
                1,
                "Wireless Headphones",
                12999,
                "🎧",
                4.5,
                "Premium noise-canceling wireless headphones with 30-hour battery life.",
                "Audio",
            ),
            entry(
                2,
                "Smart Watch",
                29999,
                "⌚",
                4.8,
                "Feature-packed smartwatch with fitness tracking and heart rate monitor.",
                "Wearables",
            ),
            entry(
                3,
                "Laptop Stand",
                4999,
                "💻",
                4.2,
                "Ergonomic aluminum laptop stand with adjustable height and angle.",
                "Accessories",
            ),
            entry(
                4,
                "USB-C Cable",
                1999,
                "🔌",
                4.6,
                "Durable braided USB-C cable with fast charging support.",
                "Cables",
            ),
            entry(
                5,
                "Wireless Mouse",
                3999,
                "🖱️",
                4.4,
                "Ergonomic wireless mouse with precision tracking and long battery life.",
                "Accessories",
            ),
            entry(
                6,
                "Portable Speaker",
                7999,
                "🔊",
                4.7,
                "Waterproof Bluetooth speaker with 360° sound and 12-hour playtime.",
                "Audio",
            ),
        ])
    }

    /// Returns the full catalog in stable display order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    ///
    /// Returns `None` for unknown ids; callers apply their own fail-soft
    /// defaults (zero price, empty name) instead of treating this as an
    /// error.
    #[must_use]
    pub fn lookup(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` if the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_has_six_products_in_order() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.len(), 6);
        let ids: Vec<ProductId> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn lookup_finds_known_ids() {
        let catalog = Catalog::seed();
        let watch = catalog.lookup(2).expect("smart watch should exist");
        assert_eq!(watch.name, "Smart Watch");
        assert_eq!(watch.price_cents, 29999);
        assert_eq!(watch.category, "Wearables");
    }

    #[test]
    fn lookup_returns_none_for_unknown_id() {
        let catalog = Catalog::seed();
        assert!(catalog.lookup(0).is_none());
        assert!(catalog.lookup(999).is_none());
    }

    #[test]
    fn empty_catalog_reports_empty() {
        let catalog = Catalog::new(vec![]);
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
