//! Shopping cart state.
//!
//! The cart is an ordered sequence of lines, each referencing one product id.
//! Adding the same product twice records two independent lines; there is no
//! quantity map, no removal, and no persistence. That minimalism is the
//! contract, not an omission to be fixed later.

use crate::domain::{Catalog, ProductId};

/// Ordered accumulation of add-to-cart events.
///
/// Holds only product ids; names and prices are resolved against the catalog
/// on demand so totals are never cached stale. Unknown ids are accepted
/// unconditionally and resolve fail-soft downstream (zero price, empty name).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<ProductId>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line for `id` to the cart.
    ///
    /// Always succeeds. The id is not validated against the catalog; an
    /// unresolvable line simply contributes nothing to the total.
    pub fn add(&mut self, id: ProductId) {
        self.lines.push(id);
        tracing::debug!(product_id = id, cart_count = self.lines.len(), "cart line added");
    }

    /// Number of lines in the cart (not distinct products).
    #[must_use]
    pub fn count(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` when no lines have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The recorded lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[ProductId] {
        &self.lines
    }

    /// Sums the resolved price of every line, in cents.
    ///
    /// Recomputed on every call from the live line list. Lines whose id has
    /// no catalog entry contribute 0 (fail-soft lookup); duplicate lines each
    /// contribute their full price.
    #[must_use]
    pub fn total_cents(&self, catalog: &Catalog) -> u32 {
        self.lines
            .iter()
            .map(|id| catalog.lookup(*id).map_or(0, |p| p.price_cents))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Catalog;

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.total_cents(&Catalog::seed()), 0);
    }

    #[test]
    fn count_matches_number_of_adds() {
        let mut cart = Cart::new();
        for id in [1, 2, 3, 1, 2] {
            cart.add(id);
        }
        assert_eq!(cart.count(), 5);
        assert!(!cart.is_empty());
    }

    #[test]
    fn duplicate_lines_double_their_contribution() {
        // Scenario A: two adds of product 1 at $129.99.
        let catalog = Catalog::seed();
        let mut cart = Cart::new();
        cart.add(1);
        cart.add(1);
        assert_eq!(cart.count(), 2);
        assert_eq!(cart.total_cents(&catalog), 25998);
    }

    #[test]
    fn unknown_id_contributes_zero() {
        let catalog = Catalog::seed();
        let mut cart = Cart::new();
        cart.add(999);
        cart.add(4);
        assert_eq!(cart.count(), 2);
        assert_eq!(cart.total_cents(&catalog), 1999);
    }

    #[test]
    fn total_reflects_current_lines_not_a_cache() {
        let catalog = Catalog::seed();
        let mut cart = Cart::new();
        cart.add(3);
        assert_eq!(cart.total_cents(&catalog), 4999);
        cart.add(4);
        assert_eq!(cart.total_cents(&catalog), 6998);
    }
}
