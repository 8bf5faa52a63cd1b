//! Product-detail selection state.
//!
//! Tracks which product is chosen for the detail overlay and whether the
//! overlay is open. The two fields are deliberately independent: closing the
//! overlay does not clear the selection.

use crate::domain::Product;

/// Selection state for the product-detail overlay.
///
/// Two co-located flags rather than a single tagged state: `selected` is the
/// overlay's content, `detail_visible` its openness. They can desynchronize
/// (closed overlay with a lingering selection) and that combination is
/// observable contract, not a bug. See [`Selection::dismiss`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    selected: Option<Product>,
    detail_visible: bool,
}

impl Selection {
    /// Creates a selection with nothing chosen and the overlay closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `product` for detail viewing and opens the overlay.
    ///
    /// Valid from any state; an in-flight selection is replaced.
    pub fn select(&mut self, product: Product) {
        tracing::debug!(product_id = product.id, product_name = %product.name, "product selected");
        self.selected = Some(product);
        self.detail_visible = true;
    }

    /// Closes the overlay.
    ///
    /// Design smell carried over intentionally: the selection is NOT cleared
    /// here, so the last-viewed product remains readable after the overlay
    /// closes (and the overlay content never blanks mid-close animation).
    /// Do not "fix" this without a product decision.
    pub fn dismiss(&mut self) {
        self.detail_visible = false;
    }

    /// The product currently (or last) selected for detail viewing.
    #[must_use]
    pub fn selected(&self) -> Option<&Product> {
        self.selected.as_ref()
    }

    /// Whether the detail overlay is open.
    #[must_use]
    pub fn detail_visible(&self) -> bool {
        self.detail_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Catalog;

    fn product(id: u32) -> Product {
        Catalog::seed().lookup(id).expect("seed product").clone()
    }

    #[test]
    fn initial_state_is_closed_with_no_selection() {
        let selection = Selection::new();
        assert!(selection.selected().is_none());
        assert!(!selection.detail_visible());
    }

    #[test]
    fn select_opens_overlay_with_product() {
        let mut selection = Selection::new();
        selection.select(product(3));
        assert!(selection.detail_visible());
        assert_eq!(selection.selected().map(|p| p.id), Some(3));
    }

    #[test]
    fn dismiss_keeps_selection() {
        // Scenario D: the selection survives closing the overlay.
        let mut selection = Selection::new();
        selection.select(product(3));
        selection.dismiss();
        assert!(!selection.detail_visible());
        assert_eq!(selection.selected().map(|p| p.id), Some(3));
    }

    #[test]
    fn reselect_replaces_previous_product() {
        let mut selection = Selection::new();
        selection.select(product(1));
        selection.dismiss();
        selection.select(product(5));
        assert!(selection.detail_visible());
        assert_eq!(selection.selected().map(|p| p.id), Some(5));
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut selection = Selection::new();
        selection.dismiss();
        assert!(!selection.detail_visible());
        selection.select(product(2));
        selection.dismiss();
        selection.dismiss();
        assert!(!selection.detail_visible());
        assert_eq!(selection.selected().map(|p| p.id), Some(2));
    }
}
