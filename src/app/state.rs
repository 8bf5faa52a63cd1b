//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! storefront screen, along with the view model computation the render layer
//! reads after every mutation. It is the single source of truth for all
//! transient UI state.
//!
//! # Architecture
//!
//! `AppState` owns one explicit, independently constructible state object per
//! concern — catalog, cart, selection, toast — rather than ambient globals.
//! The event handler mutates them; the render layer only ever sees the
//! immutable snapshot produced by [`AppState::compute_viewmodel`].
//!
//! # Example
//!
//! ```
//! use shopfront::app::AppState;
//!
//! let state = AppState::with_seed_catalog();
//! let vm = state.compute_viewmodel();
//! assert_eq!(vm.cards.len(), 6);
//! assert!(vm.cart_summary.is_none());
//! ```

use crate::app::cart::Cart;
use crate::app::selection::Selection;
use crate::app::toast::Toast;
use crate::domain::{format_price, Catalog, Product};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CartSummary, DetailView, HeaderInfo, ProductCard, StoreViewModel, ToastView,
};

/// Central application state container.
///
/// Holds the immutable catalog plus the three mutable controllers (cart,
/// selection, toast) and the active theme. Mutated synchronously by the event
/// handler; read by the render layer through computed view models.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The fixed, ordered product catalog. Never mutated after construction.
    pub catalog: Catalog,

    /// Ordered cart lines. Appended by add-to-cart intents; totals are
    /// recomputed from here on demand, never cached.
    pub cart: Cart,

    /// Detail overlay selection and visibility.
    pub selection: Selection,

    /// Single-slot transient notification.
    pub toast: Toast,

    /// Color scheme consulted during view model computation.
    pub theme: Theme,
}

impl AppState {
    /// Creates application state over an explicit catalog and theme.
    #[must_use]
    pub fn new(catalog: Catalog, theme: Theme) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            selection: Selection::new(),
            toast: Toast::new(),
            theme,
        }
    }

    /// Creates application state over the seed catalog with the default theme.
    ///
    /// The common entry point for hosts and tests that do not customize the
    /// assortment.
    #[must_use]
    pub fn with_seed_catalog() -> Self {
        Self::new(Catalog::seed(), Theme::default())
    }

    /// Computes a renderable snapshot of the current state.
    ///
    /// Pure read: formats prices and ratings, derives the cart badge and
    /// summary (absent while the cart is empty), the detail overlay content,
    /// and the toast view with its theme color. The render layer calls this
    /// after every event that reported a redraw.
    #[must_use]
    pub fn compute_viewmodel(&self) -> StoreViewModel {
        let cards = self
            .catalog
            .products()
            .iter()
            .map(Self::compute_card)
            .collect();

        let count = self.cart.count();
        let cart_summary = (count > 0).then(|| {
            let noun = if count == 1 { "item" } else { "items" };
            CartSummary {
                count,
                items_label: format!("{count} {noun}"),
                total_display: format_price(self.cart.total_cents(&self.catalog)),
            }
        });

        // Detail content is computed from the selection even while the
        // overlay is closed: the selection deliberately outlives dismissal.
        let detail = self.selection.selected().map(Self::compute_detail);

        StoreViewModel {
            header: HeaderInfo {
                title: "Shop".to_string(),
                subtitle: "Discover amazing products".to_string(),
            },
            cards,
            cart_badge: (count > 0).then(|| count.to_string()),
            cart_summary,
            detail_visible: self.selection.detail_visible(),
            detail,
            toast: ToastView {
                visible: self.toast.visible(),
                message: self.toast.message().to_string(),
                severity: self.toast.severity(),
                color: self.theme.severity_color(self.toast.severity()).to_string(),
            },
        }
    }

    fn compute_card(product: &Product) -> ProductCard {
        ProductCard {
            id: product.id,
            name: product.name.clone(),
            emoji: product.emoji.clone(),
            category: product.category.clone(),
            price_display: product.price_display(),
            rating_display: product.rating_display(),
        }
    }

    fn compute_detail(product: &Product) -> DetailView {
        DetailView {
            id: product.id,
            name: product.name.clone(),
            emoji: product.emoji.clone(),
            category: product.category.clone(),
            description: product.description.clone(),
            price_display: product.price_display(),
            rating_display: product.rating_display(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_seed_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::toast::Severity;

    #[test]
    fn viewmodel_lists_catalog_in_order() {
        let state = AppState::with_seed_catalog();
        let vm = state.compute_viewmodel();
        assert_eq!(vm.cards.len(), 6);
        assert_eq!(vm.cards[0].name, "Wireless Headphones");
        assert_eq!(vm.cards[0].price_display, "$129.99");
        assert_eq!(vm.cards[0].rating_display, "4.5");
        assert_eq!(vm.cards[5].name, "Portable Speaker");
    }

    #[test]
    fn empty_cart_hides_badge_and_summary() {
        let state = AppState::with_seed_catalog();
        let vm = state.compute_viewmodel();
        assert!(vm.cart_badge.is_none());
        assert!(vm.cart_summary.is_none());
    }

    #[test]
    fn cart_summary_pluralizes_and_formats_total() {
        let mut state = AppState::with_seed_catalog();
        state.cart.add(4);
        let vm = state.compute_viewmodel();
        let summary = vm.cart_summary.expect("summary for non-empty cart");
        assert_eq!(summary.items_label, "1 item");
        assert_eq!(summary.total_display, "$19.99");
        assert_eq!(vm.cart_badge.as_deref(), Some("1"));

        state.cart.add(4);
        let vm = state.compute_viewmodel();
        let summary = vm.cart_summary.expect("summary for non-empty cart");
        assert_eq!(summary.items_label, "2 items");
        assert_eq!(summary.total_display, "$39.98");
    }

    #[test]
    fn detail_content_survives_overlay_dismissal() {
        let mut state = AppState::with_seed_catalog();
        let stand = state.catalog.lookup(3).expect("laptop stand").clone();
        state.selection.select(stand);
        state.selection.dismiss();

        let vm = state.compute_viewmodel();
        assert!(!vm.detail_visible);
        let detail = vm.detail.expect("selection persists after dismiss");
        assert_eq!(detail.id, 3);
        assert_eq!(detail.name, "Laptop Stand");
    }

    #[test]
    fn toast_view_carries_theme_color() {
        let mut state = AppState::with_seed_catalog();
        state.toast.show("Your cart is empty", Severity::Warning);
        let vm = state.compute_viewmodel();
        assert!(vm.toast.visible);
        assert_eq!(vm.toast.message, "Your cart is empty");
        assert_eq!(vm.toast.severity, Severity::Warning);
        assert_eq!(vm.toast.color, state.theme.warning);
    }
}
