//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain only pre-formatted, display-ready data — no business logic, no
//! live references into state.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed
//! by the external render layer after every mutation. The render layer never
//! reads controller fields directly.

use crate::app::toast::Severity;
use crate::domain::ProductId;

/// Complete snapshot of the storefront screen for rendering.
///
/// Everything the render layer needs for one redraw: header copy, product
/// cards, cart badge/summary, detail overlay content and visibility, and the
/// toast slot.
#[derive(Debug, Clone)]
pub struct StoreViewModel {
    /// Header title and subtitle.
    pub header: HeaderInfo,

    /// Product cards in catalog order.
    pub cards: Vec<ProductCard>,

    /// Badge text on the cart icon; `None` while the cart is empty.
    pub cart_badge: Option<String>,

    /// Cart summary panel; `None` while the cart is empty.
    pub cart_summary: Option<CartSummary>,

    /// Whether the detail overlay is open.
    pub detail_visible: bool,

    /// Detail overlay content, present whenever a product has been selected
    /// this session — including while the overlay is closed, since the
    /// selection outlives dismissal.
    pub detail: Option<DetailView>,

    /// Toast notification slot.
    pub toast: ToastView,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Screen title (e.g. "Shop").
    pub title: String,

    /// Supporting tagline under the title.
    pub subtitle: String,
}

/// Display information for a single product card in the grid.
#[derive(Debug, Clone)]
pub struct ProductCard {
    /// Product id, echoed back in press intents.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Placeholder imagery glyph.
    pub emoji: String,

    /// Merchandising category label.
    pub category: String,

    /// Pre-formatted price (e.g. `"$129.99"`).
    pub price_display: String,

    /// Pre-formatted rating (e.g. `"4.5"`).
    pub rating_display: String,
}

/// Cart summary panel shown under the grid while the cart is non-empty.
#[derive(Debug, Clone)]
pub struct CartSummary {
    /// Number of cart lines.
    pub count: usize,

    /// Pluralized line count label (`"1 item"`, `"3 items"`).
    pub items_label: String,

    /// Pre-formatted running total (e.g. `"$259.98"`).
    pub total_display: String,
}

/// Detail overlay content for the selected product.
#[derive(Debug, Clone)]
pub struct DetailView {
    /// Product id, echoed back by the overlay's add-to-cart button.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Placeholder imagery glyph.
    pub emoji: String,

    /// Merchandising category label.
    pub category: String,

    /// Long-form product copy.
    pub description: String,

    /// Pre-formatted price.
    pub price_display: String,

    /// Pre-formatted rating.
    pub rating_display: String,
}

/// Toast notification slot state for the widget.
///
/// The widget owns its display duration and animation; it reports elapsed
/// countdowns back through the `DismissToast` event.
#[derive(Debug, Clone)]
pub struct ToastView {
    /// Whether the toast is on screen.
    pub visible: bool,

    /// Message text (last shown content, even while hidden).
    pub message: String,

    /// Message severity.
    pub severity: Severity,

    /// Theme color resolved for the severity, as a hex string.
    pub color: String,
}
