//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user intents
//! and widget callbacks, translating them into state changes and action
//! sequences. It is the orchestration layer: the only place where cart,
//! selection, and toast are mutated together.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Intents arrive from the render layer or the overlay/toast widgets
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via controller methods on [`AppState`]
//! 4. Actions are collected and returned for execution
//!
//! All mutations are synchronous within one event; the only asynchronous
//! element in the system (the toast auto-dismiss countdown) lives in the
//! external widget, which reports back via [`Event::DismissToast`].
//!
//! # Example
//!
//! ```
//! use shopfront::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::with_seed_catalog();
//! let (redraw, actions) = handle_event(&mut state, &Event::PressCheckout)?;
//! assert!(redraw);
//! assert!(actions.is_empty());
//! # Ok::<(), shopfront::domain::ShopError>(())
//! ```

use crate::app::{Action, AppState};
use crate::app::toast::Severity;
use crate::domain::error::Result;
use crate::domain::{format_price, ProductId};
use crate::infrastructure::haptics::{HapticIntensity, Haptics};

/// Events triggered by user input or widget callbacks.
///
/// Each event represents one discrete occurrence. The handler processes them
/// sequentially, so state transitions are deterministic and atomic with
/// respect to the render layer's next snapshot read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The user pressed a product card: select it and open the detail
    /// overlay, with a light haptic cue.
    PressProduct {
        /// Id of the pressed product.
        id: ProductId,
    },

    /// The user pressed an add-to-cart control, either on a card or inside
    /// the detail overlay.
    ///
    /// Appends a cart line, shows a success toast with the resolved product
    /// name, and emits a medium haptic cue. When pressed from the overlay,
    /// the overlay is dismissed afterwards.
    PressAddToCart {
        /// Id of the product to add. Not validated against the catalog;
        /// unknown ids fail soft (empty toast name, zero price).
        id: ProductId,
        /// Whether the press originated inside the detail overlay.
        from_detail: bool,
    },

    /// The user pressed the cart icon: toast the formatted total, or a
    /// warning when the cart is empty.
    PressCartIcon,

    /// The user pressed the checkout placeholder.
    PressCheckout,

    /// The overlay widget requested close (backdrop press).
    DismissDetail,

    /// The toast widget's countdown elapsed, or the user dismissed it.
    DismissToast,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// This is the primary event handler coordinating all state transitions and
/// side effects. It pattern-matches on event types, calls controller mutation
/// methods, and collects actions for the host runtime.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// `(redraw, actions)`: whether the render layer should take a fresh
/// snapshot, and the side effects to execute in sequence.
///
/// # Errors
///
/// Currently infallible — the interaction core has no error paths (unknown
/// catalog references fail soft). The `Result` seam is kept so hosts handle
/// this call uniformly with the fallible configuration surface.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::PressProduct { id } => {
            let Some(product) = state.catalog.lookup(*id).cloned() else {
                // Can only happen through a programming error in the render
                // layer; the catalog is fixed and fully displayed.
                tracing::debug!(product_id = id, "pressed product not in catalog, ignoring");
                return Ok((false, vec![]));
            };

            state.selection.select(product);
            Ok((true, vec![Action::TriggerHaptic(HapticIntensity::Light)]))
        }
        Event::PressAddToCart { id, from_detail } => {
            state.cart.add(*id);

            // Fail-soft name resolution: an unknown id still produces a
            // toast, with an empty name.
            let name = state
                .catalog
                .lookup(*id)
                .map(|p| p.name.clone())
                .unwrap_or_default();
            state
                .toast
                .show(format!("{name} added to cart!"), Severity::Success);

            if *from_detail {
                state.selection.dismiss();
            }

            Ok((true, vec![Action::TriggerHaptic(HapticIntensity::Medium)]))
        }
        Event::PressCartIcon => {
            if state.cart.is_empty() {
                state.toast.show("Your cart is empty", Severity::Warning);
            } else {
                let total = format_price(state.cart.total_cents(&state.catalog));
                state
                    .toast
                    .show(format!("Cart total: {total}"), Severity::Info);
            }
            Ok((true, vec![Action::TriggerHaptic(HapticIntensity::Light)]))
        }
        Event::PressCheckout => {
            state
                .toast
                .show("Checkout feature coming soon!", Severity::Info);
            Ok((true, vec![]))
        }
        Event::DismissDetail => {
            if !state.selection.detail_visible() {
                return Ok((false, vec![]));
            }
            state.selection.dismiss();
            Ok((true, vec![]))
        }
        Event::DismissToast => {
            if !state.toast.visible() {
                tracing::debug!("toast already hidden, ignoring dismiss");
                return Ok((false, vec![]));
            }
            state.toast.dismiss();
            Ok((true, vec![]))
        }
    }
}

/// Processes an event and immediately executes its actions.
///
/// Convenience action processor for hosts that do not inspect actions
/// themselves: runs [`handle_event`], then fires each emitted haptic request
/// against the provided capability.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
/// * `haptics` - Haptic capability (use
///   [`NoopHaptics`](crate::infrastructure::haptics::NoopHaptics) when the
///   platform offers none)
///
/// # Returns
///
/// Whether the render layer should take a fresh snapshot.
///
/// # Errors
///
/// Propagates errors from [`handle_event`] (currently none).
pub fn dispatch(state: &mut AppState, event: &Event, haptics: &dyn Haptics) -> Result<bool> {
    let (redraw, actions) = handle_event(state, event)?;
    for action in actions {
        match action {
            Action::TriggerHaptic(intensity) => haptics.trigger(intensity),
        }
    }
    Ok(redraw)
}
