//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core interaction logic, sitting between the host
//! runtime (the render layer embedding this crate) and the domain layer. It
//! implements the event-driven architecture that powers the storefront
//! screen.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Intent → Events → Event Handler → State Mutations → Actions → Side Effects
//!                                              ↓
//!                                      View Model Snapshot → Render Layer
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`cart`]: Ordered cart line accumulation and total computation
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`selection`]: Detail overlay selection and visibility state
//! - [`state`]: Central application state container and view model computation
//! - [`toast`]: Single-slot transient notification state machine
//!
//! # Example
//!
//! ```
//! use shopfront::app::{dispatch, AppState, Event};
//! use shopfront::infrastructure::haptics::NoopHaptics;
//!
//! let mut state = AppState::with_seed_catalog();
//! let redraw = dispatch(
//!     &mut state,
//!     &Event::PressAddToCart { id: 1, from_detail: false },
//!     &NoopHaptics,
//! )?;
//! assert!(redraw);
//! assert_eq!(state.cart.count(), 1);
//! # Ok::<(), shopfront::domain::ShopError>(())
//! ```

pub mod actions;
pub mod cart;
pub mod handler;
pub mod selection;
pub mod state;
pub mod toast;

pub use actions::Action;
pub use cart::Cart;
pub use handler::{dispatch, handle_event, Event};
pub use selection::Selection;
pub use state::AppState;
pub use toast::{Severity, Toast};
