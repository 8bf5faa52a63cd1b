//! Shopfront: the client-side state core of a mobile storefront screen.
//!
//! Shopfront drives a static product catalog, a shopping cart, a
//! product-detail overlay, and a single-slot toast notification. Rendering,
//! animation, and platform haptics are host concerns; this crate owns the
//! behavioral contract behind them:
//! - Cart accumulation as ordered lines with on-demand total computation
//! - Detail selection/visibility state (selection outlives overlay dismissal)
//! - Toast presentation with overwrite-latest and externally timed dismissal
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host / Render Layer (external)                     │  ← intents in,
//! └─────────────────────────────────────────────────────┘    snapshots out
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← state machine
//! │  - Event handling and orchestration                 │  ← business logic
//! │  - Cart / Selection / Toast controllers             │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Domain Layer  │   │ Infrastructure│
//! │ (ui/)         │   │ (domain/)     │   │ (infra…/)     │
//! │ - View models │   │ - Product     │   │ - Haptic      │
//! │ - Theming     │   │ - Catalog     │   │   capability  │
//! └───────────────┘   │ - Errors      │   └───────────────┘
//!                     └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← optional
//! │  - tracing subscriber initialization                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Product, Catalog, errors)
//! - [`infrastructure`]: Platform capability boundaries (haptics)
//! - [`ui`]: View model snapshot types and theming
//! - [`observability`]: Tracing subscriber initialization
//!
//! # Event Flow
//!
//! 1. The render layer translates a press into an [`Event`]
//! 2. [`handle_event`] mutates state synchronously and returns side-effect
//!    [`Action`]s (or use [`dispatch`] to execute them directly against a
//!    [`Haptics`](infrastructure::haptics::Haptics) capability)
//! 3. The render layer takes a fresh [`StoreViewModel`] snapshot and redraws
//! 4. The overlay and toast widgets report their close/countdown callbacks
//!    back as [`Event::DismissDetail`] / [`Event::DismissToast`]
//!
//! All mutation is single-threaded and synchronous within one event; the
//! only asynchronous element (the toast countdown) is owned by the external
//! widget.
//!
//! # Example
//!
//! ```
//! use shopfront::{dispatch, initialize, Config, Event};
//! use shopfront::infrastructure::haptics::NoopHaptics;
//!
//! let mut state = initialize(&Config::default());
//!
//! // Two presses on the headphones' add button.
//! for _ in 0..2 {
//!     dispatch(
//!         &mut state,
//!         &Event::PressAddToCart { id: 1, from_detail: false },
//!         &NoopHaptics,
//!     )?;
//! }
//!
//! let vm = state.compute_viewmodel();
//! let summary = vm.cart_summary.expect("cart is non-empty");
//! assert_eq!(summary.items_label, "2 items");
//! assert_eq!(summary.total_display, "$259.98");
//! # Ok::<(), shopfront::domain::ShopError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{dispatch, handle_event, Action, AppState, Event, Severity};
pub use domain::{Catalog, Product, ProductId, Result, ShopError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Host configuration for embedding the storefront core.
///
/// Values typically arrive from the host application's own configuration
/// system as a string map; see [`Config::from_map`].
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Built-in theme name to use.
    ///
    /// Options: `light`, `dark`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing level for the optional subscriber.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from a host-provided string map.
    ///
    /// Unknown keys are ignored; missing keys fall back to defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use shopfront::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "dark".to_string());
    /// map.insert("trace_level".to_string(), "debug".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("dark"));
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        Self {
            theme_name: map.get("theme").cloned(),
            theme_file: map.get("theme_file").cloned(),
            trace_level: map.get("trace_level").cloned(),
        }
    }
}

/// Initializes application state from configuration.
///
/// Creates an [`AppState`] over the seed catalog with the resolved theme.
/// Theme resolution cascades: `theme_file` if set, else `theme_name`, else
/// the default palette; each failure is logged at debug level and falls back
/// rather than erroring, so initialization always succeeds.
///
/// # Example
///
/// ```
/// use shopfront::{initialize, Config};
///
/// let state = initialize(&Config {
///     theme_name: Some("dark".to_string()),
///     ..Default::default()
/// });
/// assert_eq!(state.catalog.len(), 6);
/// assert!(state.cart.is_empty());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing storefront state");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme name, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(Catalog::seed(), theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_map_ignores_unknown_keys() {
        let mut map = BTreeMap::new();
        map.insert("theme".to_string(), "light".to_string());
        map.insert("scan_depth".to_string(), "4".to_string());

        let config = Config::from_map(&map);
        assert_eq!(config.theme_name.as_deref(), Some("light"));
        assert!(config.theme_file.is_none());
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn initialize_builds_seed_catalog_with_closed_overlay() {
        let state = initialize(&Config::default());
        assert_eq!(state.catalog.len(), 6);
        assert!(state.cart.is_empty());
        assert!(!state.selection.detail_visible());
        assert!(state.selection.selected().is_none());
        assert!(!state.toast.visible());
        assert_eq!(state.theme, Theme::light());
    }

    #[test]
    fn initialize_falls_back_on_unknown_theme_name() {
        let state = initialize(&Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Default::default()
        });
        assert_eq!(state.theme, Theme::default());
    }

    #[test]
    fn initialize_resolves_builtin_theme_by_name() {
        let state = initialize(&Config {
            theme_name: Some("dark".to_string()),
            ..Default::default()
        });
        assert_eq!(state.theme, Theme::dark());
    }

    #[test]
    fn initialize_falls_back_on_unreadable_theme_file() {
        let state = initialize(&Config {
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            ..Default::default()
        });
        assert_eq!(state.theme, Theme::default());
    }
}
