//! UI layer: view models and theming.
//!
//! Rendering itself is a host concern; this layer only defines the
//! display-ready snapshot types the render layer consumes and the color
//! palettes threaded through them.
//!
//! # Organization
//!
//! - [`viewmodel`]: Immutable render snapshot types
//! - [`theme`]: Built-in palettes and TOML theme files

pub mod theme;
pub mod viewmodel;

pub use theme::Theme;
pub use viewmodel::StoreViewModel;
