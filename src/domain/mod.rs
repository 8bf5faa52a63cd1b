//! Domain layer for the storefront core.
//!
//! This module contains the core domain types for the storefront, independent
//! of rendering or host concerns. It follows domain-driven design principles
//! by keeping business rules isolated from external dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`product`]: Product model and price formatting
//! - [`catalog`]: The fixed, ordered product catalog
//!
//! # Examples
//!
//! ```
//! use shopfront::domain::Catalog;
//!
//! let catalog = Catalog::seed();
//! let first = &catalog.products()[0];
//! assert_eq!(first.name, "Wireless Headphones");
//! ```

pub mod catalog;
pub mod error;
pub mod product;

pub use catalog::Catalog;
pub use error::{Result, ShopError};
pub use product::{format_price, Product, ProductId};
