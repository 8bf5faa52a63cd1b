//! Product domain model and display formatting.
//!
//! This module defines the core `Product` type representing a single catalog
//! entry. Products are immutable for the lifetime of a session: they are
//! created once from the seed catalog at initialization and never mutated or
//! destroyed afterwards.

use serde::{Deserialize, Serialize};

/// Number of cents in one currency unit.
const CENTS_PER_UNIT: u32 = 100;

/// Unique identifier of a catalog product.
///
/// Positive and unique within the catalog. Cart lines reference products by
/// id only; an id with no matching catalog entry resolves to safe defaults
/// (zero price, empty name) rather than failing.
pub type ProductId = u32;

/// A purchasable item in the storefront catalog.
///
/// Products are value objects: cloning one identifies the same catalog entry.
/// Prices are stored as integer cents to keep arithmetic exact; the
/// two-decimal currency surface is produced by [`Product::price_display`].
///
/// # Fields
///
/// - `id`: Unique positive identifier, referenced by cart lines
/// - `name`: Display name shown on cards and in toasts
/// - `price_cents`: Non-negative price in cents (e.g. `12999` for $129.99)
/// - `emoji`: Glyph used as placeholder imagery
/// - `rating`: Review score in `[0, 5]`, one decimal shown
/// - `description`: Long-form copy for the detail overlay
/// - `category`: Merchandising category label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price_cents: u32,
    pub emoji: String,
    pub rating: f32,
    pub description: String,
    pub category: String,
}

impl Product {
    /// Formats the price with a currency symbol and two decimals.
    ///
    /// # Examples
    ///
    /// ```
    /// use shopfront::domain::Catalog;
    ///
    /// let catalog = Catalog::seed();
    /// let headphones = catalog.lookup(1).unwrap();
    /// assert_eq!(headphones.price_display(), "$129.99");
    /// ```
    #[must_use]
    pub fn price_display(&self) -> String {
        format_price(self.price_cents)
    }

    /// Formats the rating with one decimal place (e.g. `"4.5"`).
    #[must_use]
    pub fn rating_display(&self) -> String {
        format!("{:.1}", self.rating)
    }
}

/// Formats an amount of cents as `"$D.CC"`.
///
/// Shared by product prices and cart totals so both surfaces render
/// identically.
#[must_use]
pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / CENTS_PER_UNIT, cents % CENTS_PER_UNIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: 1,
            name: "Wireless Headphones".to_string(),
            price_cents: 12999,
            emoji: "🎧".to_string(),
            rating: 4.5,
            description: "Premium noise-canceling wireless headphones.".to_string(),
            category: "Audio".to_string(),
        }
    }

    #[test]
    fn price_display_has_two_decimals() {
        assert_eq!(product().price_display(), "$129.99");
    }

    #[test]
    fn format_price_pads_cents() {
        assert_eq!(format_price(0), "$0.00");
        assert_eq!(format_price(5), "$0.05");
        assert_eq!(format_price(29999), "$299.99");
        assert_eq!(format_price(100), "$1.00");
    }

    #[test]
    fn rating_display_keeps_one_decimal() {
        assert_eq!(product().rating_display(), "4.5");
        let mut p = product();
        p.rating = 5.0;
        assert_eq!(p.rating_display(), "5.0");
    }
}
