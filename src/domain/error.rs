//! Error types for the storefront core.
//!
//! This module defines the centralized error type [`ShopError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! The interaction core itself is infallible by design: cart, selection, and
//! toast operations never fail, and unknown catalog references degrade to safe
//! defaults instead of raising. The variants here exist for the configuration
//! surface (theme files, host configuration) only.

use thiserror::Error;

/// The main error type for storefront operations.
///
/// Consolidates the error conditions that can occur while embedding the core:
/// theme loading, host configuration parsing, and the I/O those involve. Most
/// variants carry a plain description; I/O errors convert automatically via
/// `#[from]`.
///
/// # Examples
///
/// ```
/// use shopfront::domain::ShopError;
///
/// fn validate_config() -> Result<(), ShopError> {
///     Err(ShopError::Config("missing required field".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum ShopError {
    /// Theme parsing or application failed.
    ///
    /// Occurs when a theme file cannot be parsed or references an unknown
    /// built-in theme name. The string describes what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations (theme file reads).
    /// Automatically converts from `std::io::Error` using the `#[from]`
    /// attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for storefront operations.
///
/// This is a type alias for `std::result::Result<T, ShopError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, ShopError>;
