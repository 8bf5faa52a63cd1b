//! Color themes for the render layer.
//!
//! Colors are plain hex strings handed through the view model; the core does
//! no color math. Two built-in palettes ship with the crate (`light`, the
//! original screen's iOS-style palette, and `dark`), and hosts may load a
//! custom palette from a TOML file.
//!
//! # Custom theme file format
//!
//! ```toml
//! background = "#F9FAFB"
//! surface = "#FFFFFF"
//! text_primary = "#1C1C1E"
//! text_secondary = "#8E8E93"
//! accent = "#007AFF"
//! price = "#FF9500"
//! info = "#007AFF"
//! success = "#34C759"
//! warning = "#FF9500"
//! error = "#FF3B30"
//! ```

use crate::app::toast::Severity;
use crate::domain::error::{Result, ShopError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Color scheme consulted during view model computation.
///
/// All fields are hex color strings (`"#RRGGBB"`). Deserializable from TOML
/// for custom theme files; missing files or malformed TOML surface as
/// [`ShopError::Theme`] / [`ShopError::Io`] and callers fall back to the
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Screen background.
    pub background: String,
    /// Card and panel surfaces.
    pub surface: String,
    /// Primary text.
    pub text_primary: String,
    /// Secondary text (subtitles, categories).
    pub text_secondary: String,
    /// Interactive accent (buttons, links).
    pub accent: String,
    /// Price highlight.
    pub price: String,
    /// Info toast color.
    pub info: String,
    /// Success toast color.
    pub success: String,
    /// Warning toast color.
    pub warning: String,
    /// Error toast color.
    pub error: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// The light palette used by the original screen.
    #[must_use]
    pub fn light() -> Self {
        Self {
            background: "#F9FAFB".to_string(),
            surface: "#FFFFFF".to_string(),
            text_primary: "#1C1C1E".to_string(),
            text_secondary: "#8E8E93".to_string(),
            accent: "#007AFF".to_string(),
            price: "#FF9500".to_string(),
            info: "#007AFF".to_string(),
            success: "#34C759".to_string(),
            warning: "#FF9500".to_string(),
            error: "#FF3B30".to_string(),
        }
    }

    /// A dark counterpart of the light palette.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: "#000000".to_string(),
            surface: "#1C1C1E".to_string(),
            text_primary: "#FFFFFF".to_string(),
            text_secondary: "#8E8E93".to_string(),
            accent: "#0A84FF".to_string(),
            price: "#FF9F0A".to_string(),
            info: "#0A84FF".to_string(),
            success: "#30D158".to_string(),
            warning: "#FF9F0A".to_string(),
            error: "#FF453A".to_string(),
        }
    }

    /// Resolves a built-in theme by name.
    ///
    /// Returns `None` for unknown names; callers log and fall back to the
    /// default.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::light()),
            "dark" => Some(Self::dark()),
            _ => None,
        }
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Io`] if the file cannot be read and
    /// [`ShopError::Theme`] if its contents are not a valid theme table.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&contents).map_err(|e| ShopError::Theme(e.to_string()))
    }

    /// Returns the toast color for a severity.
    #[must_use]
    pub fn severity_color(&self, severity: Severity) -> &str {
        match severity {
            Severity::Info => &self.info,
            Severity::Success => &self.success,
            Severity::Warning => &self.warning,
            Severity::Error => &self.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_theme_is_light() {
        assert_eq!(Theme::default(), Theme::light());
    }

    #[test]
    fn from_name_resolves_builtins() {
        assert_eq!(Theme::from_name("light"), Some(Theme::light()));
        assert_eq!(Theme::from_name("dark"), Some(Theme::dark()));
        assert_eq!(Theme::from_name("catppuccin"), None);
    }

    #[test]
    fn severity_colors_map_to_palette_fields() {
        let theme = Theme::light();
        assert_eq!(theme.severity_color(Severity::Info), "#007AFF");
        assert_eq!(theme.severity_color(Severity::Success), "#34C759");
        assert_eq!(theme.severity_color(Severity::Warning), "#FF9500");
        assert_eq!(theme.severity_color(Severity::Error), "#FF3B30");
    }

    #[test]
    fn from_file_round_trips_a_theme() {
        let theme = Theme::dark();
        let serialized = toml::to_string(&theme).expect("serialize theme");

        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(serialized.as_bytes()).expect("write theme");

        let loaded = Theme::from_file(file.path()).expect("load theme");
        assert_eq!(loaded, theme);
    }

    #[test]
    fn from_file_rejects_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(b"background = ").expect("write file");

        let err = Theme::from_file(file.path()).expect_err("malformed theme");
        assert!(matches!(err, ShopError::Theme(_)));
    }

    #[test]
    fn from_file_reports_missing_file_as_io_error() {
        let err = Theme::from_file("/nonexistent/theme.toml").expect_err("missing file");
        assert!(matches!(err, ShopError::Io(_)));
    }
}
