//! Transient notification (toast) state machine.
//!
//! At most one toast exists at a time. Showing a new one while another is
//! visible overwrites it in place with no intermediate hidden transition, so
//! the widget never flickers and the prior message is simply lost. The core
//! never owns a timer: the presentation widget runs its own countdown and
//! calls back into [`Toast::dismiss`] when it elapses.

use serde::{Deserialize, Serialize};

/// Severity of a toast message, controlling its visual treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Neutral informational message.
    Info,
    /// Positive confirmation (e.g. item added to cart).
    Success,
    /// Something the user should notice but that blocked nothing.
    Warning,
    /// Failure surfaced to the user.
    Error,
}

/// Single-slot toast state: `Hidden` → `show()` → `Visible` → `dismiss()` → `Hidden`.
///
/// `message` and `severity` persist after dismissal; only `visible` gates
/// presentation. There is no queue — content shown over an in-flight toast
/// never reappears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    message: String,
    severity: Severity,
    visible: bool,
}

impl Default for Toast {
    fn default() -> Self {
        Self {
            message: String::new(),
            severity: Severity::Info,
            visible: false,
        }
    }
}

impl Toast {
    /// Creates a hidden toast with empty content.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Presents `message` at `severity`.
    ///
    /// Valid in any state. When already visible this overwrites the content
    /// in place — `visible` never passes through `false`, and the widget is
    /// expected to restart its own countdown.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        tracing::debug!(message = %message, severity = ?severity, replacing = self.visible, "toast shown");
        self.message = message;
        self.severity = severity;
        self.visible = true;
    }

    /// Hides the toast.
    ///
    /// Invoked by the widget when its countdown elapses, or by an explicit
    /// user action. Idempotent when already hidden.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// Current (or last shown) message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Current (or last shown) severity.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Whether the toast is on screen.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let toast = Toast::new();
        assert!(!toast.visible());
        assert_eq!(toast.message(), "");
        assert_eq!(toast.severity(), Severity::Info);
    }

    #[test]
    fn show_makes_toast_visible_with_content() {
        let mut toast = Toast::new();
        toast.show("Smart Watch added to cart!", Severity::Success);
        assert!(toast.visible());
        assert_eq!(toast.message(), "Smart Watch added to cart!");
        assert_eq!(toast.severity(), Severity::Success);
    }

    #[test]
    fn second_show_overwrites_without_hiding() {
        let mut toast = Toast::new();
        toast.show("first", Severity::Success);
        assert!(toast.visible());
        toast.show("second", Severity::Warning);
        // The slot stayed visible throughout and only the second call's
        // content remains observable.
        assert!(toast.visible());
        assert_eq!(toast.message(), "second");
        assert_eq!(toast.severity(), Severity::Warning);
    }

    #[test]
    fn show_after_dismiss_never_transits_through_hidden_between_shows() {
        let mut toast = Toast::new();
        toast.show("first", Severity::Info);
        toast.dismiss();
        assert!(!toast.visible());
        toast.show("second", Severity::Info);
        assert!(toast.visible());
        toast.show("third", Severity::Error);
        assert!(toast.visible());
        assert_eq!(toast.message(), "third");
        assert_eq!(toast.severity(), Severity::Error);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut toast = Toast::new();
        toast.dismiss();
        assert!(!toast.visible());
        toast.show("hello", Severity::Info);
        toast.dismiss();
        toast.dismiss();
        assert!(!toast.visible());
        assert_eq!(toast.message(), "hello");
    }
}
