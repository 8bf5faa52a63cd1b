//! Haptic feedback capability boundary.
//!
//! The state core never talks to the platform directly: haptic cues are
//! requested through the [`Haptics`] trait so the core can be exercised with
//! a no-op or recording stand-in. Calls are fire-and-forget; implementations
//! swallow platform failures (e.g. unsupported device) and never surface them
//! back into the core.

use std::sync::Mutex;

/// Intensity of a requested haptic cue.
///
/// Mirrors the platform impact-feedback styles: product presses use `Light`,
/// add-to-cart uses `Medium`. `Heavy` is unused by the current intents but
/// part of the platform surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticIntensity {
    /// Subtle tap, used for selection and navigation presses.
    Light,
    /// Firmer tap, used to confirm an add-to-cart.
    Medium,
    /// Strongest tap. Reserved.
    Heavy,
}

/// Fire-and-forget haptic feedback capability.
///
/// Implementations must not block and must not fail observably; a device
/// without haptics simply does nothing.
pub trait Haptics {
    /// Requests a haptic cue of the given intensity.
    fn trigger(&self, intensity: HapticIntensity);
}

/// A [`Haptics`] implementation that does nothing.
///
/// Default stand-in for hosts without a haptic engine and for tests that do
/// not assert on feedback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHaptics;

impl Haptics for NoopHaptics {
    fn trigger(&self, _intensity: HapticIntensity) {}
}

/// A [`Haptics`] implementation that records every request.
///
/// Test stand-in: lets tests assert which cues the orchestration layer
/// emitted and in what order.
#[derive(Debug, Default)]
pub struct RecordingHaptics {
    recorded: Mutex<Vec<HapticIntensity>>,
}

impl RecordingHaptics {
    /// Creates a recorder with no requests captured yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the captured requests in emission order.
    #[must_use]
    pub fn recorded(&self) -> Vec<HapticIntensity> {
        self.recorded.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl Haptics for RecordingHaptics {
    fn trigger(&self, intensity: HapticIntensity) {
        if let Ok(mut recorded) = self.recorded.lock() {
            recorded.push(intensity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_haptics_accepts_any_intensity() {
        let haptics = NoopHaptics;
        haptics.trigger(HapticIntensity::Light);
        haptics.trigger(HapticIntensity::Medium);
        haptics.trigger(HapticIntensity::Heavy);
    }

    #[test]
    fn recording_haptics_captures_in_order() {
        let haptics = RecordingHaptics::new();
        haptics.trigger(HapticIntensity::Medium);
        haptics.trigger(HapticIntensity::Light);
        assert_eq!(
            haptics.recorded(),
            vec![HapticIntensity::Medium, HapticIntensity::Light]
        );
    }
}
