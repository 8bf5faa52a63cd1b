//! Infrastructure layer for platform capability boundaries.
//!
//! Hosts inject concrete implementations of these capabilities; the state
//! core only ever sees the trait surface.
//!
//! # Organization
//!
//! - [`haptics`]: Fire-and-forget haptic feedback capability and stand-ins

pub mod haptics;

pub use haptics::{HapticIntensity, Haptics, NoopHaptics, RecordingHaptics};
