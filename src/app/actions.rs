//! Actions representing side effects to be executed by the host runtime.
//!
//! This module defines the [`Action`] type, imperative commands produced by
//! the event handler after processing a user intent. Actions bridge pure
//! state transformations and effectful operations — here, requesting haptic
//! feedback from the platform.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The host executes
//! them in sequence (see [`dispatch`](crate::app::handler::dispatch)).

use crate::infrastructure::haptics::HapticIntensity;

/// Commands representing side effects to be executed by the host runtime.
///
/// Actions are produced by the event handler and executed by the action
/// processor. They represent the boundary between pure state transformations
/// and effectful platform calls; none of them feed a value back into state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Requests a fire-and-forget haptic cue from the platform.
    ///
    /// Emitted alongside the press intents that warrant tactile feedback.
    /// Failures (e.g. unsupported device) are swallowed by the haptic
    /// collaborator and never surface back into the core.
    TriggerHaptic(HapticIntensity),
}
