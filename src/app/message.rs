// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::notifications::{self, Kind, NotificationId};
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show a sample toast of the given kind (`None` for an untyped toast).
    Spawn(Option<Kind>),
    /// Show an error toast that never closes by itself.
    SpawnSticky,
    /// Forwarded toast message.
    Toast(NotificationId, notifications::Message),
    /// Remove every toast at once, skipping the exit fade.
    UnmountAll,
    /// Attach or detach the overlay root.
    ToggleOverlay,
    /// Redraw while a toast is fading.
    Tick(Instant),
}

/// Events raised by toast hooks and drained after each update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    Clicked(NotificationId),
    WillUnmount {
        id: NotificationId,
        height: f32,
        top: f32,
    },
    Closed(NotificationId),
}

/// Runtime flags passed from `main.rs` to the application.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional auto-dismiss duration override in milliseconds (`--duration`).
    pub duration_ms: Option<u64>,
}
