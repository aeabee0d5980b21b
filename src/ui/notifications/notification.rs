// SPDX-License-Identifier: MPL-2.0
//! Lifecycle state machine of a single notification.
//!
//! ```text
//!  Entering ──enter done──► Shown ──request_close──► Exiting ──exit done──► Unmounted
//!      │                                                ▲
//!      └────────────────request_close───────────────────┘
//! ```
//!
//! The state machine performs no I/O. Operations return [`Effect`]s that the
//! host turns into scheduled work (see [`super::runtime`]); results come back
//! as [`Message`]s.

use super::config::NotificationConfig;
use super::hooks::Hooks;
use super::timer::{ArmedTimer, DismissTimer, TimerToken};
use super::transition::{Phase, PhaseEvent, Transition};
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Entering,
    Shown,
    Exiting,
    /// Terminal.
    Unmounted,
}

/// Events a notification reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Pointer entered the toast: pause auto-dismiss.
    PointerEntered,
    /// Pointer left the toast: restart auto-dismiss from the full duration.
    PointerExited,
    /// Toast body clicked.
    Clicked,
    /// Close affordance activated.
    CloseRequested,
    /// A scheduled dismiss delay elapsed.
    TimerElapsed(TimerToken),
    /// A transition phase finished animating.
    TransitionFinished(Phase),
    /// Rendered height reported by layout.
    Measured(f32),
    /// The overlay manager moved the toast.
    Reposition(f32),
}

/// Work the host must carry out on behalf of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Deliver `Message::TimerElapsed(token)` after the delay.
    ArmTimer(ArmedTimer),
    /// Any pending dismiss delay is void.
    CancelTimer,
    /// Deliver `Message::TransitionFinished(phase)` after the delay.
    RunTransition { phase: Phase, after: Duration },
    /// The exit transition completed; the host drops the notification.
    Removed,
}

/// A single toast notification.
#[derive(Debug)]
pub struct Notification {
    id: NotificationId,
    config: NotificationConfig,
    hooks: Hooks,
    mounted: bool,
    visible: bool,
    lifecycle: Lifecycle,
    timer: DismissTimer,
    transition: Transition,
    measured_height: Option<f32>,
    captured_height: Option<f32>,
    top_offset: f32,
}

impl Notification {
    /// Creates an unmounted notification. Call [`Notification::mount`] once it
    /// is inserted into the render tree.
    pub fn new(config: NotificationConfig) -> Self {
        Self::with_id(NotificationId::new(), config)
    }

    /// Creates an unmounted notification under a host-chosen ID, so hooks
    /// built before construction can refer to it.
    pub fn with_id(id: NotificationId, mut config: NotificationConfig) -> Self {
        let hooks = config.take_hooks();
        let transition = Transition::entering(config.enter_duration(), config.exit_duration());
        let top_offset = config.get_top_offset();
        Self {
            id,
            config,
            hooks,
            mounted: false,
            visible: true,
            lifecycle: Lifecycle::Entering,
            timer: DismissTimer::new(),
            transition,
            measured_height: None,
            captured_height: None,
            top_offset,
        }
    }

    /// Starts the enter transition and arms the dismiss timer when the
    /// duration is non-zero. Mounting twice has no effect.
    pub fn mount(&mut self) -> Vec<Effect> {
        if self.mounted || self.lifecycle == Lifecycle::Unmounted {
            return Vec::new();
        }
        self.mounted = true;
        // The fade runs from mount, not from construction.
        self.transition.restart(Instant::now());
        tracing::debug!(id = ?self.id, duration = ?self.config.get_duration(), "notification mounted");

        let mut effects = Vec::with_capacity(2);
        if let Some(after) = self.transition.pending() {
            effects.push(Effect::RunTransition {
                phase: self.transition.phase(),
                after,
            });
        }
        effects.extend(self.start_timer());
        effects
    }

    /// Removes the notification from the render tree without an exit
    /// transition. Cancels any pending timer; no hook fires afterwards.
    pub fn unmount(&mut self) -> Vec<Effect> {
        let had_timer = self.timer.cancel();
        if self.lifecycle != Lifecycle::Unmounted {
            tracing::debug!(id = ?self.id, from = ?self.lifecycle, "notification unmounted by host");
            self.lifecycle = Lifecycle::Unmounted;
        }
        if had_timer {
            vec![Effect::CancelTimer]
        } else {
            Vec::new()
        }
    }

    /// Cancels the pending timer; visibility is unchanged.
    pub fn pause(&mut self) -> Vec<Effect> {
        if self.timer.cancel() {
            vec![Effect::CancelTimer]
        } else {
            Vec::new()
        }
    }

    /// Re-arms the timer from the full duration.
    ///
    /// This restarts the countdown rather than resuming what was left of it.
    pub fn resume(&mut self) -> Vec<Effect> {
        self.start_timer().into_iter().collect()
    }

    /// Hides the notification and begins the exit transition.
    ///
    /// Only the first request has an effect.
    pub fn request_close(&mut self) -> Vec<Effect> {
        if !self.visible || self.lifecycle == Lifecycle::Unmounted {
            return Vec::new();
        }
        self.visible = false;
        self.lifecycle = Lifecycle::Exiting;
        tracing::debug!(id = ?self.id, "notification closing");

        let mut effects = Vec::with_capacity(2);
        if let Some(PhaseEvent::Exit) = self.transition.set_in(false) {
            if let Some(after) = self.transition.pending() {
                effects.push(Effect::RunTransition {
                    phase: Phase::Exiting,
                    after,
                });
            }
        }
        if self.timer.cancel() {
            effects.push(Effect::CancelTimer);
        }
        effects
    }

    /// Invokes the click hook. Never affects visibility.
    pub fn handle_click(&mut self) -> Vec<Effect> {
        if self.lifecycle != Lifecycle::Unmounted {
            self.hooks.click();
        }
        Vec::new()
    }

    /// Handles a notification message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, message: Message) -> Vec<Effect> {
        if self.lifecycle == Lifecycle::Unmounted {
            tracing::trace!(id = ?self.id, ?message, "message after unmount ignored");
            return Vec::new();
        }

        match message {
            Message::PointerEntered => self.pause(),
            Message::PointerExited => self.resume(),
            Message::Clicked => self.handle_click(),
            Message::CloseRequested => self.request_close(),
            Message::TimerElapsed(token) => {
                if self.timer.fire(token) {
                    tracing::debug!(id = ?self.id, "dismiss timer elapsed");
                    self.request_close()
                } else {
                    tracing::trace!(id = ?self.id, ?token, "stale timer token ignored");
                    Vec::new()
                }
            }
            Message::TransitionFinished(phase) => self.finish_transition(phase),
            Message::Measured(height) => {
                self.measured_height = Some(height);
                if self.lifecycle == Lifecycle::Shown && self.captured_height.is_none() {
                    self.captured_height = Some(height);
                }
                Vec::new()
            }
            Message::Reposition(top) => {
                self.top_offset = top;
                Vec::new()
            }
        }
    }

    fn finish_transition(&mut self, phase: Phase) -> Vec<Effect> {
        match self.transition.finish(phase) {
            Some(PhaseEvent::Entered) => {
                self.lifecycle = Lifecycle::Shown;
                self.captured_height = self.measured_height;
                tracing::debug!(id = ?self.id, height = ?self.captured_height, "notification shown");
                Vec::new()
            }
            Some(PhaseEvent::Exited) => {
                self.lifecycle = Lifecycle::Unmounted;
                let height = self.height();
                tracing::debug!(id = ?self.id, height, top = self.top_offset, "notification removed");
                self.hooks.will_unmount(height, self.top_offset);
                self.hooks.close();
                vec![Effect::Removed]
            }
            _ => Vec::new(),
        }
    }

    fn start_timer(&mut self) -> Option<Effect> {
        let duration = self.config.get_duration();
        if duration.is_zero() || !self.visible || !self.mounted {
            return None;
        }
        Some(Effect::ArmTimer(self.timer.arm(duration)))
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn config(&self) -> &NotificationConfig {
        &self.config
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.transition.phase()
    }

    #[must_use]
    pub fn is_unmounted(&self) -> bool {
        self.lifecycle == Lifecycle::Unmounted
    }

    #[must_use]
    pub fn has_pending_timer(&self) -> bool {
        self.timer.is_armed()
    }

    /// Height reported to the manager: captured on enter completion, else
    /// the latest measurement.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.captured_height
            .or(self.measured_height)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn top_offset(&self) -> f32 {
        self.top_offset
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.lifecycle != Lifecycle::Unmounted && self.transition.is_animating(now)
    }

    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        self.transition.opacity(now)
    }
}
