// SPDX-License-Identifier: MPL-2.0
//! Single-slot dismiss timer.
//!
//! The timer never sleeps itself. Arming hands out an [`ArmedTimer`] that the
//! host schedules; when the delay elapses the host feeds the token back. Only
//! the token of the latest arm is accepted, so cancelling or re-arming
//! invalidates any in-flight delay immediately.

use std::time::Duration;

/// Identifies one arming of a [`DismissTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// A delay the host must schedule, reporting `token` back once it elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmedTimer {
    pub token: TimerToken,
    pub after: Duration,
}

#[derive(Debug, Default)]
pub struct DismissTimer {
    generation: u64,
    armed: Option<TimerToken>,
}

impl DismissTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer, replacing any pending one.
    pub fn arm(&mut self, after: Duration) -> ArmedTimer {
        self.generation = self.generation.wrapping_add(1);
        let token = TimerToken(self.generation);
        self.armed = Some(token);
        ArmedTimer { token, after }
    }

    /// Cancels the pending timer. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.armed.take().is_some()
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Consumes an elapsed token.
    ///
    /// Returns `true` only for the currently armed token; the timer is then
    /// disarmed. Stale tokens are ignored.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.armed == Some(token) {
            self.armed = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_timer_is_idle() {
        let timer = DismissTimer::new();
        assert!(!timer.is_armed());
    }

    #[test]
    fn fire_accepts_current_token_once() {
        let mut timer = DismissTimer::new();
        let armed = timer.arm(Duration::from_millis(100));
        assert_eq!(armed.after, Duration::from_millis(100));
        assert!(timer.fire(armed.token));
        assert!(!timer.fire(armed.token));
        assert!(!timer.is_armed());
    }

    #[test]
    fn rearming_invalidates_previous_token() {
        let mut timer = DismissTimer::new();
        let first = timer.arm(Duration::from_millis(100));
        let second = timer.arm(Duration::from_millis(100));
        assert_ne!(first.token, second.token);
        assert!(!timer.fire(first.token));
        assert!(timer.fire(second.token));
    }

    #[test]
    fn cancel_invalidates_token_and_is_idempotent() {
        let mut timer = DismissTimer::new();
        let armed = timer.arm(Duration::from_millis(100));
        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert!(!timer.fire(armed.token));
    }
}
