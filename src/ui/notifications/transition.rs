// SPDX-License-Identifier: MPL-2.0
//! Enter/exit transition keyed off a boolean presence flag.
//!
//! ```text
//!   in=true              finish(Entering)
//! ──────────► Entering ───────────────────► Entered
//!                │                             │
//!                │ in=false                    │ in=false
//!                ▼                             ▼
//!             Exiting ◄────────────────────────┘
//!                │ finish(Exiting)
//!                ▼
//!             Exited
//! ```
//!
//! Every phase change is reported as a [`PhaseEvent`]. `Exited` is reported
//! exactly once per "out" transition and always after `Exit`. Completion
//! reports name the phase they complete; a report for a phase that is no
//! longer current is ignored.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Entering,
    Entered,
    Exiting,
    Exited,
}

/// Phase callbacks, in the order they can occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    Enter,
    Entered,
    Exit,
    Exited,
}

#[derive(Debug, Clone)]
pub struct Transition {
    phase: Phase,
    since: Instant,
    enter: Duration,
    exit: Duration,
}

impl Transition {
    /// Creates a transition that starts entering immediately.
    #[must_use]
    pub fn entering(enter: Duration, exit: Duration) -> Self {
        Self {
            phase: Phase::Entering,
            since: Instant::now(),
            enter,
            exit,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// How long the current phase runs before the host should report its
    /// completion. Settled phases return `None`.
    #[must_use]
    pub fn pending(&self) -> Option<Duration> {
        match self.phase {
            Phase::Entering => Some(self.enter),
            Phase::Exiting => Some(self.exit),
            Phase::Entered | Phase::Exited => None,
        }
    }

    /// Restarts the clock of the current phase at `now`.
    pub fn restart(&mut self, now: Instant) {
        self.since = now;
    }

    /// Sets the presence flag.
    pub fn set_in(&mut self, present: bool) -> Option<PhaseEvent> {
        match (present, self.phase) {
            (true, Phase::Exiting | Phase::Exited) => {
                self.move_to(Phase::Entering);
                Some(PhaseEvent::Enter)
            }
            (false, Phase::Entering | Phase::Entered) => {
                self.move_to(Phase::Exiting);
                Some(PhaseEvent::Exit)
            }
            _ => None,
        }
    }

    /// Reports that the animation of `phase` finished.
    pub fn finish(&mut self, phase: Phase) -> Option<PhaseEvent> {
        if phase != self.phase {
            return None;
        }
        match phase {
            Phase::Entering => {
                self.move_to(Phase::Entered);
                Some(PhaseEvent::Entered)
            }
            Phase::Exiting => {
                self.move_to(Phase::Exited);
                Some(PhaseEvent::Exited)
            }
            Phase::Entered | Phase::Exited => None,
        }
    }

    /// Whether the phase is still animating at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.pending()
            .is_some_and(|length| now.saturating_duration_since(self.since) < length)
    }

    /// Opacity of the toast at `now`: a linear fade in while entering and a
    /// linear fade out while exiting.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        let progress = |length: Duration| {
            if length.is_zero() {
                1.0
            } else {
                let elapsed = now.saturating_duration_since(self.since);
                (elapsed.as_secs_f32() / length.as_secs_f32()).min(1.0)
            }
        };

        match self.phase {
            Phase::Entering => progress(self.enter),
            Phase::Entered => 1.0,
            Phase::Exiting => 1.0 - progress(self.exit),
            Phase::Exited => 0.0,
        }
    }

    fn move_to(&mut self, phase: Phase) {
        self.phase = phase;
        self.since = Instant::now();
    }
}
