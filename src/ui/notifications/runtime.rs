// SPDX-License-Identifier: MPL-2.0
//! Turns notification effects into Iced tasks.
//!
//! Delays are `tokio` sleeps. The dismiss sleep is abortable: its handle is
//! kept by the [`Driver`] and aborted when the timer is cancelled, re-armed
//! or the notification is unmounted. Transition sleeps always run out.

use super::notification::{Effect, Message, Notification};
use iced::task::Handle;
use iced::Task;
use std::time::Duration;

/// A notification together with the task that runs its dismiss timer.
#[derive(Debug)]
pub struct Driver {
    notification: Notification,
    timer: Option<Handle>,
}

impl Driver {
    #[must_use]
    pub fn new(notification: Notification) -> Self {
        Self {
            notification,
            timer: None,
        }
    }

    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    /// Whether a dismiss sleep is currently scheduled.
    #[must_use]
    pub fn has_running_timer(&self) -> bool {
        self.timer.as_ref().is_some_and(|handle| !handle.is_aborted())
    }

    /// Mounts the notification and returns the tasks that drive it.
    pub fn mount(&mut self) -> Task<Message> {
        let effects = self.notification.mount();
        self.run(effects)
    }

    /// Feeds `message` to the notification and returns the follow-up tasks.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.notification.handle(message);
        self.run(effects)
    }

    /// Unmounts the notification, aborting its dismiss sleep.
    pub fn unmount(&mut self) -> Task<Message> {
        let effects = self.notification.unmount();
        self.run(effects)
    }

    /// Performs `effects`, then drops the sleep of a timer the notification
    /// no longer holds (fired, cancelled or unmounted).
    fn run(&mut self, effects: Vec<Effect>) -> Task<Message> {
        let task = self.perform(effects);
        if !self.notification.has_pending_timer() {
            self.abort_timer();
        }
        task
    }

    /// Schedules the work described by `effects`.
    pub fn perform(&mut self, effects: Vec<Effect>) -> Task<Message> {
        let tasks: Vec<_> = effects
            .into_iter()
            .map(|effect| self.task_for(effect))
            .collect();
        Task::batch(tasks)
    }

    fn task_for(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::ArmTimer(timer) => {
                let (task, handle) =
                    after(timer.after, move || Message::TimerElapsed(timer.token)).abortable();
                self.abort_timer();
                self.timer = Some(handle.abort_on_drop());
                task
            }
            Effect::RunTransition { phase, after: delay } => {
                after(delay, move || Message::TransitionFinished(phase))
            }
            Effect::CancelTimer | Effect::Removed => {
                self.abort_timer();
                Task::none()
            }
        }
    }

    fn abort_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            handle.abort();
        }
    }
}

fn after(delay: Duration, message: impl FnOnce() -> Message + Send + 'static) -> Task<Message> {
    Task::perform(async move { tokio::time::sleep(delay).await }, move |()| message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{NotificationConfig, Phase};

    fn driver(config: NotificationConfig) -> Driver {
        Driver::new(Notification::new(config))
    }

    #[test]
    fn arm_effect_schedules_abortable_timer() {
        let mut driver = driver(NotificationConfig::new().duration_ms(100));
        let _ = driver.mount();
        assert!(driver.has_running_timer());
    }

    #[test]
    fn zero_duration_schedules_no_timer() {
        let mut driver = driver(NotificationConfig::new().duration(Duration::ZERO));
        let _ = driver.mount();
        assert!(!driver.has_running_timer());
    }

    #[test]
    fn cancel_effect_aborts_running_timer() {
        let mut driver = driver(NotificationConfig::new());
        let _ = driver.mount();

        let _ = driver.update(Message::PointerEntered);
        assert!(!driver.has_running_timer());

        let _ = driver.update(Message::PointerExited);
        assert!(driver.has_running_timer());
    }

    #[test]
    fn hover_cycles_keep_a_single_timer() {
        let mut driver = driver(NotificationConfig::new());
        let _ = driver.mount();
        for _ in 0..5 {
            let _ = driver.update(Message::PointerEntered);
            let _ = driver.update(Message::PointerExited);
        }
        assert!(driver.has_running_timer());
        assert!(driver.notification().has_pending_timer());
    }

    #[test]
    fn pause_aborts_the_scheduled_sleep() {
        let mut driver = driver(NotificationConfig::new());
        let _ = driver.mount();
        let first = driver.timer.clone().expect("timer scheduled");

        let _ = driver.update(Message::PointerEntered);
        assert!(first.is_aborted());
    }

    #[test]
    fn rearm_aborts_previous_sleep() {
        let mut driver = driver(NotificationConfig::new());
        let _ = driver.mount();
        let first = driver.timer.clone().expect("timer scheduled");

        // Resuming an armed timer re-arms it from the full duration.
        let _ = driver.update(Message::PointerExited);
        assert!(first.is_aborted());
        assert!(driver.has_running_timer());
    }

    #[test]
    fn fired_timer_releases_its_handle() {
        let mut driver = driver(NotificationConfig::new().transition(Duration::ZERO, Duration::ZERO));
        let effects = driver.notification.mount();
        let token = effects
            .iter()
            .find_map(|effect| match effect {
                Effect::ArmTimer(timer) => Some(timer.token),
                _ => None,
            })
            .expect("timer armed");
        let _ = driver.perform(effects);

        let _ = driver.update(Message::TimerElapsed(token));
        assert!(!driver.has_running_timer());
        assert!(!driver.notification().is_visible());
    }

    #[test]
    fn close_request_aborts_timer() {
        let mut driver = driver(NotificationConfig::new());
        let _ = driver.mount();
        let _ = driver.update(Message::CloseRequested);
        assert!(!driver.has_running_timer());
    }

    #[test]
    fn unmount_aborts_timer() {
        let mut driver = driver(NotificationConfig::new());
        let _ = driver.mount();
        let _ = driver.unmount();
        assert!(!driver.has_running_timer());
        assert!(driver.notification().is_unmounted());
    }

    #[test]
    fn transition_and_removal_leave_timer_slot_empty() {
        let mut driver = driver(NotificationConfig::new().duration(Duration::ZERO));
        let _ = driver.perform(vec![
            Effect::RunTransition {
                phase: Phase::Entering,
                after: Duration::from_millis(5),
            },
            Effect::Removed,
        ]);
        assert!(!driver.has_running_timer());
    }
}
