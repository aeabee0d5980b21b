// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Frame interval used while a toast fades.
const FRAME: Duration = Duration::from_millis(16);

/// Redraws at frame rate while any toast is animating.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(FRAME).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
