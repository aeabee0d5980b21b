// SPDX-License-Identifier: MPL-2.0
//! Caller hooks invoked by a notification.
//!
//! Every hook is optional; an absent hook behaves as a no-op. Hooks run on
//! the update loop and are not guarded: a panicking hook propagates to the
//! host.

use std::fmt;

type Callback = Box<dyn FnMut()>;
type ReflowCallback = Box<dyn FnMut(f32, f32)>;

/// Set of optional callbacks a host hands to a notification.
#[derive(Default)]
pub struct Hooks {
    on_click: Option<Callback>,
    on_close: Option<Callback>,
    on_will_unmount: Option<ReflowCallback>,
}

impl Hooks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when the toast body is clicked.
    #[must_use]
    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    /// Called once, after the exit transition completed.
    #[must_use]
    pub fn on_close(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(f));
        self
    }

    /// Called once with `(height, top)` right before `on_close`, so a
    /// manager can reflow the remaining toasts.
    #[must_use]
    pub fn on_will_unmount(mut self, f: impl FnMut(f32, f32) + 'static) -> Self {
        self.on_will_unmount = Some(Box::new(f));
        self
    }

    pub(crate) fn click(&mut self) {
        if let Some(f) = self.on_click.as_mut() {
            f();
        }
    }

    pub(crate) fn close(&mut self) {
        if let Some(f) = self.on_close.as_mut() {
            f();
        }
    }

    pub(crate) fn will_unmount(&mut self, height: f32, top: f32) {
        if let Some(f) = self.on_will_unmount.as_mut() {
            f(height, top);
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("on_click", &self.on_click.is_some())
            .field("on_close", &self.on_close.is_some())
            .field("on_will_unmount", &self.on_will_unmount.is_some())
            .finish()
    }
}
