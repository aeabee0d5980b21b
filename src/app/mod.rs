// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a stack of toast notifications.
//!
//! `App` plays the overlay manager: it owns the live notifications, decides
//! where each new toast goes, reflows the stack when a toast reports its
//! geometry on the way out, and drops it once `on_close` has fired.

pub mod config;
mod message;
pub mod paths;
pub mod stacking;
mod subscription;
mod update;
mod view;

pub use message::{Flags, HostEvent, Message};

use crate::ui::notifications::{Defaults, Driver, MountPoint, NotificationId, OverlayRoot};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;
use tokio::sync::mpsc;

/// Root Iced application state.
pub struct App {
    defaults: Defaults,
    toasts: Vec<Driver>,
    overlay: Option<OverlayRoot>,
    events_tx: mpsc::UnboundedSender<HostEvent>,
    events_rx: mpsc::UnboundedReceiver<HostEvent>,
    /// Shown above the controls when `settings.toml` could not be read.
    config_warning: Option<String>,
    /// Hook events seen so far, newest last.
    log: Vec<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("toasts", &self.toasts.len())
            .field("overlay", &self.overlay)
            .finish_non_exhaustive()
    }
}

impl Default for App {
    fn default() -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            defaults: Defaults::default(),
            toasts: Vec::new(),
            overlay: Some(OverlayRoot::top_right()),
            events_tx,
            events_rx,
            config_warning: None,
            log: Vec::new(),
        }
    }
}

impl MountPoint for App {
    fn overlay_root(&self) -> Option<OverlayRoot> {
        self.overlay
    }
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(
            config::WINDOW_DEFAULT_WIDTH as f32,
            config::WINDOW_DEFAULT_HEIGHT as f32,
        ),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 takes an `Fn` boot closure; flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads `settings.toml` and applies CLI overrides.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let mut defaults = config.defaults();
        if let Some(ms) = flags.duration_ms {
            defaults.duration =
                std::time::Duration::from_millis(ms.min(config::MAX_DURATION_MS));
        }

        if let Some(warning) = &config_warning {
            tracing::warn!(%warning, "using default settings");
        }
        tracing::debug!(?defaults, "toast defaults resolved");

        let app = App {
            defaults,
            config_warning,
            ..Self::default()
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.toasts.len() {
            0 => String::from("Iced Toast"),
            n => format!("Iced Toast ({n})"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.is_animating(Instant::now()))
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn find_mut(&mut self, id: NotificationId) -> Option<&mut Driver> {
        self.toasts
            .iter_mut()
            .find(|toast| toast.notification().id() == id)
    }

    fn is_animating(&self, now: Instant) -> bool {
        self.toasts
            .iter()
            .any(|toast| toast.notification().is_animating(now))
    }
}
