// SPDX-License-Identifier: MPL-2.0
//! Update logic for the demo application.
//!
//! Toast hooks cannot borrow the application, so they post [`HostEvent`]s on
//! a channel that is drained right after the toast message that raised them.

use super::{stacking, App, HostEvent, Message};
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::{
    self, Content, Driver, Fragment, Hooks, Kind, Notification, NotificationConfig,
    NotificationId, OverlayRoot,
};
use iced::Task;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Vertical gap between stacked toasts.
pub const GAP: f32 = spacing::MD;

/// Entries kept in the event log.
const LOG_LIMIT: usize = 6;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Spawn(kind) => {
            let config = sample(NotificationConfig::from_defaults(app.defaults), kind);
            spawn(app, config)
        }
        Message::SpawnSticky => {
            let config = NotificationConfig::from_defaults(app.defaults)
                .kind(Kind::Error)
                .title("Sync failed")
                .message("The server did not answer. Close this toast when done.")
                .duration(Duration::ZERO);
            spawn(app, config)
        }
        Message::Toast(id, message) => handle_toast(app, id, message),
        Message::UnmountAll => {
            let tasks: Vec<_> = app
                .toasts
                .iter_mut()
                .map(|toast| {
                    let id = toast.notification().id();
                    toast.unmount().map(move |m| Message::Toast(id, m))
                })
                .collect();
            tracing::info!(count = app.toasts.len(), "unmounting all toasts");
            app.toasts.clear();
            Task::batch(tasks)
        }
        Message::ToggleOverlay => {
            app.overlay = match app.overlay {
                Some(_) => None,
                None => Some(OverlayRoot::top_right()),
            };
            tracing::info!(attached = app.overlay.is_some(), "overlay root toggled");
            Task::none()
        }
        Message::Tick(_) => Task::none(),
    }
}

fn live(toast: &Driver) -> bool {
    !toast.notification().is_unmounted()
}

/// Places `config` below the live toasts, wires its hooks to the event
/// channel and mounts it.
fn spawn(app: &mut App, config: NotificationConfig) -> Task<Message> {
    let id = NotificationId::new();
    let top = stacking::next_top(
        app.defaults.top_offset,
        GAP,
        app.toasts
            .iter()
            .filter(|toast| live(toast))
            .map(|toast| (toast.notification().top_offset(), toast.notification().height())),
    );

    let config = config.top_offset(top).hooks(hooks_for(id, &app.events_tx));
    let mut toast = Driver::new(Notification::with_id(id, config));
    let task = toast.mount();
    tracing::debug!(?id, top, "toast spawned");
    app.toasts.push(toast);

    task.map(move |m| Message::Toast(id, m))
}

fn handle_toast(app: &mut App, id: NotificationId, message: notifications::Message) -> Task<Message> {
    let Some(toast) = app.find_mut(id) else {
        tracing::trace!(?id, ?message, "message for a removed toast");
        return Task::none();
    };

    let task = toast.update(message).map(move |m| Message::Toast(id, m));
    let events = drain_events(app);
    let restacked = if matches!(message, notifications::Message::Measured(_)) {
        restack(app)
    } else {
        Task::none()
    };
    Task::batch([task, events, restacked])
}

/// Applies every pending hook event.
fn drain_events(app: &mut App) -> Task<Message> {
    let mut tasks = Vec::new();

    while let Ok(event) = app.events_rx.try_recv() {
        match event {
            HostEvent::Clicked(id) => {
                tracing::info!(?id, "toast clicked");
                push_log(app, format!("clicked {id:?}"));
            }
            HostEvent::WillUnmount { id, height, top } => {
                push_log(app, format!("will unmount {id:?} (height {height}, top {top})"));
                tasks.push(restack(app));
            }
            HostEvent::Closed(id) => {
                app.toasts.retain(|toast| toast.notification().id() != id);
                push_log(app, format!("closed {id:?}"));
            }
        }
    }

    Task::batch(tasks)
}

/// Moves every live toast to its slot in a gap-separated column ordered by
/// spawn time, using the current heights.
fn restack(app: &mut App) -> Task<Message> {
    let tops = stacking::stack(
        app.defaults.top_offset,
        GAP,
        app.toasts
            .iter()
            .filter(|toast| live(toast))
            .map(|toast| toast.notification().height()),
    );

    let tasks: Vec<_> = app
        .toasts
        .iter_mut()
        .filter(|toast| live(toast))
        .zip(tops)
        .filter(|(toast, top)| (toast.notification().top_offset() - top).abs() > f32::EPSILON)
        .map(|(toast, top)| {
            let id = toast.notification().id();
            toast
                .update(notifications::Message::Reposition(top))
                .map(move |m| Message::Toast(id, m))
        })
        .collect();

    Task::batch(tasks)
}

fn push_log(app: &mut App, entry: String) {
    app.log.push(entry);
    if app.log.len() > LOG_LIMIT {
        let excess = app.log.len() - LOG_LIMIT;
        app.log.drain(..excess);
    }
}

fn hooks_for(id: NotificationId, events: &UnboundedSender<HostEvent>) -> Hooks {
    let on_click = events.clone();
    let on_will_unmount = events.clone();
    let on_close = events.clone();

    Hooks::new()
        .on_click(move || send(&on_click, HostEvent::Clicked(id)))
        .on_will_unmount(move |height, top| {
            send(&on_will_unmount, HostEvent::WillUnmount { id, height, top });
        })
        .on_close(move || send(&on_close, HostEvent::Closed(id)))
}

fn send(events: &UnboundedSender<HostEvent>, event: HostEvent) {
    if events.send(event).is_err() {
        tracing::warn!(?event, "event channel closed");
    }
}

/// Sample title and content for each kind.
fn sample(config: NotificationConfig, kind: Option<Kind>) -> NotificationConfig {
    match kind {
        Some(Kind::Success) => config
            .kind(Kind::Success)
            .title("Saved")
            .message("Your changes were written to disk."),
        Some(Kind::Info) => config.kind(Kind::Info).title("Tip").message(Content::Rich(vec![
            Fragment::regular("Hover a toast to "),
            Fragment::strong("pause"),
            Fragment::regular(" its timer."),
        ])),
        Some(Kind::Warning) => config
            .kind(Kind::Warning)
            .title("Low disk space")
            .message(Content::Rich(vec![
                Fragment::regular("Less than 1 GB left on "),
                Fragment::code("/home"),
                Fragment::regular("."),
            ])),
        Some(Kind::Error) => config
            .kind(Kind::Error)
            .title("Upload failed")
            .message("The connection was reset."),
        None => config.icon_class("bell").message("A notification without a kind."),
    }
}
