// SPDX-License-Identifier: MPL-2.0
//! Self-dismissing toast notification.
//!
//! A notification is a leaf widget: it shows a title and message in the
//! overlay layer, hides itself after a delay (paused while hovered), fades
//! out, and tells its host when it is gone. Stacking several notifications
//! is left to the host.
//!
//! # Components
//!
//! - [`notification`] - `Notification` lifecycle state machine
//! - [`config`] - `NotificationConfig` builder and content types
//! - [`hooks`] - Optional caller callbacks
//! - [`timer`] - Single-slot dismiss timer with stale-token rejection
//! - [`transition`] - Enter/exit phase machine and fade opacity
//! - [`overlay`] - Overlay root provider
//! - [`runtime`] - `Driver`: effects to Iced tasks, abortable dismiss sleep
//! - [`toast`] - Rendering
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::ui::notifications::{Driver, Kind, Notification, NotificationConfig, Toast};
//!
//! let config = NotificationConfig::new().kind(Kind::Success).title("Saved");
//! let mut toast = Driver::new(Notification::new(config));
//! let task = toast.mount().map(Message::Toast);
//!
//! // update:
//! let task = toast.update(message).map(Message::Toast);
//!
//! // view:
//! let layer = Toast::view(toast.notification(), &overlay_root).map(|e| e.map(Message::Toast));
//! ```

pub mod config;
pub mod hooks;
pub mod kind;
pub mod notification;
pub mod overlay;
pub mod runtime;
pub mod timer;
pub mod toast;
pub mod transition;

pub use config::{Content, Defaults, Emphasis, Fragment, NotificationConfig};
pub use hooks::Hooks;
pub use kind::Kind;
pub use notification::{Effect, Lifecycle, Message, Notification, NotificationId};
pub use overlay::{MountPoint, OverlayRoot};
pub use runtime::Driver;
pub use timer::{ArmedTimer, DismissTimer, TimerToken};
pub use toast::{IconSet, Toast};
pub use transition::{Phase, PhaseEvent, Transition};
