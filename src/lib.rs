// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is a self-dismissing toast notification widget for the Iced
//! GUI framework.
//!
//! A [`Notification`](ui::notifications::Notification) owns the lifecycle of
//! one toast: it fades in, waits for its duration (paused while hovered),
//! fades out and reports its final geometry through `on_will_unmount` before
//! `on_close`. The bundled demo host in [`app`] stacks several of them.

pub mod app;
pub mod error;
pub mod ui;
