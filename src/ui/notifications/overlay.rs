// SPDX-License-Identifier: MPL-2.0
//! Overlay root provider.
//!
//! A toast renders into the overlay layer handed out by a [`MountPoint`].
//! When no root is available (the window has not reported its size yet, or
//! the host has no overlay layer) the toast renders nothing.

use crate::ui::design_tokens::spacing;
use iced::alignment;

/// Handle to the overlay layer a toast is positioned in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayRoot {
    /// Horizontal edge toasts are anchored to.
    pub anchor: alignment::Horizontal,
    /// Distance kept from the anchored edge.
    pub inset: f32,
}

impl OverlayRoot {
    #[must_use]
    pub fn top_right() -> Self {
        Self {
            anchor: alignment::Horizontal::Right,
            inset: spacing::MD,
        }
    }

    #[must_use]
    pub fn top_left() -> Self {
        Self {
            anchor: alignment::Horizontal::Left,
            inset: spacing::MD,
        }
    }
}

impl Default for OverlayRoot {
    fn default() -> Self {
        Self::top_right()
    }
}

/// Supplies the overlay root, if one exists.
pub trait MountPoint {
    fn overlay_root(&self) -> Option<OverlayRoot>;
}

impl MountPoint for OverlayRoot {
    fn overlay_root(&self) -> Option<OverlayRoot> {
        Some(*self)
    }
}

impl MountPoint for Option<OverlayRoot> {
    fn overlay_root(&self) -> Option<OverlayRoot> {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_always_mounts() {
        assert_eq!(OverlayRoot::top_left().overlay_root(), Some(OverlayRoot::top_left()));
    }

    #[test]
    fn absent_root_yields_none() {
        let missing: Option<OverlayRoot> = None;
        assert!(missing.overlay_root().is_none());
    }

    #[test]
    fn default_root_anchors_right() {
        assert_eq!(OverlayRoot::default().anchor, alignment::Horizontal::Right);
    }
}
