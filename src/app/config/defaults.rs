// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notification**: Auto-dismiss duration and vertical offset
//! - **Transition**: Enter/exit fade timings
//! - **Window**: Demo window geometry

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default auto-dismiss duration in milliseconds. `0` disables auto-dismiss.
pub const DEFAULT_DURATION_MS: u64 = 4500;

/// Upper bound accepted from `settings.toml` for the auto-dismiss duration.
pub const MAX_DURATION_MS: u64 = 60_000;

/// Default distance from the top of the overlay root, in logical pixels.
pub const DEFAULT_TOP_OFFSET: f32 = 16.0;

/// Largest top offset accepted from `settings.toml`.
pub const MAX_TOP_OFFSET: f32 = 2048.0;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Time the enter fade takes before the toast counts as shown.
pub const DEFAULT_ENTER_MS: u64 = 300;

/// Time the exit fade takes before the toast is removed.
pub const DEFAULT_EXIT_MS: u64 = 300;

/// Longest transition accepted from `settings.toml`.
pub const MAX_TRANSITION_MS: u64 = 2000;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_DURATION_MS <= MAX_DURATION_MS);
    assert!(DEFAULT_TOP_OFFSET >= 0.0);
    assert!(DEFAULT_TOP_OFFSET <= MAX_TOP_OFFSET);
    assert!(DEFAULT_ENTER_MS <= MAX_TRANSITION_MS);
    assert!(DEFAULT_EXIT_MS <= MAX_TRANSITION_MS);
    assert!(WINDOW_DEFAULT_WIDTH > 0);
    assert!(WINDOW_DEFAULT_HEIGHT > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_duration_matches_documented_value() {
        assert_eq!(DEFAULT_DURATION_MS, 4500);
    }

    #[test]
    fn default_top_offset_matches_documented_value() {
        assert!((DEFAULT_TOP_OFFSET - 16.0).abs() < f32::EPSILON);
    }
}
