// SPDX-License-Identifier: MPL-2.0
//! Vertical stacking of the demo's toasts.
//!
//! The toast itself only knows its own top offset. This host-side helper
//! places new toasts below the live ones and recomputes the column whenever
//! a height changes or a toast leaves.

/// Top offset for a new toast below every `(top, height)` already shown.
#[must_use]
pub fn next_top(base: f32, gap: f32, live: impl IntoIterator<Item = (f32, f32)>) -> f32 {
    live.into_iter()
        .map(|(top, height)| top + height + gap)
        .fold(base, f32::max)
}

/// Top offsets of toasts with the given heights stacked from `base`, in order.
#[must_use]
pub fn stack(base: f32, gap: f32, heights: impl IntoIterator<Item = f32>) -> Vec<f32> {
    let mut top = base;
    heights
        .into_iter()
        .map(|height| {
            let slot = top;
            top += height + gap;
            slot
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAP: f32 = 16.0;

    #[test]
    fn first_toast_uses_base_offset() {
        assert!((next_top(16.0, GAP, []) - 16.0).abs() < f32::EPSILON);
    }

    #[test]
    fn next_toast_goes_below_lowest() {
        let top = next_top(16.0, GAP, [(16.0, 60.0), (92.0, 40.0)]);
        assert!((top - 148.0).abs() < f32::EPSILON);
    }

    #[test]
    fn stack_places_toasts_in_order() {
        assert_eq!(stack(16.0, GAP, [60.0, 40.0, 20.0]), vec![16.0, 92.0, 148.0]);
    }

    #[test]
    fn unmeasured_toast_takes_only_the_gap() {
        assert_eq!(stack(16.0, GAP, [0.0, 40.0]), vec![16.0, 32.0]);
    }

    #[test]
    fn empty_stack_has_no_slots() {
        assert!(stack(16.0, GAP, []).is_empty());
    }
}
