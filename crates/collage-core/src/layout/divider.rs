//! Divider drag sessions.
//!
//! A divider owns exactly one ratio of the current layout. The session
//! captures a snapshot at pointer-press (which ratio, its starting value and
//! the container's cross-axis extent); every pointer-move frame is then a
//! pure O(1) recomputation from that snapshot plus the current pointer
//! delta. Deltas are never integrated incrementally, so intermediate frames
//! are reproducible and cannot drift. Dropping the session is the release.

use super::topology::{clamp_ratio, LayoutDescriptor, RatioKey};

/// Snapshot state for one divider drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerDrag {
    key: RatioKey,
    start_ratio: f64,
    container_extent: f64,
}

impl DividerDrag {
    /// Begin a drag at pointer-press.
    ///
    /// # Arguments
    ///
    /// * `key` - The ratio this divider owns
    /// * `start_ratio` - The ratio's value at press, in percent
    /// * `container_extent` - The container's pixel extent along the drag
    ///   axis (width for a column divider, height for a row divider)
    pub fn begin(key: RatioKey, start_ratio: f64, container_extent: f64) -> Self {
        Self {
            key,
            start_ratio,
            container_extent,
        }
    }

    /// Begin a drag reading the starting ratio from the descriptor.
    ///
    /// Returns `None` if the descriptor does not carry the ratio, so a stale
    /// divider (e.g. after a count change swapped the topology) cannot start
    /// a session.
    pub fn begin_on(
        layout: &LayoutDescriptor,
        key: RatioKey,
        container_extent: f64,
    ) -> Option<Self> {
        layout
            .ratio(key)
            .map(|start| Self::begin(key, start, container_extent))
    }

    /// The ratio this divider owns.
    pub fn key(&self) -> RatioKey {
        self.key
    }

    /// The ratio for the current pointer position, clamped to [20, 80].
    ///
    /// Pure recomputation from the press snapshot: the delta in pixels is
    /// converted to a percentage of the container extent and added to the
    /// starting ratio. A zero or negative extent contributes nothing.
    pub fn ratio_at(&self, delta_px: f64) -> f64 {
        let delta_percent = if self.container_extent > 0.0 {
            delta_px / self.container_extent * 100.0
        } else {
            0.0
        };
        clamp_ratio(self.start_ratio + delta_percent)
    }

    /// Produce the descriptor for the current pointer position.
    ///
    /// The caller re-partitions with the returned value; the input descriptor
    /// is left untouched.
    pub fn apply(&self, layout: &LayoutDescriptor, delta_px: f64) -> LayoutDescriptor {
        layout.with_ratio(self.key, self.ratio_at(delta_px))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{RATIO_MAX, RATIO_MIN};

    #[test]
    fn test_drag_moves_ratio_proportionally() {
        let drag = DividerDrag::begin(RatioKey::X, 50.0, 1000.0);
        assert_eq!(drag.ratio_at(0.0), 50.0);
        assert_eq!(drag.ratio_at(100.0), 60.0);
        assert_eq!(drag.ratio_at(-100.0), 40.0);
    }

    #[test]
    fn test_drag_clamps_at_bounds() {
        let drag = DividerDrag::begin(RatioKey::X, 50.0, 1000.0);
        assert_eq!(drag.ratio_at(5000.0), RATIO_MAX);
        assert_eq!(drag.ratio_at(-5000.0), RATIO_MIN);
    }

    #[test]
    fn test_frames_recompute_from_snapshot() {
        // Every frame is a function of the snapshot, so out-of-order or
        // repeated move events produce identical results.
        let drag = DividerDrag::begin(RatioKey::Y, 40.0, 500.0);
        let a = drag.ratio_at(50.0);
        let _ = drag.ratio_at(500.0);
        let b = drag.ratio_at(50.0);
        assert_eq!(a, b);
        assert_eq!(a, 50.0);
    }

    #[test]
    fn test_zero_extent_holds_start_ratio() {
        let drag = DividerDrag::begin(RatioKey::X, 35.0, 0.0);
        assert_eq!(drag.ratio_at(1000.0), 35.0);
    }

    #[test]
    fn test_begin_on_reads_descriptor() {
        let layout = LayoutDescriptor::for_count(4);
        let drag = DividerDrag::begin_on(&layout, RatioKey::Y, 600.0).unwrap();
        assert_eq!(drag.ratio_at(60.0), 60.0);

        // The descriptor for two cells has no ratioY
        let layout = LayoutDescriptor::for_count(2);
        assert!(DividerDrag::begin_on(&layout, RatioKey::Y, 600.0).is_none());
    }

    #[test]
    fn test_apply_writes_back_clamped() {
        let layout = LayoutDescriptor::for_count(4);
        let drag = DividerDrag::begin_on(&layout, RatioKey::X, 1000.0).unwrap();

        let updated = drag.apply(&layout, 350.0);
        assert_eq!(updated.ratio(RatioKey::X), Some(RATIO_MAX));
        // Source descriptor is untouched
        assert_eq!(layout.ratio(RatioKey::X), Some(50.0));
    }

    #[test]
    fn test_dividers_act_independently() {
        let layout = LayoutDescriptor::for_count(4);
        let drag_x = DividerDrag::begin_on(&layout, RatioKey::X, 1000.0).unwrap();
        let drag_y = DividerDrag::begin_on(&layout, RatioKey::Y, 1000.0).unwrap();

        let updated = drag_y.apply(&drag_x.apply(&layout, 200.0), -100.0);
        assert_eq!(updated.ratio(RatioKey::X), Some(70.0));
        assert_eq!(updated.ratio(RatioKey::Y), Some(40.0));
    }
}
