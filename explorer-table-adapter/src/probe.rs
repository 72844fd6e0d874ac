use explorer_table::{AnchorId, InputMode};

use crate::{Bounds, ScrollOffset, ViewportSize};

/// Read-only access to host layout.
///
/// A DOM host answers these from `window.innerWidth/innerHeight`, `window.scrollX/scrollY` and
/// element bounding rects. Probes are queried from inside event listeners, so they must be
/// shareable across the listener boundary.
pub trait LayoutProbe: Send + Sync {
    fn viewport(&self) -> ViewportSize;

    fn scroll_offset(&self) -> ScrollOffset;

    /// Bounds of the table element, if it is mounted.
    fn table_bounds(&self) -> Option<Bounds>;

    /// Bounds of a filter popover anchor, if it is mounted.
    fn anchor_bounds(&self, anchor: AnchorId) -> Option<Bounds>;

    fn is_touch_device(&self) -> bool {
        false
    }
}

/// Picks the reorder gesture family for the device behind `probe`.
pub fn detect_input_mode(probe: &dyn LayoutProbe) -> InputMode {
    if probe.is_touch_device() {
        InputMode::Touch
    } else {
        InputMode::Pointer
    }
}
