use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use explorer_table::AnchorId;

use crate::{Bounds, EventHub, LayoutProbe, Subscription, ViewportEvent, ViewportSize};

/// Vertical gap between the anchor bottom and the popover, in px.
pub const POPOVER_GAP_PX: f64 = 8.0;

/// Popover width used when the filter does not set one, in px.
pub const DEFAULT_POPOVER_WIDTH_PX: f64 = 240.0;

/// Fixed-position placement of a filter popover, in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopoverPosition {
    pub top: f64,
    pub left: f64,
    pub width: f64,
}

/// Places a popover of `width` px under `anchor`.
///
/// The popover is left-aligned with the anchor and shifted left when it would overflow the
/// viewport's right edge, but never past the left edge.
pub fn place_popover(anchor: Bounds, width: f64, viewport: ViewportSize) -> PopoverPosition {
    let overflow = anchor.left + width - viewport.width;
    let left = if overflow > 0.0 {
        anchor.left - overflow
    } else {
        anchor.left
    };
    PopoverPosition {
        top: anchor.bottom() + POPOVER_GAP_PX,
        left: left.max(0.0),
        width,
    }
}

fn measure(probe: &dyn LayoutProbe, anchor: AnchorId, width: f64) -> Option<PopoverPosition> {
    let bounds = probe.anchor_bounds(anchor)?;
    Some(place_popover(bounds, width, probe.viewport()))
}

/// Keeps one popover position current while it is open.
///
/// On creation it measures once and registers a listener that re-measures on every scroll and
/// resize. Dropping the tracker removes the listener.
pub struct PopoverTracker {
    anchor: AnchorId,
    width: f64,
    position: Arc<Mutex<Option<PopoverPosition>>>,
    _subscription: Subscription,
}

impl PopoverTracker {
    pub fn attach(
        hub: &EventHub<ViewportEvent>,
        probe: Arc<dyn LayoutProbe>,
        anchor: AnchorId,
        width: f64,
    ) -> Self {
        let position = Arc::new(Mutex::new(measure(probe.as_ref(), anchor, width)));

        let slot = Arc::clone(&position);
        let subscription = hub.subscribe(move |_event: &ViewportEvent| {
            let next = measure(probe.as_ref(), anchor, width);
            atrace!(anchor = anchor.0, ?next, "PopoverTracker: re-measured");
            *slot.lock().unwrap_or_else(PoisonError::into_inner) = next;
        });
        adebug!(anchor = anchor.0, width, "PopoverTracker attached");

        Self {
            anchor,
            width,
            position,
            _subscription: subscription,
        }
    }

    pub fn anchor(&self) -> AnchorId {
        self.anchor
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub(crate) fn matches(&self, anchor: AnchorId, width: f64) -> bool {
        self.anchor == anchor && self.width == width
    }

    /// The last measured position. `None` while the anchor is not mounted.
    pub fn position(&self) -> Option<PopoverPosition> {
        *self.position.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for PopoverTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PopoverTracker")
            .field("anchor", &self.anchor)
            .field("width", &self.width)
            .field("position", &self.position())
            .finish_non_exhaustive()
    }
}
