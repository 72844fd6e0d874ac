/// Distance in px between the table bottom and the viewport bottom below which the next page is
/// requested.
pub const FETCH_THRESHOLD_PX: f64 = 200.0;

/// Geometry sampled on a scroll event, in viewport coordinates (as from a bounding rect).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    /// Bottom edge of the table relative to the top of the viewport.
    pub table_bottom: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(table_bottom: f64, viewport_height: f64) -> Self {
        Self {
            table_bottom,
            viewport_height,
        }
    }

    /// How far the table extends below the viewport bottom. Negative when it ends above it.
    pub fn distance_below_viewport(&self) -> f64 {
        self.table_bottom - self.viewport_height
    }
}

/// The infinite-scroll predicate.
///
/// This is level-triggered: every qualifying scroll event fires, until the caller reports that a
/// fetch is in flight.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FetchTrigger {
    pub threshold_px: f64,
}

impl Default for FetchTrigger {
    fn default() -> Self {
        Self {
            threshold_px: FETCH_THRESHOLD_PX,
        }
    }
}

impl FetchTrigger {
    pub fn new(threshold_px: f64) -> Self {
        Self { threshold_px }
    }

    pub fn is_near_end(&self, metrics: ScrollMetrics) -> bool {
        metrics.distance_below_viewport() <= self.threshold_px
    }

    /// `busy` is true while the caller is loading or fetching the next page.
    pub fn should_fetch(&self, metrics: ScrollMetrics, busy: bool) -> bool {
        !busy && self.is_near_end(metrics)
    }
}
