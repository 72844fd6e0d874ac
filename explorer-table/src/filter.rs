use alloc::string::String;
use alloc::sync::Arc;

/// A caller-supplied filter callback (`onShow`, `onReset`, `onFilter`).
pub type FilterCallback = Arc<dyn Fn() + Send + Sync>;

/// Opaque handle for the element a filter popover is positioned against.
///
/// The adapter resolves it to bounds through its layout probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnchorId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FilterAction {
    /// Funnel icon clicked.
    Show,
    /// "Reset" button clicked.
    Reset,
    /// "Filter" button clicked.
    Apply,
}

/// Per-column funnel filter configuration.
///
/// The caller owns all of this state. The engine reads the flags to build header view models and
/// forwards user actions to the callbacks; it never validates or runs the filter itself.
#[derive(Clone, Default)]
pub struct ColumnFilter {
    pub filter_open: bool,
    pub active_funnel: bool,
    pub filter_button_disabled: bool,
    /// Opaque identifier of the popover content the host renders.
    pub content: Option<String>,
    pub anchor: Option<AnchorId>,
    /// Popover width in px.
    pub width: Option<u32>,
    pub on_show: Option<FilterCallback>,
    pub on_reset: Option<FilterCallback>,
    pub on_filter: Option<FilterCallback>,
}

impl ColumnFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_open(mut self, filter_open: bool) -> Self {
        self.filter_open = filter_open;
        self
    }

    pub fn with_active_funnel(mut self, active_funnel: bool) -> Self {
        self.active_funnel = active_funnel;
        self
    }

    pub fn with_button_disabled(mut self, disabled: bool) -> Self {
        self.filter_button_disabled = disabled;
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_anchor(mut self, anchor: AnchorId) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_on_show(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_show = Some(Arc::new(f));
        self
    }

    pub fn with_on_reset(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_reset = Some(Arc::new(f));
        self
    }

    pub fn with_on_filter(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_filter = Some(Arc::new(f));
        self
    }

    /// Forwards `action` to the matching callback.
    ///
    /// Returns `true` when a callback was invoked. `Show` is suppressed while the funnel button is
    /// disabled.
    pub fn dispatch(&self, action: FilterAction) -> bool {
        let cb = match action {
            FilterAction::Show if self.filter_button_disabled => return false,
            FilterAction::Show => &self.on_show,
            FilterAction::Reset => &self.on_reset,
            FilterAction::Apply => &self.on_filter,
        };
        match cb {
            Some(cb) => {
                cb();
                true
            }
            None => false,
        }
    }
}

impl core::fmt::Debug for ColumnFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ColumnFilter")
            .field("filter_open", &self.filter_open)
            .field("active_funnel", &self.active_funnel)
            .field("filter_button_disabled", &self.filter_button_disabled)
            .field("content", &self.content)
            .field("anchor", &self.anchor)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}
