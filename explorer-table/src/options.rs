use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;

use crate::{FetchTrigger, InputMode, PageSize, TableError, TableMode};

/// Extracts a stable identity from an item. Rows are reconciled by this key, not by position.
pub type RowKeySelector<T, K> = Arc<dyn Fn(&T) -> K + Send + Sync>;

/// Called with the full column key order after a reorder.
pub type OrderChangeCallback = Arc<dyn Fn(&[String]) + Send + Sync>;

/// Formats the footer text. `None` means there is nothing to display.
pub type DisplayTextFormatter = Arc<dyn Fn(Option<DisplayCount>) -> String + Send + Sync>;

/// Input of the display-count text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayCount {
    pub displayed: usize,
    pub total: usize,
}

/// The English display text used when no formatter is configured.
pub fn default_display_text(count: Option<DisplayCount>) -> String {
    match count {
        Some(c) => format!("Displaying {} out of {} items", c.displayed, c.total),
        None => String::from("No items"),
    }
}

/// Configuration for [`crate::Table`].
///
/// Closures are stored in `Arc`s so the options can be cloned, tweaked and passed back through
/// `Table::set_options` on every render.
pub struct TableOptions<T, K> {
    pub mode: TableMode,
    pub total_items: usize,
    pub page_size: PageSize,
    pub is_loading: bool,
    pub get_row_key: RowKeySelector<T, K>,

    /// Row height hint in px for the host layout.
    pub row_height: Option<u32>,
    /// Minimum content width in px before the table scrolls horizontally.
    pub min_content_width: Option<u32>,
    pub scrollable: bool,

    /// Enables column reordering. Without it gestures are ignored.
    pub on_order_change: Option<OrderChangeCallback>,
    pub disable_drag: bool,
    pub input_mode: InputMode,

    pub display_text: DisplayTextFormatter,
    /// Page links shown on each side of the current page.
    pub page_siblings: usize,
    pub fetch_trigger: FetchTrigger,
}

impl<T, K> Clone for TableOptions<T, K> {
    fn clone(&self) -> Self {
        Self {
            mode: self.mode.clone(),
            total_items: self.total_items,
            page_size: self.page_size,
            is_loading: self.is_loading,
            get_row_key: Arc::clone(&self.get_row_key),
            row_height: self.row_height,
            min_content_width: self.min_content_width,
            scrollable: self.scrollable,
            on_order_change: self.on_order_change.clone(),
            disable_drag: self.disable_drag,
            input_mode: self.input_mode,
            display_text: Arc::clone(&self.display_text),
            page_siblings: self.page_siblings,
            fetch_trigger: self.fetch_trigger,
        }
    }
}

impl<T, K> TableOptions<T, K> {
    /// Creates options for an unpaginated table keyed by `get_row_key`.
    pub fn new(get_row_key: impl Fn(&T) -> K + Send + Sync + 'static) -> Self {
        Self {
            mode: TableMode::default(),
            total_items: 0,
            page_size: PageSize::default(),
            is_loading: false,
            get_row_key: Arc::new(get_row_key),
            row_height: None,
            min_content_width: None,
            scrollable: false,
            on_order_change: None,
            disable_drag: false,
            input_mode: InputMode::default(),
            display_text: Arc::new(default_display_text),
            page_siblings: 1,
            fetch_trigger: FetchTrigger::default(),
        }
    }

    pub fn with_mode(mut self, mode: TableMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_total_items(mut self, total_items: usize) -> Self {
        self.total_items = total_items;
        self
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Same as `with_page_size`, validating a raw count.
    pub fn with_items_per_page(mut self, items_per_page: usize) -> Result<Self, TableError> {
        self.page_size = PageSize::new(items_per_page)?;
        Ok(self)
    }

    pub fn with_loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    pub fn with_row_height(mut self, row_height: u32) -> Self {
        self.row_height = Some(row_height);
        self
    }

    pub fn with_min_content_width(mut self, min_content_width: u32) -> Self {
        self.min_content_width = Some(min_content_width);
        self
    }

    pub fn with_scrollable(mut self, scrollable: bool) -> Self {
        self.scrollable = scrollable;
        self
    }

    pub fn with_on_order_change(
        mut self,
        on_order_change: impl Fn(&[String]) + Send + Sync + 'static,
    ) -> Self {
        self.on_order_change = Some(Arc::new(on_order_change));
        self
    }

    pub fn with_disable_drag(mut self, disable_drag: bool) -> Self {
        self.disable_drag = disable_drag;
        self
    }

    pub fn with_input_mode(mut self, input_mode: InputMode) -> Self {
        self.input_mode = input_mode;
        self
    }

    pub fn with_display_text(
        mut self,
        display_text: impl Fn(Option<DisplayCount>) -> String + Send + Sync + 'static,
    ) -> Self {
        self.display_text = Arc::new(display_text);
        self
    }

    pub fn with_page_siblings(mut self, page_siblings: usize) -> Self {
        self.page_siblings = page_siblings;
        self
    }

    pub fn with_fetch_trigger(mut self, fetch_trigger: FetchTrigger) -> Self {
        self.fetch_trigger = fetch_trigger;
        self
    }

    pub fn reorder_enabled(&self) -> bool {
        self.on_order_change.is_some() && !self.disable_drag
    }

    /// True while the infinite-scroll trigger must hold off.
    pub fn is_busy(&self) -> bool {
        self.is_loading || self.mode.is_fetching_next_page()
    }

    pub(crate) fn notify_order_change(&self, keys: &[String]) {
        if let Some(cb) = &self.on_order_change {
            cb(keys);
        }
    }
}

impl<T, K> core::fmt::Debug for TableOptions<T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TableOptions")
            .field("mode", &self.mode)
            .field("total_items", &self.total_items)
            .field("page_size", &self.page_size)
            .field("is_loading", &self.is_loading)
            .field("row_height", &self.row_height)
            .field("min_content_width", &self.min_content_width)
            .field("scrollable", &self.scrollable)
            .field("disable_drag", &self.disable_drag)
            .field("input_mode", &self.input_mode)
            .field("page_siblings", &self.page_siblings)
            .field("fetch_trigger", &self.fetch_trigger)
            .finish_non_exhaustive()
    }
}
