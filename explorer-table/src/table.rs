use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use crate::key::{RowKey, RowKeySet};
use crate::pagination::total_pages;
use crate::{
    CellView, Column, ColumnReorder, ColumnSet, DisplayCount, DragHint, FilterAction, FilterBadge,
    Footer, HeaderView, LayoutHints, Pagination, Paging, ReorderOp, ReorderState, RowView,
    ScrollMetrics, TableBody, TableError, TableMode, TableOptions, TableState, TableView,
};

/// A headless paginated/infinite table engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects or the item data itself.
/// - Your adapter supplies the current item slice on every [`Table::render`] call.
/// - Gestures (drag, tap, scroll) are fed in as plain method calls; results come back as view
///   models and caller callbacks.
///
/// The state it does own (internal page, column order, gesture state) lives as long as the value.
/// For listener lifetimes and popover placement, see the `explorer-table-adapter` crate.
#[derive(Clone, Debug)]
pub struct Table<T, K> {
    options: TableOptions<T, K>,
    columns: ColumnSet<T>,
    page: usize, // 1-based, used by `Paging::Internal`
    reorder: ColumnReorder,
}

impl<T, K: RowKey> Table<T, K> {
    pub fn new(columns: ColumnSet<T>, options: TableOptions<T, K>) -> Self {
        tdebug!(
            columns = columns.len(),
            total_items = options.total_items,
            page_size = options.page_size.get(),
            "Table::new"
        );
        Self {
            reorder: ColumnReorder::new(options.input_mode),
            options,
            columns,
            page: 1,
        }
    }

    pub fn options(&self) -> &TableOptions<T, K> {
        &self.options
    }

    pub fn set_options(&mut self, options: TableOptions<T, K>) {
        let prev_page_size = self.options.page_size;
        self.options = options;
        ttrace!(
            total_items = self.options.total_items,
            is_loading = self.options.is_loading,
            "Table::set_options"
        );

        if self.options.page_size != prev_page_size {
            self.page = 1;
        }
        self.reorder.set_input_mode(self.options.input_mode);
        if !self.options.reorder_enabled() {
            self.reorder.reset();
        }
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut TableOptions<T, K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.options.is_loading = is_loading;
    }

    pub fn set_total_items(&mut self, total_items: usize) {
        self.options.total_items = total_items;
    }

    /// Updates the infinite-mode fetch flag. No-op for default tables.
    pub fn set_fetching_next_page(&mut self, fetching: bool) {
        if let TableMode::Infinite {
            is_fetching_next_page,
            ..
        } = &mut self.options.mode
        {
            *is_fetching_next_page = fetching;
        }
    }

    pub fn columns(&self) -> &ColumnSet<T> {
        &self.columns
    }

    /// Mutable access for caller-owned column state (visibility, filter flags).
    ///
    /// Call [`Table::cancel_reorder`] afterwards if visibility changed mid-gesture.
    pub fn columns_mut(&mut self) -> &mut ColumnSet<T> {
        &mut self.columns
    }

    pub fn set_columns(&mut self, columns: ColumnSet<T>) {
        self.columns = columns;
        self.reorder.reset();
    }

    pub fn column_order(&self) -> Vec<String> {
        self.columns.keys()
    }

    // Pagination

    /// The 1-based page currently shown.
    pub fn current_page(&self) -> usize {
        match &self.options.mode {
            TableMode::Default {
                paging: Paging::Internal,
            } => self.page,
            TableMode::Default {
                paging: Paging::External { current_page, .. },
            } => *current_page,
            TableMode::Default {
                paging: Paging::Disabled,
            } => 1,
            TableMode::Infinite { current_page, .. } => *current_page,
        }
    }

    /// Page arithmetic for paginated tables. `None` when paging is disabled, in infinite mode, or
    /// when the caller reports page `0`.
    pub fn pagination(&self) -> Option<Pagination> {
        if !self.options.mode.is_paginated() {
            return None;
        }
        let page = self.current_page();
        match Pagination::with_page_size(page, self.options.total_items, self.options.page_size) {
            Ok(p) => Some(p),
            Err(_err) => {
                twarn!(error = %_err, "Table::pagination: invalid current page");
                None
            }
        }
    }

    /// `ceil(total_items / page_size)`, or `0` when there are no items and nothing is loading.
    pub fn total_pages(&self, items: Option<&[T]>) -> usize {
        if items.is_none() && !self.options.is_loading {
            return 0;
        }
        total_pages(self.options.total_items, self.options.page_size)
    }

    /// Index range of `items` that is rendered.
    ///
    /// Only internally paginated tables slice; every other mode shows the supplied items as is.
    pub fn visible_range(&self, items: &[T]) -> Range<usize> {
        match &self.options.mode {
            TableMode::Default {
                paging: Paging::Internal,
            } => self
                .pagination()
                .map_or(0..items.len(), |p| p.slice_range(items.len())),
            _ => 0..items.len(),
        }
    }

    pub fn visible_items<'a>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.visible_range(items)]
    }

    /// Navigates to `page` (1-based).
    ///
    /// Internally paginated tables update their own state; externally paginated tables forward
    /// the request to `on_navigate`. Returns `false` when the mode has no pages.
    pub fn go_to_page(&mut self, page: usize) -> Result<bool, TableError> {
        if page == 0 {
            return Err(TableError::InvalidPage { page });
        }
        match &self.options.mode {
            TableMode::Default {
                paging: Paging::Internal,
            } => {
                if self.page != page {
                    tdebug!(from = self.page, to = page, "Table::go_to_page");
                    self.page = page;
                }
                Ok(true)
            }
            TableMode::Default {
                paging: Paging::External { on_navigate, .. },
            } => {
                tdebug!(to = page, "Table::go_to_page (external)");
                on_navigate(page);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    pub fn next_page(&mut self) -> Result<bool, TableError> {
        match self.pagination() {
            Some(p) if p.has_next() => self.go_to_page(p.current_page() + 1),
            _ => Ok(false),
        }
    }

    pub fn previous_page(&mut self) -> Result<bool, TableError> {
        match self.pagination() {
            Some(p) if p.has_previous() => self.go_to_page(p.current_page() - 1),
            _ => Ok(false),
        }
    }

    // Infinite scroll

    /// Evaluates the infinite-scroll trigger for one scroll event.
    ///
    /// Calls `on_fetch_next_page` and returns `true` when the table bottom is within the
    /// threshold of the viewport bottom and nothing is loading. Call this once per scroll event,
    /// not per frame.
    pub fn on_scroll(&self, metrics: ScrollMetrics) -> bool {
        let TableMode::Infinite {
            on_fetch_next_page: Some(fetch),
            ..
        } = &self.options.mode
        else {
            return false;
        };
        if !self
            .options
            .fetch_trigger
            .should_fetch(metrics, self.options.is_busy())
        {
            return false;
        }
        ttrace!(
            table_bottom = metrics.table_bottom,
            viewport_height = metrics.viewport_height,
            "Table::on_scroll: fetching next page"
        );
        fetch();
        true
    }

    // Column reordering

    pub fn reorder_state(&self) -> ReorderState {
        self.reorder.state()
    }

    pub fn reorder_enabled(&self) -> bool {
        self.options.reorder_enabled()
    }

    pub fn cancel_reorder(&mut self) {
        self.reorder.reset();
    }

    /// Starts dragging the header at `index` (a visible-column position).
    pub fn drag_start(&mut self, index: usize) -> bool {
        if !self.reorder_enabled() || index >= self.columns.visible_len() {
            return false;
        }
        self.reorder.drag_start(index)
    }

    pub fn drag_over(&mut self, index: usize) {
        if self.reorder_enabled() {
            self.reorder.drag_over(index);
        }
    }

    /// Drops the dragged header onto `index`. Returns `true` when the order changed.
    pub fn drop(&mut self, index: usize) -> Result<bool, TableError> {
        let op = self.reorder.drop(index);
        match op {
            Some(op) if self.reorder_enabled() => self.apply_reorder(op),
            _ => Ok(false),
        }
    }

    pub fn drag_end(&mut self) {
        self.reorder.drag_end();
    }

    /// Tap-to-swap on the header at `index`. Returns `true` when the order changed.
    pub fn tap(&mut self, index: usize) -> Result<bool, TableError> {
        if !self.reorder_enabled() || index >= self.columns.visible_len() {
            return Ok(false);
        }
        match self.reorder.tap(index) {
            Some(op) => self.apply_reorder(op),
            None => Ok(false),
        }
    }

    pub fn tap_outside(&mut self) {
        self.reorder.tap_outside();
    }

    fn full_index(&self, visible_index: usize) -> Result<usize, TableError> {
        self.columns
            .visible_to_full(visible_index)
            .ok_or(TableError::ColumnIndexOutOfBounds {
                index: visible_index,
                len: self.columns.visible_len(),
            })
    }

    fn apply_reorder(&mut self, op: ReorderOp) -> Result<bool, TableError> {
        match op {
            ReorderOp::Move { from, to } => {
                let from = self.full_index(from)?;
                let to = self.full_index(to)?;
                self.columns.move_column(from, to)?;
            }
            ReorderOp::Swap { a, b } => {
                let a = self.full_index(a)?;
                let b = self.full_index(b)?;
                self.columns.swap_columns(a, b)?;
            }
        }
        let keys = self.columns.keys();
        tdebug!(?op, order = ?keys, "Table: columns reordered");
        self.options.notify_order_change(&keys);
        Ok(true)
    }

    // Filters

    /// Forwards a funnel action to the column's filter callbacks.
    ///
    /// Returns `false` when the column has no filter or no matching callback.
    pub fn filter_action(
        &self,
        column_key: &str,
        action: FilterAction,
    ) -> Result<bool, TableError> {
        let column = self.column(column_key)?;
        Ok(column
            .filter
            .as_ref()
            .is_some_and(|filter| filter.dispatch(action)))
    }

    /// Updates the caller-owned `filter_open` flag of a column.
    pub fn set_filter_open(&mut self, column_key: &str, open: bool) -> Result<(), TableError> {
        let column = self
            .columns
            .get_by_key_mut(column_key)
            .ok_or_else(|| TableError::UnknownColumnKey {
                key: column_key.into(),
            })?;
        if let Some(filter) = &mut column.filter {
            filter.filter_open = open;
        }
        Ok(())
    }

    fn column(&self, key: &str) -> Result<&Column<T>, TableError> {
        self.columns
            .get_by_key(key)
            .ok_or_else(|| TableError::UnknownColumnKey { key: key.into() })
    }

    // State

    pub fn state(&self) -> TableState {
        TableState {
            current_page: self.current_page(),
            column_order: self.columns.keys(),
        }
    }

    /// Restores a snapshot. The order-change callback is not invoked.
    pub fn restore_state(&mut self, state: &TableState) -> Result<(), TableError> {
        if state.current_page == 0 {
            return Err(TableError::InvalidPage { page: 0 });
        }
        self.columns.apply_order(state.column_order.as_slice())?;
        if matches!(
            self.options.mode,
            TableMode::Default {
                paging: Paging::Internal
            }
        ) {
            self.page = state.current_page;
        }
        self.reorder.reset();
        Ok(())
    }

    // Rendering

    /// Builds the view models for one render pass.
    ///
    /// `items` is the full item set for internally paginated tables, the current page for
    /// externally paginated tables, and every fetched item for infinite tables. `None` means
    /// nothing has been fetched yet.
    pub fn render(&self, items: Option<&[T]>) -> TableView<K> {
        let total_pages = self.total_pages(items);
        TableView {
            headers: self.headers(),
            body: self.body(items),
            footer: self.footer(items, total_pages),
            total_pages,
            layout: LayoutHints {
                row_height: self.options.row_height,
                min_content_width: self.options.min_content_width,
                scrollable: self.options.scrollable,
            },
        }
    }

    pub fn headers(&self) -> Vec<HeaderView> {
        let draggable = self.reorder_enabled();
        let dragging = self.reorder.dragged_index();
        let hover = self.reorder.hover_index();
        let selected = self.reorder.selected_index();

        self.columns
            .visible()
            .enumerate()
            .map(|(i, c)| HeaderView {
                key: c.key.clone(),
                title: c.title.clone(),
                width_px: c.width_px,
                class_name: c.class_name.clone(),
                helper: c.helper.clone(),
                sortable: c.stand_by_ranking,
                ranking_start: c.ranking_start,
                filter: c.filter.as_ref().map(|f| FilterBadge {
                    open: f.filter_open,
                    active: f.active_funnel,
                    disabled: f.filter_button_disabled,
                }),
                drag: DragHint {
                    draggable,
                    dragging: dragging == Some(i),
                    hover_target: hover == Some(i),
                    selected: selected == Some(i),
                },
            })
            .collect()
    }

    pub fn body(&self, items: Option<&[T]>) -> TableBody<K> {
        let columns = self.columns.visible_len();
        let page_rows = self.options.page_size.get();
        let infinite = self.options.mode.is_infinite();
        let busy = self.options.is_busy();
        let items = items.unwrap_or_default();

        if !infinite && self.options.is_loading {
            return TableBody::Skeleton {
                rows: page_rows,
                columns,
            };
        }
        if items.is_empty() {
            if infinite && busy {
                return TableBody::Skeleton {
                    rows: page_rows,
                    columns,
                };
            }
            return TableBody::Empty;
        }

        TableBody::Rows {
            rows: self.rows(self.visible_items(items)),
            trailing_skeleton_rows: if infinite && busy { page_rows } else { 0 },
        }
    }

    fn rows(&self, items: &[T]) -> Vec<RowView<K>> {
        let visible: Vec<&Column<T>> = self.columns.visible().collect();
        let rows: Vec<RowView<K>> = items
            .iter()
            .enumerate()
            .map(|(index, item)| RowView {
                key: (self.options.get_row_key)(item),
                index,
                striped: index % 2 == 1,
                cells: visible
                    .iter()
                    .map(|c| CellView {
                        column_key: c.key.clone(),
                        content: c.render_cell(item),
                    })
                    .collect(),
            })
            .collect();

        let mut seen = RowKeySet::default();
        for row in &rows {
            if !seen.insert(&row.key) {
                twarn!(key = ?row.key, "Table: duplicate row key");
            }
        }
        rows
    }

    fn footer(&self, items: Option<&[T]>, total_pages: usize) -> Option<Footer> {
        if !self.options.mode.is_paginated() {
            return None;
        }
        let pagination = self.pagination();
        let total = self.options.total_items;
        let len = items.map_or(0, <[T]>::len);
        let count = (len > 0 && total > 0).then(|| DisplayCount {
            displayed: len.min(total),
            total,
        });
        let controls = match (count, pagination) {
            (Some(_), Some(p)) => p.controls(self.options.page_siblings),
            _ => Vec::new(),
        };
        Some(Footer {
            display_text: (self.options.display_text)(count),
            current_page: self.current_page(),
            total_pages,
            controls,
        })
    }
}
