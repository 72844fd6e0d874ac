use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use explorer_table::{
    AnchorId, ColumnSet, FilterAction, InputMode, RowKey, ScrollMetrics, Table, TableError,
    TableMode, TableOptions, TableState, TableView,
};

use crate::{
    DEFAULT_POPOVER_WIDTH_PX, EventHub, LayoutProbe, PopoverPosition, PopoverTracker,
    Subscription, ViewportEvent, detect_input_mode,
};

/// A framework-neutral controller that wraps an `explorer_table::Table` and owns the listeners a
/// mounted table needs.
///
/// This type does not hold any UI objects. Adapters drive it by:
/// - implementing [`LayoutProbe`] for the mounted table
/// - forwarding window scroll/resize events into the [`EventHub`] passed to `attach`
/// - calling `pointer_down` for document-level pointer events
///
/// While attached, an infinite table gets one scroll listener that requests the next page, and
/// every open filter with an anchor gets one listener that keeps its popover placed. Listeners
/// follow the options: switching away from infinite mode or closing a filter releases them, and
/// dropping the controller releases everything.
///
/// Every mutation goes through the controller so the listeners never see stale options. The
/// wrapped table is only handed out by shared reference.
pub struct TableController<T, K> {
    table: Table<T, K>,
    probe: Arc<dyn LayoutProbe>,
    device_input: InputMode,
    hub: Option<EventHub<ViewportEvent>>,
    busy: Arc<AtomicBool>,
    scroll: Option<Subscription>,
    popovers: BTreeMap<String, PopoverTracker>,
}

impl<T, K: RowKey> TableController<T, K> {
    /// Wraps `table`, picking the reorder input mode from the probe's device check.
    ///
    /// The detected mode is re-applied whenever the options are replaced. Options that ask for
    /// [`InputMode::Hybrid`] keep it.
    pub fn new(mut table: Table<T, K>, probe: Arc<dyn LayoutProbe>) -> Self {
        let device_input = detect_input_mode(probe.as_ref());
        table.update_options(|o| keep_device_input(o, device_input));
        adebug!(?device_input, "TableController::new");
        Self {
            busy: Arc::new(AtomicBool::new(table.options().is_busy())),
            table,
            probe,
            device_input,
            hub: None,
            scroll: None,
            popovers: BTreeMap::new(),
        }
    }

    pub fn table(&self) -> &Table<T, K> {
        &self.table
    }

    pub fn into_table(self) -> Table<T, K> {
        self.table
    }

    pub fn probe(&self) -> &Arc<dyn LayoutProbe> {
        &self.probe
    }

    /// The input mode picked from the device check.
    pub fn device_input(&self) -> InputMode {
        self.device_input
    }

    // Listener lifecycle

    /// Starts listening on `hub` (the table was mounted).
    pub fn attach(&mut self, hub: &EventHub<ViewportEvent>) {
        self.release_listeners();
        self.hub = Some(hub.clone());
        self.sync_listeners();
    }

    /// Releases every listener (the table was unmounted).
    pub fn detach(&mut self) {
        self.release_listeners();
        self.hub = None;
    }

    pub fn is_attached(&self) -> bool {
        self.hub.is_some()
    }

    pub fn scroll_listener_active(&self) -> bool {
        self.scroll.is_some()
    }

    pub fn open_popover_count(&self) -> usize {
        self.popovers.len()
    }

    fn sync_listeners(&mut self) {
        self.refresh_busy();
        let Some(hub) = self.hub.clone() else {
            return;
        };
        self.sync_scroll_listener(&hub);
        self.sync_popovers(&hub);
    }

    fn refresh_busy(&self) {
        self.busy.store(self.table.options().is_busy(), Ordering::Relaxed);
    }

    fn release_listeners(&mut self) {
        self.scroll = None;
        self.popovers.clear();
    }

    fn sync_scroll_listener(&mut self, hub: &EventHub<ViewportEvent>) {
        let fetch = match &self.table.options().mode {
            TableMode::Infinite {
                on_fetch_next_page: Some(fetch),
                ..
            } => Arc::clone(fetch),
            _ => {
                if self.scroll.take().is_some() {
                    adebug!("TableController: scroll listener released");
                }
                return;
            }
        };
        if self.scroll.is_some() {
            return;
        }

        let trigger = self.table.options().fetch_trigger;
        let probe = Arc::clone(&self.probe);
        let busy = Arc::clone(&self.busy);
        self.scroll = Some(hub.subscribe(move |event: &ViewportEvent| {
            if !matches!(event, ViewportEvent::Scroll { .. }) {
                return;
            }
            let Some(bounds) = probe.table_bounds() else {
                return;
            };
            let metrics = ScrollMetrics::new(bounds.bottom(), probe.viewport().height);
            if trigger.should_fetch(metrics, busy.load(Ordering::Relaxed)) {
                atrace!(
                    table_bottom = metrics.table_bottom,
                    viewport_height = metrics.viewport_height,
                    "TableController: fetching next page"
                );
                fetch();
            }
        }));
        adebug!("TableController: scroll listener registered");
    }

    fn sync_popovers(&mut self, hub: &EventHub<ViewportEvent>) {
        let wanted: BTreeMap<String, (AnchorId, f64)> = self
            .table
            .columns()
            .visible()
            .filter_map(|column| {
                let filter = column.filter.as_ref().filter(|f| f.filter_open)?;
                let width = filter.width.map_or(DEFAULT_POPOVER_WIDTH_PX, f64::from);
                Some((column.key.clone(), (filter.anchor?, width)))
            })
            .collect();

        self.popovers.retain(|key, tracker| {
            wanted
                .get(key)
                .is_some_and(|(anchor, width)| tracker.matches(*anchor, *width))
        });
        for (key, (anchor, width)) in wanted {
            if !self.popovers.contains_key(&key) {
                let tracker = PopoverTracker::attach(hub, Arc::clone(&self.probe), anchor, width);
                self.popovers.insert(key, tracker);
            }
        }
    }

    // Options

    /// Replaces the options and re-registers listeners against the new callbacks.
    pub fn set_options(&mut self, mut options: TableOptions<T, K>) {
        keep_device_input(&mut options, self.device_input);
        self.table.set_options(options);
        self.scroll = None;
        self.sync_listeners();
    }

    pub fn update_options(&mut self, f: impl FnOnce(&mut TableOptions<T, K>)) {
        let device_input = self.device_input;
        self.table.update_options(|o| {
            f(o);
            keep_device_input(o, device_input);
        });
        self.scroll = None;
        self.sync_listeners();
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.table.set_loading(is_loading);
        self.refresh_busy();
    }

    pub fn set_fetching_next_page(&mut self, fetching: bool) {
        self.table.set_fetching_next_page(fetching);
        self.refresh_busy();
    }

    pub fn set_total_items(&mut self, total_items: usize) {
        self.table.set_total_items(total_items);
    }

    // Columns

    /// Edits the columns (visibility, filter flags) and updates popover listeners.
    pub fn update_columns(&mut self, f: impl FnOnce(&mut ColumnSet<T>)) {
        f(self.table.columns_mut());
        self.table.cancel_reorder();
        self.sync_listeners();
    }

    pub fn set_columns(&mut self, columns: ColumnSet<T>) {
        self.table.set_columns(columns);
        self.sync_listeners();
    }

    pub fn restore_state(&mut self, state: &TableState) -> Result<(), TableError> {
        self.table.restore_state(state)
    }

    // Paging

    pub fn go_to_page(&mut self, page: usize) -> Result<bool, TableError> {
        self.table.go_to_page(page)
    }

    pub fn next_page(&mut self) -> Result<bool, TableError> {
        self.table.next_page()
    }

    pub fn previous_page(&mut self) -> Result<bool, TableError> {
        self.table.previous_page()
    }

    // Reorder gestures

    pub fn drag_start(&mut self, index: usize) -> bool {
        self.table.drag_start(index)
    }

    pub fn drag_over(&mut self, index: usize) {
        self.table.drag_over(index);
    }

    pub fn drop(&mut self, index: usize) -> Result<bool, TableError> {
        self.table.drop(index)
    }

    pub fn drag_end(&mut self) {
        self.table.drag_end();
    }

    pub fn tap(&mut self, index: usize) -> Result<bool, TableError> {
        self.table.tap(index)
    }

    pub fn cancel_reorder(&mut self) {
        self.table.cancel_reorder();
    }

    // Filters

    pub fn filter_action(
        &self,
        column_key: &str,
        action: FilterAction,
    ) -> Result<bool, TableError> {
        self.table.filter_action(column_key, action)
    }

    /// Opens or closes a filter popover and updates its placement listener.
    pub fn set_filter_open(&mut self, column_key: &str, open: bool) -> Result<(), TableError> {
        self.table.set_filter_open(column_key, open)?;
        self.sync_listeners();
        Ok(())
    }

    /// Current placement of an open filter popover.
    pub fn popover_position(&self, column_key: &str) -> Option<PopoverPosition> {
        self.popovers.get(column_key)?.position()
    }

    // Pointer

    /// Handles a document-level pointer press at viewport coordinates.
    ///
    /// A press outside the table bounds clears a pending tap-to-swap selection. Returns `true`
    /// when the press landed outside.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        let outside = self
            .probe
            .table_bounds()
            .is_none_or(|bounds| !bounds.contains(x, y));
        if outside {
            self.table.tap_outside();
        }
        outside
    }

    pub fn render(&self, items: Option<&[T]>) -> TableView<K> {
        self.table.render(items)
    }
}

/// Replaces the options' input mode with the device's, unless they ask for both gesture families.
fn keep_device_input<T, K>(options: &mut TableOptions<T, K>, device_input: InputMode) {
    if options.input_mode != InputMode::Hybrid {
        options.input_mode = device_input;
    }
}

impl<T, K> fmt::Debug for TableController<T, K>
where
    Table<T, K>: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableController")
            .field("table", &self.table)
            .field("device_input", &self.device_input)
            .field("attached", &self.hub.is_some())
            .field("busy", &self.busy.load(Ordering::Relaxed))
            .field("scroll_listener", &self.scroll.is_some())
            .field("popovers", &self.popovers)
            .finish_non_exhaustive()
    }
}
