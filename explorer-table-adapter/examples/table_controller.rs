use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use explorer_table::{AnchorId, Column, ColumnFilter, ColumnSet, Table, TableMode, TableOptions};
use explorer_table_adapter::{
    AdapterError, Bounds, EventHub, LayoutProbe, MemoryStore, RecentSearches, ScrollOffset,
    SearchContext, TableController, ViewportEvent, ViewportSize,
};

/// A fixed layout standing in for DOM measurements.
struct StaticLayout;

impl LayoutProbe for StaticLayout {
    fn viewport(&self) -> ViewportSize {
        ViewportSize::new(1280.0, 720.0)
    }

    fn scroll_offset(&self) -> ScrollOffset {
        ScrollOffset::default()
    }

    fn table_bounds(&self) -> Option<Bounds> {
        Some(Bounds::new(80.0, 40.0, 1200.0, 760.0))
    }

    fn anchor_bounds(&self, _anchor: AnchorId) -> Option<Bounds> {
        Some(Bounds::new(96.0, 1180.0, 20.0, 20.0))
    }
}

fn main() -> Result<(), AdapterError> {
    // Example: a host wiring window events into an infinite transactions table.
    //
    // An adapter would:
    // - forward window scroll/resize events into the hub
    // - attach the controller when the table mounts, and drop it when it unmounts
    // - render using the controller's table view
    let fetches = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&fetches);

    let columns = ColumnSet::new(vec![
        Column::new("hash", "Tx hash", |h: &String| Some(h.clone())),
        Column::new("fee", "Fees", |_: &String| Some("0.17 ADA".into()))
            .with_filter(ColumnFilter::new().with_anchor(AnchorId(1)).with_width(240)),
    ])?;
    let options = TableOptions::new(|h: &String| h.clone()).with_mode(TableMode::infinite(
        move || {
            sink.fetch_add(1, Ordering::Relaxed);
        },
    ));

    let hub = EventHub::new();
    let mut controller = TableController::new(Table::new(columns, options), Arc::new(StaticLayout));
    controller.attach(&hub);
    controller.set_filter_open("fee", true)?;

    for y in [0.0, 120.0, 240.0] {
        hub.emit(&ViewportEvent::Scroll {
            scroll_x: 0.0,
            scroll_y: y,
        });
    }
    println!(
        "fetches={} popover={:?}",
        fetches.load(Ordering::Relaxed),
        controller.popover_position("fee")
    );

    let txs: Vec<String> = (0..5).map(|i| format!("tx{i:04x}")).collect();
    let view = controller.render(Some(txs.as_slice()));
    println!("rows={} listeners={}", view.body.rows().len(), hub.listener_count());

    drop(controller);
    println!("after unmount listeners={}", hub.listener_count());

    let mut search = SearchContext::new(RecentSearches::load(MemoryStore::new())?);
    search.set_query("addr1q9", 0);
    if let Some(q) = search.tick(500) {
        println!("debounced query={q}");
    }
    let request = search.submit()?;
    println!("request={request:?} recent={:?}", search.recent().entries());
    Ok(())
}
