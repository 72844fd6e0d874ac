// Example: infinite scroll, fed by simulated scroll events.
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use explorer_table::{Column, ColumnSet, ScrollMetrics, Table, TableMode, TableOptions};

fn main() -> Result<(), explorer_table::TableError> {
    let requested = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&requested);

    let columns = ColumnSet::new(vec![Column::new("hash", "Tx hash", |h: &String| {
        Some(h.clone())
    })])?;
    let mut table = Table::new(
        columns,
        TableOptions::new(|h: &String| h.clone())
            .with_mode(TableMode::infinite(move || {
                sink.fetch_add(1, Ordering::Relaxed);
            }))
            .with_items_per_page(10)?,
    );

    let mut txs: Vec<String> = Vec::new();
    let viewport = 900.0;
    for page in 0..3 {
        txs.extend((0..10).map(|i| format!("tx{:04x}", page * 10 + i)));
        // The user scrolls until the table ends 120 px below the fold.
        let table_bottom = viewport + 120.0;
        if table.on_scroll(ScrollMetrics::new(table_bottom, viewport)) {
            table.set_fetching_next_page(true);
            println!("fetching page {}", page + 2);
            table.set_fetching_next_page(false);
        }
    }

    let view = table.render(Some(txs.as_slice()));
    println!(
        "rows={} fetches={}",
        view.body.rows().len(),
        requested.load(Ordering::Relaxed)
    );
    Ok(())
}
