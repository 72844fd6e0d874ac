use crate::*;

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Clone, Debug, PartialEq)]
struct Block {
    height: u64,
    slot: u64,
    tx_count: u32,
}

const NO_BLOCKS: &[Block] = &[];

fn blocks(n: u64) -> Vec<Block> {
    (0..n)
        .map(|i| Block {
            height: 1000 + i,
            slot: 50_000 + i * 20,
            tx_count: (i % 7) as u32,
        })
        .collect()
}

fn block_columns() -> ColumnSet<Block> {
    ColumnSet::new(vec![
        Column::new("height", "Block", |b: &Block| Some(b.height.to_string())),
        Column::new("slot", "Slot", |b: &Block| Some(b.slot.to_string())),
        Column::new("tx", "Transactions", |b: &Block| {
            (b.tx_count > 0).then(|| b.tx_count.to_string())
        }),
    ])
    .unwrap()
}

fn keyed(columns: &[&str]) -> ColumnSet<Block> {
    ColumnSet::new(
        columns
            .iter()
            .map(|k| Column::new(*k, k.to_uppercase(), |_: &Block| None))
            .collect(),
    )
    .unwrap()
}

fn paginated(total_items: usize, items_per_page: usize) -> TableOptions<Block, u64> {
    TableOptions::new(|b: &Block| b.height)
        .with_mode(TableMode::paginated())
        .with_total_items(total_items)
        .with_items_per_page(items_per_page)
        .unwrap()
}

fn row_keys(view: &TableView<u64>) -> Vec<u64> {
    view.body.rows().iter().map(|r| r.key).collect()
}

fn order_recorder() -> (Arc<Mutex<Vec<Vec<String>>>>, impl Fn(&[String]) + Send + Sync) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    (log, move |keys: &[String]| {
        sink.lock().unwrap().push(keys.to_vec());
    })
}

#[test]
fn total_pages_is_ceiling_division() {
    let size = PageSize::new(20).unwrap();
    assert_eq!(total_pages(0, size), 0);
    assert_eq!(total_pages(1, size), 1);
    assert_eq!(total_pages(20, size), 1);
    assert_eq!(total_pages(21, size), 2);
    assert_eq!(total_pages(50, size), 3);

    for total in 0..200usize {
        for per_page in 1..13usize {
            let expected = total / per_page + usize::from(total % per_page != 0);
            assert_eq!(total_pages(total, PageSize::new(per_page).unwrap()), expected);
        }
    }
}

#[test]
fn zero_page_size_is_rejected() {
    assert_eq!(PageSize::new(0), Err(TableError::InvalidPageSize));
    assert_eq!(Pagination::new(1, 10, 0), Err(TableError::InvalidPageSize));
    assert!(TableOptions::new(|b: &Block| b.height).with_items_per_page(0).is_err());
}

#[test]
fn page_zero_is_rejected() {
    assert_eq!(
        Pagination::new(0, 10, 5),
        Err(TableError::InvalidPage { page: 0 })
    );
    let mut t = Table::new(block_columns(), paginated(50, 20));
    assert_eq!(t.go_to_page(0), Err(TableError::InvalidPage { page: 0 }));
}

#[test]
fn slice_range_never_exceeds_bounds() {
    for len in 0..40usize {
        for page in 1..10usize {
            let p = Pagination::new(page, len, 7).unwrap();
            let r = p.slice_range(len);
            assert!(r.start <= r.end);
            assert!(r.end <= len);
            assert!(r.end - r.start <= 7);
        }
    }
}

#[test]
fn first_page_of_fifty_items() {
    let items = blocks(50);
    let t = Table::new(block_columns(), paginated(50, 20));
    let view = t.render(Some(items.as_slice()));

    assert_eq!(view.total_pages, 3);
    assert_eq!(row_keys(&view), (1000..1020).collect::<Vec<_>>());
}

#[test]
fn internal_paging_slices_each_page() {
    let items = blocks(50);
    let mut t = Table::new(block_columns(), paginated(50, 20));

    for page in 1..=3usize {
        assert!(t.go_to_page(page).unwrap());
        let expected: Vec<u64> = items[(page - 1) * 20..(page * 20).min(50)]
            .iter()
            .map(|b| b.height)
            .collect();
        assert_eq!(row_keys(&t.render(Some(items.as_slice()))), expected);
    }

    // Past the last page: empty slice, no panic.
    t.go_to_page(9).unwrap();
    assert!(t.render(Some(items.as_slice())).body.rows().is_empty());
}

#[test]
fn next_and_previous_stop_at_edges() {
    let mut t = Table::new(block_columns(), paginated(50, 20));
    assert!(!t.previous_page().unwrap());
    assert!(t.next_page().unwrap());
    assert!(t.next_page().unwrap());
    assert_eq!(t.current_page(), 3);
    assert!(!t.next_page().unwrap());
    assert!(t.previous_page().unwrap());
    assert_eq!(t.current_page(), 2);
}

#[test]
fn external_paging_forwards_navigation() {
    let requested = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&requested);
    let opts = TableOptions::new(|b: &Block| b.height)
        .with_mode(TableMode::Default {
            paging: Paging::external(2, move |page| sink.store(page, Ordering::Relaxed)),
        })
        .with_total_items(100)
        .with_items_per_page(10)
        .unwrap();
    let mut t = Table::new(block_columns(), opts);

    // Items are already the current page: nothing is sliced.
    let page_items = blocks(10);
    let view = t.render(Some(page_items.as_slice()));
    assert_eq!(view.body.rows().len(), 10);
    assert_eq!(view.total_pages, 10);
    assert_eq!(view.footer.as_ref().unwrap().current_page, 2);

    assert!(t.next_page().unwrap());
    assert_eq!(requested.load(Ordering::Relaxed), 3);
    // The caller owns the page; it has not moved until the caller says so.
    assert_eq!(t.current_page(), 2);
}

#[test]
fn unpaginated_and_infinite_tables_ignore_navigation() {
    let mut t = Table::new(block_columns(), TableOptions::new(|b: &Block| b.height));
    assert!(!t.go_to_page(2).unwrap());
    let items = blocks(30);
    let view = t.render(Some(items.as_slice()));
    assert_eq!(view.body.rows().len(), 30);
    assert!(view.footer.is_none());

    let mut inf = Table::new(
        block_columns(),
        TableOptions::new(|b: &Block| b.height).with_mode(TableMode::infinite(|| {})),
    );
    assert!(!inf.go_to_page(2).unwrap());
    assert_eq!(inf.render(Some(items.as_slice())).body.rows().len(), 30);
}

#[test]
fn render_is_idempotent() {
    let items = blocks(45);
    let mut t = Table::new(block_columns(), paginated(45, 10));
    t.go_to_page(3).unwrap();
    let a = t.render(Some(items.as_slice()));
    let b = t.render(Some(items.as_slice()));
    assert_eq!(a, b);
}

#[test]
fn empty_total_renders_empty_state_without_controls() {
    let t = Table::new(block_columns(), paginated(0, 20));
    let view = t.render(Some(NO_BLOCKS));

    assert!(view.body.is_empty());
    assert_eq!(view.total_pages, 0);
    let footer = view.footer.unwrap();
    assert!(footer.controls.is_empty());
    assert_eq!(footer.display_text, "No items");
}

#[test]
fn missing_items_collapse_total_pages_unless_loading() {
    let mut t = Table::new(block_columns(), paginated(50, 20));
    let view = t.render(None);
    assert_eq!(view.total_pages, 0);
    assert!(view.body.is_empty());

    t.set_loading(true);
    assert_eq!(t.render(None).total_pages, 3);
}

#[test]
fn loading_transition_keeps_total_pages() {
    let items = blocks(50);
    let mut t = Table::new(block_columns(), paginated(50, 20).with_loading(true));

    let loading = t.render(Some(items.as_slice()));
    assert_eq!(
        loading.body,
        TableBody::Skeleton {
            rows: 20,
            columns: 3
        }
    );

    t.set_loading(false);
    let loaded = t.render(Some(items.as_slice()));
    assert_eq!(loaded.body.rows().len(), 20);
    assert_eq!(loading.total_pages, loaded.total_pages);
}

#[test]
fn display_text_uses_min_of_items_and_total() {
    let items = blocks(50);
    let t = Table::new(block_columns(), paginated(40, 20));
    let footer = t.render(Some(items.as_slice())).footer.unwrap();
    assert_eq!(footer.display_text, "Displaying 40 out of 40 items");

    let t = Table::new(block_columns(), paginated(120, 20));
    let footer = t.render(Some(items.as_slice())).footer.unwrap();
    assert_eq!(footer.display_text, "Displaying 50 out of 120 items");
}

#[test]
fn display_text_formatter_can_be_localized() {
    let items = blocks(5);
    let opts = paginated(5, 20).with_display_text(|count| match count {
        Some(c) => alloc::format!("{}/{}", c.displayed, c.total),
        None => String::from("vide"),
    });
    let t = Table::new(block_columns(), opts);
    assert_eq!(t.render(Some(items.as_slice())).footer.unwrap().display_text, "5/5");
    assert_eq!(t.render(Some(NO_BLOCKS)).footer.unwrap().display_text, "vide");
}

#[test]
fn rows_are_striped_and_keyed() {
    let items = blocks(4);
    let t = Table::new(block_columns(), TableOptions::new(|b: &Block| b.height));
    let view = t.render(Some(items.as_slice()));
    let rows = view.body.rows();

    assert_eq!(
        rows.iter().map(|r| r.striped).collect::<Vec<_>>(),
        vec![false, true, false, true]
    );
    assert_eq!(rows[2].key, 1002);
    assert_eq!(rows[1].cells[0].content.as_deref(), Some("1001"));
    assert_eq!(rows[1].cells[2].content.as_deref(), Some("1"));
    // tx_count == 0 renders an empty cell.
    assert_eq!(rows[0].cells[2].content, None);
}

#[test]
fn row_keys_follow_items_not_positions() {
    let mut items = blocks(3);
    let t = Table::new(block_columns(), TableOptions::new(|b: &Block| b.height));
    let before = t.render(Some(items.as_slice()));
    items.reverse();
    let after = t.render(Some(items.as_slice()));

    assert_eq!(row_keys(&before), vec![1000, 1001, 1002]);
    assert_eq!(row_keys(&after), vec![1002, 1001, 1000]);
    assert_eq!(after.body.rows()[0].cells[0].content.as_deref(), Some("1002"));
}

#[test]
fn hidden_columns_are_not_rendered() {
    let mut columns = block_columns();
    columns.get_by_key_mut("slot").unwrap().visible = false;
    let t = Table::new(columns, TableOptions::new(|b: &Block| b.height));
    let view = t.render(Some(blocks(1).as_slice()));

    assert_eq!(
        view.headers.iter().map(|h| h.key.as_str()).collect::<Vec<_>>(),
        vec!["height", "tx"]
    );
    assert_eq!(view.body.rows()[0].cells.len(), 2);
}

#[test]
fn duplicate_column_keys_are_rejected() {
    let err = ColumnSet::new(vec![
        Column::new("a", "A", |_: &Block| None),
        Column::new("a", "A again", |_: &Block| None),
    ])
    .unwrap_err();
    assert_eq!(
        err,
        TableError::DuplicateColumnKey {
            key: String::from("a")
        }
    );
}

#[test]
fn infinite_mode_renders_trailing_skeleton_while_fetching() {
    let items = blocks(25);
    let mut t = Table::new(
        block_columns(),
        TableOptions::new(|b: &Block| b.height)
            .with_mode(TableMode::infinite(|| {}))
            .with_items_per_page(25)
            .unwrap(),
    );

    let idle = t.render(Some(items.as_slice()));
    assert_eq!(
        idle.body,
        TableBody::Rows {
            rows: idle.body.rows().to_vec(),
            trailing_skeleton_rows: 0
        }
    );

    t.set_fetching_next_page(true);
    match t.render(Some(items.as_slice())).body {
        TableBody::Rows {
            rows,
            trailing_skeleton_rows,
        } => {
            assert_eq!(rows.len(), 25);
            assert_eq!(trailing_skeleton_rows, 25);
        }
        other => panic!("unexpected body: {other:?}"),
    }

    // First load of an infinite table: skeleton only.
    assert!(t.render(Some(NO_BLOCKS)).body.is_skeleton());
    t.set_fetching_next_page(false);
    assert!(t.render(Some(NO_BLOCKS)).body.is_empty());
}

#[test]
fn infinite_scroll_fires_once_per_qualifying_event() {
    let fetches = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&fetches);
    let mut t = Table::new(
        block_columns(),
        TableOptions::new(|b: &Block| b.height).with_mode(TableMode::infinite(move || {
            sink.fetch_add(1, Ordering::Relaxed);
        })),
    );

    let near = ScrollMetrics::new(800.0 + 150.0, 800.0);
    assert!(t.on_scroll(near));
    assert_eq!(fetches.load(Ordering::Relaxed), 1);

    // Level-triggered: a second qualifying event fires again.
    assert!(t.on_scroll(near));
    assert_eq!(fetches.load(Ordering::Relaxed), 2);

    // Far from the end.
    assert!(!t.on_scroll(ScrollMetrics::new(800.0 + 201.0, 800.0)));
    // Exactly on the threshold still fires.
    assert!(t.on_scroll(ScrollMetrics::new(1000.0, 800.0)));
    assert_eq!(fetches.load(Ordering::Relaxed), 3);

    t.set_loading(true);
    assert!(!t.on_scroll(near));
    t.set_loading(false);
    t.set_fetching_next_page(true);
    assert!(!t.on_scroll(near));
    assert_eq!(fetches.load(Ordering::Relaxed), 3);
}

#[test]
fn default_tables_never_fetch_on_scroll() {
    let t = Table::new(block_columns(), paginated(10, 5));
    assert!(!t.on_scroll(ScrollMetrics::new(0.0, 800.0)));
}

#[test]
fn drag_drop_moves_column_by_reinsertion() {
    let (log, on_change) = order_recorder();
    let mut t = Table::new(
        keyed(&["a", "b", "c"]),
        TableOptions::new(|b: &Block| b.height).with_on_order_change(on_change),
    );

    assert!(t.drag_start(0));
    t.drag_over(2);
    assert_eq!(
        t.reorder_state(),
        ReorderState::Dragging {
            from: 0,
            hover: Some(2)
        }
    );
    let headers = t.headers();
    assert!(headers[0].drag.dragging);
    assert!(headers[2].drag.hover_target);

    assert!(t.drop(2).unwrap());
    assert_eq!(t.column_order(), vec!["b", "c", "a"]);
    assert_eq!(t.reorder_state(), ReorderState::Idle);
    assert_eq!(log.lock().unwrap().as_slice(), &[vec![
        String::from("b"),
        String::from("c"),
        String::from("a")
    ]]);
}

#[test]
fn drag_drop_round_trip_restores_order() {
    let (_log, on_change) = order_recorder();
    let mut t = Table::new(
        keyed(&["a", "b", "c", "d", "e"]),
        TableOptions::new(|b: &Block| b.height).with_on_order_change(on_change),
    );
    let original = t.column_order();

    for i in 0..5usize {
        for j in 0..5usize {
            t.drag_start(i);
            t.drop(j).unwrap();
            t.drag_start(j);
            t.drop(i).unwrap();
            assert_eq!(t.column_order(), original, "i={i} j={j}");
        }
    }
}

#[test]
fn dropping_on_source_or_ending_drag_changes_nothing() {
    let (log, on_change) = order_recorder();
    let mut t = Table::new(
        keyed(&["a", "b", "c"]),
        TableOptions::new(|b: &Block| b.height).with_on_order_change(on_change),
    );

    t.drag_start(1);
    assert!(!t.drop(1).unwrap());
    t.drag_start(1);
    t.drag_end();
    assert_eq!(t.reorder_state(), ReorderState::Idle);
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn tap_to_swap_exchanges_columns() {
    let (log, on_change) = order_recorder();
    let mut t = Table::new(
        keyed(&["a", "b", "c", "d"]),
        TableOptions::new(|b: &Block| b.height)
            .with_on_order_change(on_change)
            .with_input_mode(InputMode::Touch),
    );

    assert!(!t.tap(0).unwrap());
    assert!(t.headers()[0].drag.selected);
    assert!(t.tap(3).unwrap());
    assert_eq!(t.column_order(), vec!["d", "b", "c", "a"]);
    assert_eq!(t.reorder_state(), ReorderState::Idle);
    assert_eq!(log.lock().unwrap().len(), 1);

    // Tap outside clears the selection.
    t.tap(1).unwrap();
    t.tap_outside();
    assert_eq!(t.reorder_state(), ReorderState::Idle);

    // Tapping the same column twice deselects.
    t.tap(2).unwrap();
    assert!(!t.tap(2).unwrap());
    assert_eq!(t.reorder_state(), ReorderState::Idle);
    assert_eq!(log.lock().unwrap().len(), 1);

    // Touch mode ignores drag gestures.
    assert!(!t.drag_start(0));
}

#[test]
fn pointer_mode_ignores_taps_and_hybrid_accepts_both() {
    let (_log, on_change) = order_recorder();
    let mut t = Table::new(
        keyed(&["a", "b"]),
        TableOptions::new(|b: &Block| b.height).with_on_order_change(on_change),
    );
    t.tap(0).unwrap();
    assert_eq!(t.reorder_state(), ReorderState::Idle);

    t.update_options(|o| o.input_mode = InputMode::Hybrid);
    assert!(!t.tap(0).unwrap());
    assert!(t.tap(1).unwrap());
    assert_eq!(t.column_order(), vec!["b", "a"]);
    assert!(t.drag_start(0));
    assert!(t.drop(1).unwrap());
    assert_eq!(t.column_order(), vec!["a", "b"]);
}

#[test]
fn reorder_is_disabled_without_callback_or_with_disable_drag() {
    let mut t = Table::new(keyed(&["a", "b"]), TableOptions::new(|b: &Block| b.height));
    assert!(!t.drag_start(0));
    assert!(!t.drop(1).unwrap());
    assert!(!t.headers()[0].drag.draggable);

    let (log, on_change) = order_recorder();
    let mut t = Table::new(
        keyed(&["a", "b"]),
        TableOptions::new(|b: &Block| b.height)
            .with_on_order_change(on_change)
            .with_disable_drag(true),
    );
    assert!(!t.drag_start(0));
    assert_eq!(t.column_order(), vec!["a", "b"]);
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn reorder_indexes_skip_hidden_columns() {
    let (_log, on_change) = order_recorder();
    let mut columns = keyed(&["a", "hidden", "b", "c"]);
    columns.get_by_key_mut("hidden").unwrap().visible = false;
    let mut t = Table::new(
        columns,
        TableOptions::new(|b: &Block| b.height).with_on_order_change(on_change),
    );

    // Visible order is [a, b, c]; move `a` onto `c`.
    t.drag_start(0);
    assert!(t.drop(2).unwrap());
    assert_eq!(t.column_order(), vec!["hidden", "b", "c", "a"]);
    assert!(!t.drag_start(3));
}

#[test]
fn order_change_builder_enables_and_field_clears_reordering() {
    let (log, on_change) = order_recorder();
    let mut t = Table::new(
        keyed(&["a", "b"]),
        TableOptions::new(|b: &Block| b.height).with_on_order_change(on_change),
    );
    assert!(t.reorder_enabled());
    assert!(t.drag_start(0));
    assert!(t.drop(1).unwrap());
    assert_eq!(log.lock().unwrap().len(), 1);

    t.update_options(|o| o.on_order_change = None);
    assert!(!t.reorder_enabled());
    assert!(!t.drag_start(0));
    assert_eq!(t.column_order(), vec!["b", "a"]);
}

#[test]
fn apply_order_follows_keys_and_keeps_the_rest() {
    let mut columns = keyed(&["a", "b", "c", "d"]);
    columns.apply_order(&["c", "a"]).unwrap();
    assert_eq!(columns.keys(), vec!["c", "a", "b", "d"]);

    assert_eq!(
        columns.apply_order(&["zz"]),
        Err(TableError::UnknownColumnKey {
            key: String::from("zz")
        })
    );
    assert_eq!(
        columns.move_column(0, 9),
        Err(TableError::ColumnIndexOutOfBounds { index: 9, len: 4 })
    );
}

#[test]
fn filter_actions_reach_caller_callbacks() {
    let calls = Arc::new(Mutex::new(Vec::<&'static str>::new()));
    let (s, r, f) = (Arc::clone(&calls), Arc::clone(&calls), Arc::clone(&calls));
    let filter = ColumnFilter::new()
        .with_anchor(AnchorId(7))
        .with_on_show(move || s.lock().unwrap().push("show"))
        .with_on_reset(move || r.lock().unwrap().push("reset"))
        .with_on_filter(move || f.lock().unwrap().push("filter"));
    let columns = ColumnSet::new(vec![
        Column::new("epoch", "Epoch", |_: &Block| None).with_filter(filter),
        Column::new("slot", "Slot", |_: &Block| None),
    ])
    .unwrap();
    let mut t = Table::new(columns, TableOptions::new(|b: &Block| b.height));

    assert!(t.filter_action("epoch", FilterAction::Show).unwrap());
    t.set_filter_open("epoch", true).unwrap();
    assert!(t.headers()[0].filter.unwrap().open);
    assert!(t.filter_action("epoch", FilterAction::Apply).unwrap());
    assert!(t.filter_action("epoch", FilterAction::Reset).unwrap());
    assert!(!t.filter_action("slot", FilterAction::Show).unwrap());
    assert!(t.headers()[1].filter.is_none());
    assert!(matches!(
        t.filter_action("nope", FilterAction::Show),
        Err(TableError::UnknownColumnKey { .. })
    ));

    assert_eq!(calls.lock().unwrap().as_slice(), &["show", "filter", "reset"]);
}

#[test]
fn disabled_funnel_suppresses_show() {
    let shown = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&shown);
    let filter = ColumnFilter::new()
        .with_button_disabled(true)
        .with_on_show(move || {
            sink.fetch_add(1, Ordering::Relaxed);
        });
    assert!(!filter.dispatch(FilterAction::Show));
    assert_eq!(shown.load(Ordering::Relaxed), 0);
}

#[test]
fn page_controls_insert_ellipses() {
    use PageControl::*;

    let p = Pagination::new(5, 100, 10).unwrap();
    assert_eq!(p.controls(1), vec![
        Previous { enabled: true },
        Page {
            number: 1,
            selected: false
        },
        Ellipsis,
        Page {
            number: 4,
            selected: false
        },
        Page {
            number: 5,
            selected: true
        },
        Page {
            number: 6,
            selected: false
        },
        Ellipsis,
        Page {
            number: 10,
            selected: false
        },
        Next { enabled: true },
    ]);

    // A one-page gap is filled instead of elided.
    let p = Pagination::new(4, 100, 10).unwrap();
    let numbers: Vec<usize> = p
        .controls(1)
        .into_iter()
        .filter_map(|c| match c {
            Page { number, .. } => Some(number),
            _ => None,
        })
        .collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5, 10]);

    let single = Pagination::new(1, 3, 10).unwrap();
    assert_eq!(single.controls(1), vec![
        Previous { enabled: false },
        Page {
            number: 1,
            selected: true
        },
        Next { enabled: false },
    ]);

    assert!(Pagination::new(1, 0, 10).unwrap().controls(1).is_empty());
}

#[test]
fn page_size_change_resets_internal_page() {
    let mut t = Table::new(block_columns(), paginated(100, 10));
    t.go_to_page(4).unwrap();
    t.update_options(|o| o.total_items = 120);
    assert_eq!(t.current_page(), 4);
    t.update_options(|o| o.page_size = PageSize::new(25).unwrap());
    assert_eq!(t.current_page(), 1);
}

#[test]
fn state_can_roundtrip() {
    let (log, on_change) = order_recorder();
    let mut t1 = Table::new(
        keyed(&["a", "b", "c"]),
        paginated(90, 10).with_on_order_change(on_change),
    );
    t1.go_to_page(3).unwrap();
    t1.drag_start(2);
    t1.drop(0).unwrap();
    let state = t1.state();
    assert_eq!(state.current_page, 3);
    assert_eq!(state.column_order, vec!["c", "a", "b"]);

    let mut t2 = Table::new(keyed(&["a", "b", "c"]), paginated(90, 10));
    t2.restore_state(&state).unwrap();
    assert_eq!(t2.state(), state);
    // Restoring does not count as a user reorder.
    assert_eq!(log.lock().unwrap().len(), 1);

    assert_eq!(
        t2.restore_state(&TableState {
            current_page: 0,
            column_order: Vec::new()
        }),
        Err(TableError::InvalidPage { page: 0 })
    );
}

#[test]
fn layout_hints_pass_through() {
    let t = Table::new(
        block_columns(),
        TableOptions::new(|b: &Block| b.height)
            .with_row_height(48)
            .with_min_content_width(960)
            .with_scrollable(true),
    );
    assert_eq!(
        t.render(None).layout,
        LayoutHints {
            row_height: Some(48),
            min_content_width: Some(960),
            scrollable: true
        }
    );
}
