//! A headless table engine for block-explorer style data tables.
//!
//! For adapter-level utilities (listener lifetimes, popover placement, search history), see the
//! `explorer-table-adapter` crate.
//!
//! This crate focuses on the logic behind a paginated/infinite table: page arithmetic, row
//! windowing, render-mode selection (skeleton/empty/rows), column ordering with a drag and
//! tap-to-swap state machine, and per-column filter dispatch.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - the item slice (or `None` while nothing has been fetched)
//! - loading flags and total item counts from its query layer
//! - pointer/touch gestures and scroll geometry
//!
//! and to render the [`TableView`] returned by [`Table::render`].
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod column;
mod error;
mod filter;
mod infinite;
mod key;
mod mode;
mod options;
mod pagination;
mod reorder;
mod state;
mod table;
mod view;

#[cfg(test)]
mod tests;

pub use column::{CellRenderer, Column, ColumnSet, SortDirection};
pub use error::TableError;
pub use filter::{AnchorId, ColumnFilter, FilterAction, FilterCallback};
pub use infinite::{FETCH_THRESHOLD_PX, FetchTrigger, ScrollMetrics};
pub use mode::{FetchNextPageCallback, NavigateCallback, Paging, TableMode};
pub use options::{
    DisplayCount, DisplayTextFormatter, OrderChangeCallback, RowKeySelector, TableOptions,
    default_display_text,
};
pub use pagination::{DEFAULT_ITEMS_PER_PAGE, PageControl, PageSize, Pagination, total_pages};
pub use reorder::{ColumnReorder, InputMode, ReorderOp, ReorderState};
pub use state::TableState;
pub use table::Table;
pub use view::{
    CellView, DragHint, FilterBadge, Footer, HeaderView, LayoutHints, RowView, TableBody,
    TableView,
};

#[doc(hidden)]
pub use key::RowKey;
