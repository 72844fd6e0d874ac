use alloc::string::String;
use alloc::vec::Vec;

use crate::{PageControl, SortDirection};

/// Funnel icon state of a header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterBadge {
    pub open: bool,
    pub active: bool,
    pub disabled: bool,
}

/// Reorder feedback of a header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragHint {
    pub draggable: bool,
    pub dragging: bool,
    pub hover_target: bool,
    /// Selected by a first tap, waiting for the swap target.
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderView {
    pub key: String,
    pub title: String,
    pub width_px: Option<u32>,
    pub class_name: Option<String>,
    pub helper: Option<String>,
    pub sortable: bool,
    pub ranking_start: SortDirection,
    pub filter: Option<FilterBadge>,
    pub drag: DragHint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellView {
    pub column_key: String,
    pub content: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowView<K> {
    pub key: K,
    /// Position among the rendered rows.
    pub index: usize,
    /// Alternating background. Cosmetic only.
    pub striped: bool,
    pub cells: Vec<CellView>,
}

/// What the table body shows in this render pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableBody<K> {
    /// Placeholder rows while data loads, one skeleton cell per visible column.
    Skeleton { rows: usize, columns: usize },
    /// Loaded with zero items.
    Empty,
    Rows {
        rows: Vec<RowView<K>>,
        /// Placeholder rows appended while the next page loads.
        trailing_skeleton_rows: usize,
    },
}

impl<K> TableBody<K> {
    pub fn rows(&self) -> &[RowView<K>] {
        match self {
            Self::Rows { rows, .. } => rows,
            _ => &[],
        }
    }

    pub fn is_skeleton(&self) -> bool {
        matches!(self, Self::Skeleton { .. })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Footer {
    pub display_text: String,
    pub current_page: usize,
    pub total_pages: usize,
    /// Empty when there is nothing to page through.
    pub controls: Vec<PageControl>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutHints {
    pub row_height: Option<u32>,
    pub min_content_width: Option<u32>,
    pub scrollable: bool,
}

/// Everything a host needs to draw one frame of the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableView<K> {
    pub headers: Vec<HeaderView>,
    pub body: TableBody<K>,
    /// Present when the table is paginated.
    pub footer: Option<Footer>,
    pub total_pages: usize,
    pub layout: LayoutHints,
}
