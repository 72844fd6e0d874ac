use alloc::collections::BTreeSet;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{ColumnFilter, TableError};

/// Renders the cell content of a column for one item. `None` renders an empty cell.
pub type CellRenderer<T> = Arc<dyn Fn(&T) -> Option<String> + Send + Sync>;

/// Initial direction when a rankable column is first sorted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Describes how one table column renders and behaves.
pub struct Column<T> {
    pub key: String,
    pub title: String,
    pub render: CellRenderer<T>,
    pub width_px: Option<u32>,
    pub visible: bool,
    /// Whether the header offers a ranking (sort) toggle.
    pub stand_by_ranking: bool,
    pub ranking_start: SortDirection,
    pub class_name: Option<String>,
    pub filter: Option<ColumnFilter>,
    /// Tooltip content shown next to the title.
    pub helper: Option<String>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            title: self.title.clone(),
            render: Arc::clone(&self.render),
            width_px: self.width_px,
            visible: self.visible,
            stand_by_ranking: self.stand_by_ranking,
            ranking_start: self.ranking_start,
            class_name: self.class_name.clone(),
            filter: self.filter.clone(),
            helper: self.helper.clone(),
        }
    }
}

impl<T> Column<T> {
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        render: impl Fn(&T) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            render: Arc::new(render),
            width_px: None,
            visible: true,
            stand_by_ranking: false,
            ranking_start: SortDirection::default(),
            class_name: None,
            filter: None,
            helper: None,
        }
    }

    pub fn with_width(mut self, width_px: u32) -> Self {
        self.width_px = Some(width_px);
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_ranking(mut self, ranking_start: SortDirection) -> Self {
        self.stand_by_ranking = true;
        self.ranking_start = ranking_start;
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_filter(mut self, filter: ColumnFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn with_helper(mut self, helper: impl Into<String>) -> Self {
        self.helper = Some(helper.into());
        self
    }

    pub fn render_cell(&self, item: &T) -> Option<String> {
        (self.render)(item)
    }
}

impl<T> core::fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("width_px", &self.width_px)
            .field("visible", &self.visible)
            .field("stand_by_ranking", &self.stand_by_ranking)
            .field("ranking_start", &self.ranking_start)
            .field("class_name", &self.class_name)
            .field("filter", &self.filter)
            .field("helper", &self.helper)
            .finish_non_exhaustive()
    }
}

/// An ordered set of columns with unique keys.
///
/// The order of the set is the rendered order. Reordering moves whole descriptors.
pub struct ColumnSet<T> {
    columns: Vec<Column<T>>,
}

impl<T> Clone for ColumnSet<T> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
        }
    }
}

impl<T> core::fmt::Debug for ColumnSet<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.columns.iter()).finish()
    }
}

impl<T> Default for ColumnSet<T> {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
        }
    }
}

impl<T> ColumnSet<T> {
    pub fn new(columns: Vec<Column<T>>) -> Result<Self, TableError> {
        let mut seen = BTreeSet::new();
        for c in &columns {
            if !seen.insert(c.key.as_str()) {
                return Err(TableError::DuplicateColumnKey { key: c.key.clone() });
            }
        }
        Ok(Self { columns })
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Column<T>> {
        self.columns.get(index)
    }

    pub fn get_by_key(&self, key: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Mutable access for caller-owned state such as the filter flags.
    pub fn get_by_key_mut(&mut self, key: &str) -> Option<&mut Column<T>> {
        self.columns.iter_mut().find(|c| c.key == key)
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column<T>> {
        self.columns.iter()
    }

    pub fn visible(&self) -> impl Iterator<Item = &Column<T>> {
        self.columns.iter().filter(|c| c.visible)
    }

    pub fn visible_len(&self) -> usize {
        self.visible().count()
    }

    /// Maps a position among visible columns to a position in the full set.
    pub fn visible_to_full(&self, visible_index: usize) -> Option<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.visible)
            .nth(visible_index)
            .map(|(i, _)| i)
    }

    pub fn keys(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.key.clone()).collect()
    }

    fn check_index(&self, index: usize) -> Result<(), TableError> {
        if index >= self.columns.len() {
            return Err(TableError::ColumnIndexOutOfBounds {
                index,
                len: self.columns.len(),
            });
        }
        Ok(())
    }

    /// Removes the column at `from` and reinserts it at `to`.
    pub fn move_column(&mut self, from: usize, to: usize) -> Result<(), TableError> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from != to {
            let column = self.columns.remove(from);
            self.columns.insert(to, column);
        }
        Ok(())
    }

    /// Exchanges the columns at `a` and `b`.
    pub fn swap_columns(&mut self, a: usize, b: usize) -> Result<(), TableError> {
        self.check_index(a)?;
        self.check_index(b)?;
        self.columns.swap(a, b);
        Ok(())
    }

    /// Reorders the set to follow `keys`.
    ///
    /// Columns not named in `keys` keep their relative order after the named ones. Duplicate
    /// names are ignored after their first occurrence.
    pub fn apply_order<S: AsRef<str>>(&mut self, keys: &[S]) -> Result<(), TableError> {
        for k in keys {
            if self.position(k.as_ref()).is_none() {
                return Err(TableError::UnknownColumnKey {
                    key: k.as_ref().to_string(),
                });
            }
        }

        let mut rest: Vec<Option<Column<T>>> = self.columns.drain(..).map(Some).collect();
        let mut ordered = Vec::with_capacity(rest.len());
        for k in keys {
            let slot = rest
                .iter_mut()
                .find(|c| c.as_ref().is_some_and(|c| c.key == k.as_ref()));
            if let Some(column) = slot.and_then(Option::take) {
                ordered.push(column);
            }
        }
        ordered.extend(rest.into_iter().flatten());
        self.columns = ordered;
        Ok(())
    }
}
