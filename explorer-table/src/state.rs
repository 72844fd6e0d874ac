use alloc::string::String;
use alloc::vec::Vec;

/// A lightweight, serializable snapshot of the state a table owns.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
///
/// This is useful for restoring the column order and internal page across sessions without
/// coupling the table to any storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableState {
    /// 1-based page. Only meaningful for internally paginated tables.
    pub current_page: usize,
    pub column_order: Vec<String>,
}
