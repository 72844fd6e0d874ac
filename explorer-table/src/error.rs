use alloc::string::String;

/// Errors reported by the table engine.
///
/// These are programmer/input errors: the engine never fails because of data it renders.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("invalid page size: items per page must be greater than zero")]
    InvalidPageSize,
    #[error("invalid page {page}: pages are numbered from 1")]
    InvalidPage { page: usize },
    #[error("duplicate column key `{key}`")]
    DuplicateColumnKey { key: String },
    #[error("unknown column key `{key}`")]
    UnknownColumnKey { key: String },
    #[error("column index {index} out of bounds for {len} columns")]
    ColumnIndexOutOfBounds { index: usize, len: usize },
}
