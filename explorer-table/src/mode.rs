use alloc::sync::Arc;

/// Called with the requested 1-based page when the caller owns the current page.
pub type NavigateCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Called when an infinite table wants the next page.
pub type FetchNextPageCallback = Arc<dyn Fn() + Send + Sync>;

/// Pagination regime of a [`TableMode::Default`] table.
#[derive(Clone)]
pub enum Paging {
    /// All supplied rows are shown and no pagination controls are rendered.
    Disabled,
    /// The table owns the current page and slices the full item set itself.
    Internal,
    /// The caller owns the current page (typically a server query) and supplies only that
    /// page's items. Navigation requests are forwarded to `on_navigate`.
    External {
        current_page: usize,
        on_navigate: NavigateCallback,
    },
}

impl Paging {
    pub fn external(
        current_page: usize,
        on_navigate: impl Fn(usize) + Send + Sync + 'static,
    ) -> Self {
        Self::External {
            current_page,
            on_navigate: Arc::new(on_navigate),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

impl core::fmt::Debug for Paging {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Disabled => f.write_str("Disabled"),
            Self::Internal => f.write_str("Internal"),
            Self::External { current_page, .. } => f
                .debug_struct("External")
                .field("current_page", current_page)
                .finish_non_exhaustive(),
        }
    }
}

/// Which windowing and fetch logic applies to a table.
#[derive(Clone)]
pub enum TableMode {
    /// Fixed pages, either sliced client-side or served page by page by the caller.
    Default { paging: Paging },
    /// All fetched pages concatenated into one growing list; the next page is requested when the
    /// table bottom nears the viewport bottom.
    Infinite {
        /// Number of pages fetched so far, as reported by the caller's query layer.
        current_page: usize,
        is_fetching_next_page: bool,
        on_fetch_next_page: Option<FetchNextPageCallback>,
    },
}

impl TableMode {
    pub fn paginated() -> Self {
        Self::Default {
            paging: Paging::Internal,
        }
    }

    pub fn unpaginated() -> Self {
        Self::Default {
            paging: Paging::Disabled,
        }
    }

    pub fn infinite(on_fetch_next_page: impl Fn() + Send + Sync + 'static) -> Self {
        Self::Infinite {
            current_page: 1,
            is_fetching_next_page: false,
            on_fetch_next_page: Some(Arc::new(on_fetch_next_page)),
        }
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinite { .. })
    }

    /// Whether a footer with display text and page controls is rendered.
    pub fn is_paginated(&self) -> bool {
        match self {
            Self::Default { paging } => paging.is_enabled(),
            Self::Infinite { .. } => false,
        }
    }

    pub fn is_fetching_next_page(&self) -> bool {
        match self {
            Self::Infinite {
                is_fetching_next_page,
                ..
            } => *is_fetching_next_page,
            Self::Default { .. } => false,
        }
    }
}

impl Default for TableMode {
    fn default() -> Self {
        Self::unpaginated()
    }
}

impl core::fmt::Debug for TableMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Default { paging } => f.debug_struct("Default").field("paging", paging).finish(),
            Self::Infinite {
                current_page,
                is_fetching_next_page,
                on_fetch_next_page,
            } => f
                .debug_struct("Infinite")
                .field("current_page", current_page)
                .field("is_fetching_next_page", is_fetching_next_page)
                .field("has_on_fetch_next_page", &on_fetch_next_page.is_some())
                .finish(),
        }
    }
}
