use alloc::vec::Vec;
use core::num::NonZeroUsize;
use core::ops::Range;

use crate::TableError;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Number of items per page. Always greater than zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    pub fn new(items_per_page: usize) -> Result<Self, TableError> {
        NonZeroUsize::new(items_per_page)
            .map(Self)
            .ok_or(TableError::InvalidPageSize)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_ITEMS_PER_PAGE).unwrap_or(NonZeroUsize::MIN))
    }
}

impl TryFrom<usize> for PageSize {
    type Error = TableError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// `ceil(total_items / page_size)`.
pub fn total_pages(total_items: usize, page_size: PageSize) -> usize {
    total_items.div_ceil(page_size.get())
}

/// One entry of a pagination control strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageControl {
    Previous { enabled: bool },
    Page { number: usize, selected: bool },
    Ellipsis,
    Next { enabled: bool },
}

/// Page arithmetic for a single table instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    total_items: usize,
    page_size: PageSize,
}

impl Pagination {
    /// Creates pagination state. `current_page` is 1-based.
    pub fn new(
        current_page: usize,
        total_items: usize,
        items_per_page: usize,
    ) -> Result<Self, TableError> {
        let page_size = PageSize::new(items_per_page)?;
        Self::with_page_size(current_page, total_items, page_size)
    }

    pub fn with_page_size(
        current_page: usize,
        total_items: usize,
        page_size: PageSize,
    ) -> Result<Self, TableError> {
        if current_page == 0 {
            return Err(TableError::InvalidPage { page: current_page });
        }
        Ok(Self {
            current_page,
            total_items,
            page_size,
        })
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Index range of the current page within a full item array of length `len`.
    ///
    /// Pages past the end of the array yield an empty range at `len`.
    pub fn slice_range(&self, len: usize) -> Range<usize> {
        let size = self.page_size.get();
        let start = (self.current_page - 1).saturating_mul(size).min(len);
        let end = start.saturating_add(size).min(len);
        start..end
    }

    /// Count shown in the "Displaying X out of Y items" text.
    pub fn displayed_count(&self, items_len: usize) -> usize {
        items_len.min(self.total_items)
    }

    /// Builds the control strip: previous, page numbers with ellipses, next.
    ///
    /// The first and last pages are always present, plus `siblings` pages on each side of the
    /// current page. A gap of exactly one page is filled with that page instead of an ellipsis.
    pub fn controls(&self, siblings: usize) -> Vec<PageControl> {
        let total = self.total_pages();
        let mut out = Vec::new();
        if total == 0 {
            return out;
        }
        let current = self.current_page.min(total);

        out.push(PageControl::Previous {
            enabled: current > 1,
        });

        let lo = current.saturating_sub(siblings).max(1);
        let hi = current.saturating_add(siblings).min(total);

        let mut pages: Vec<usize> = Vec::with_capacity(hi - lo + 3);
        pages.push(1);
        pages.extend(lo.max(2)..=hi);
        if total > 1 && pages.last() != Some(&total) {
            pages.push(total);
        }

        let mut prev: Option<usize> = None;
        for page in pages {
            if let Some(p) = prev {
                if page - p == 2 {
                    out.push(PageControl::Page {
                        number: p + 1,
                        selected: p + 1 == current,
                    });
                } else if page - p > 2 {
                    out.push(PageControl::Ellipsis);
                }
            }
            out.push(PageControl::Page {
                number: page,
                selected: page == current,
            });
            prev = Some(page);
        }

        out.push(PageControl::Next {
            enabled: current < total,
        });
        out
    }
}
