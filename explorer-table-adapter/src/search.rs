use crate::{AdapterError, KeyValueStore, RecentSearches};

/// Delay between the last keystroke and the debounced query, in ms.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;

/// A search the host should run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchRequest {
    pub query: String,
    /// Entity filter (blocks, transactions, addresses, ...). `None` searches everything.
    pub category: Option<String>,
}

/// Search box state: the raw query, its debounced copy, the category and the history.
///
/// There is no timer. The host calls `tick(now_ms)` from its frame or timer loop, the same way
/// it drives the table controller.
#[derive(Clone, Debug)]
pub struct SearchContext<S> {
    query: String,
    debounced: String,
    category: Option<String>,
    last_edit_ms: Option<u64>,
    debounce_ms: u64,
    recent: RecentSearches<S>,
}

impl<S: KeyValueStore> SearchContext<S> {
    pub fn new(recent: RecentSearches<S>) -> Self {
        Self {
            query: String::new(),
            debounced: String::new(),
            category: None,
            last_edit_ms: None,
            debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            recent,
        }
    }

    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn debounced_query(&self) -> &str {
        &self.debounced
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// True while an edit waits for the debounce delay.
    pub fn is_pending(&self) -> bool {
        self.last_edit_ms.is_some()
    }

    pub fn recent(&self) -> &RecentSearches<S> {
        &self.recent
    }

    pub fn recent_mut(&mut self) -> &mut RecentSearches<S> {
        &mut self.recent
    }

    pub fn set_query(&mut self, query: impl Into<String>, now_ms: u64) {
        self.query = query.into();
        self.last_edit_ms = Some(now_ms);
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category;
    }

    /// Settles the debounce.
    ///
    /// Returns the new debounced query once `debounce_ms` have passed since the last edit and
    /// the query actually changed.
    pub fn tick(&mut self, now_ms: u64) -> Option<String> {
        let last = self.last_edit_ms?;
        if now_ms.saturating_sub(last) < self.debounce_ms {
            return None;
        }
        self.last_edit_ms = None;
        if self.debounced == self.query {
            return None;
        }
        self.debounced.clone_from(&self.query);
        atrace!(query = %self.debounced, "SearchContext: debounced");
        Some(self.debounced.clone())
    }

    /// Submits the current query immediately, recording it in the history.
    ///
    /// Returns `None` for a blank query.
    pub fn submit(&mut self) -> Result<Option<SearchRequest>, AdapterError> {
        self.last_edit_ms = None;
        self.debounced.clone_from(&self.query);

        let query = self.query.trim();
        if query.is_empty() {
            return Ok(None);
        }
        self.recent.record(query)?;
        adebug!(query, category = ?self.category, "SearchContext::submit");
        Ok(Some(SearchRequest {
            query: query.to_owned(),
            category: self.category.clone(),
        }))
    }

    /// Re-runs the history entry at `index` (newest first).
    pub fn select_recent(&mut self, index: usize) -> Result<Option<SearchRequest>, AdapterError> {
        let Some(query) = self.recent.entries().get(index).cloned() else {
            return Ok(None);
        };
        self.query = query;
        self.submit()
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.debounced.clear();
        self.last_edit_ms = None;
    }
}
