//! Adapter utilities for the `explorer-table` crate.
//!
//! The `explorer-table` crate is UI-agnostic and focuses on the table logic. This crate provides
//! the framework-neutral pieces a host application wires around it:
//!
//! - An event hub with stable listener handles that deregister on drop
//! - A table controller that registers scroll/resize listeners for infinite scroll and filter
//!   popovers, and releases them when they are no longer needed
//! - Popover placement relative to an anchor element
//! - Recent-search history over a pluggable key-value store, and a debounced search context
//! - Application state stores (theme, view mode, open dropdown) passed down explicitly
//!
//! This crate is intentionally framework-agnostic (no DOM/TUI bindings). The host implements
//! [`LayoutProbe`] and forwards its scroll/resize events into an [`EventHub`].
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod app_state;
mod controller;
mod error;
mod events;
mod geometry;
mod popover;
mod probe;
mod recent;
mod search;


pub use app_state::{AppState, DropdownId, DropdownRegistry, Store, Theme, ViewMode};
pub use controller::TableController;
pub use error::AdapterError;
pub use events::{EventHub, ListenerId, Subscription};
pub use geometry::{Bounds, ScrollOffset, ViewportEvent, ViewportSize};
pub use popover::{
    DEFAULT_POPOVER_WIDTH_PX, POPOVER_GAP_PX, PopoverPosition, PopoverTracker, place_popover,
};
pub use probe::{LayoutProbe, detect_input_mode};
pub use recent::{
    FileStore, KeyValueStore, MemoryStore, RECENT_SEARCH_LIMIT, RECENT_SEARCHES_KEY,
    RecentSearches,
};
pub use search::{DEFAULT_SEARCH_DEBOUNCE_MS, SearchContext, SearchRequest};
