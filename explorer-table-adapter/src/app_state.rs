use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{EventHub, Subscription};

/// A shared, observable value.
///
/// Clones share the value and the listeners. `set` and `update` notify listeners only when the
/// value changed.
pub struct Store<T> {
    value: Arc<Mutex<T>>,
    hub: EventHub<T>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            hub: self.hub.clone(),
        }
    }
}

impl<T: Default> Default for Store<T> {
    fn default() -> Self {
        Self {
            value: Arc::new(Mutex::new(T::default())),
            hub: EventHub::new(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("value", &*self.lock())
            .field("listeners", &self.hub.listener_count())
            .finish()
    }
}

impl<T> Store<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Arc::new(Mutex::new(value)),
            hub: EventHub::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, T> {
        self.value.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn subscriber_count(&self) -> usize {
        self.hub.listener_count()
    }
}

impl<T: Clone + PartialEq + 'static> Store<T> {
    pub fn get(&self) -> T {
        self.lock().clone()
    }

    /// Returns `true` (and notifies) when the value changed.
    pub fn set(&self, value: T) -> bool {
        self.update(|current| *current = value)
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) -> bool {
        let changed = {
            let mut guard = self.lock();
            let before = guard.clone();
            f(&mut *guard);
            (*guard != before).then(|| guard.clone())
        };
        match changed {
            Some(value) => {
                self.hub.emit(&value);
                true
            }
            None => false,
        }
    }

    /// Calls `f` with every new value until the returned guard is dropped.
    pub fn subscribe(&self, f: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        self.hub.subscribe(f)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// How list pages present their items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewMode {
    #[default]
    Table,
    Grid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropdownId(pub u64);

/// Tracks the single open dropdown. Opening one closes any other.
#[derive(Clone, Debug, Default)]
pub struct DropdownRegistry {
    open: Store<Option<DropdownId>>,
}

impl DropdownRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_id(&self) -> Option<DropdownId> {
        self.open.get()
    }

    pub fn is_open(&self, id: DropdownId) -> bool {
        self.open_id() == Some(id)
    }

    pub fn open(&self, id: DropdownId) -> bool {
        self.open.set(Some(id))
    }

    /// Closes `id` if it is the open dropdown.
    pub fn close(&self, id: DropdownId) -> bool {
        self.open.update(|open| {
            if *open == Some(id) {
                *open = None;
            }
        })
    }

    pub fn toggle(&self, id: DropdownId) -> bool {
        self.open.update(|open| {
            *open = if *open == Some(id) { None } else { Some(id) };
        })
    }

    pub fn close_all(&self) -> bool {
        self.open.set(None)
    }

    pub fn subscribe(
        &self,
        f: impl Fn(&Option<DropdownId>) + Send + Sync + 'static,
    ) -> Subscription {
        self.open.subscribe(f)
    }
}

/// Application-wide UI state.
///
/// Create one at the application root and pass it (or clones of its stores) to whatever needs
/// it. Clones share state.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub theme: Store<Theme>,
    pub view_mode: Store<ViewMode>,
    pub dropdowns: DropdownRegistry,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_theme(&self) -> Theme {
        let next = self.theme.get().toggled();
        self.theme.set(next);
        next
    }
}
