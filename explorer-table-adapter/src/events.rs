use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Stable identity of a registered listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

type Listener<E> = Arc<dyn Fn(&E) + Send + Sync>;

struct Registry<E> {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener<E>)>,
}

impl<E> Registry<E> {
    fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }
}

fn lock<E>(registry: &Mutex<Registry<E>>) -> MutexGuard<'_, Registry<E>> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A single-event-type listener registry (scroll, resize, store changes).
///
/// Each registration is stored under a [`ListenerId`]; removal always targets that id, so the
/// function that was registered is exactly the one that gets removed. Cloning the hub yields
/// another handle to the same registry.
pub struct EventHub<E> {
    inner: Arc<Mutex<Registry<E>>>,
}

impl<E> Clone for EventHub<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E> Default for EventHub<E> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Registry {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }
}

impl<E> fmt::Debug for EventHub<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl<E> EventHub<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.inner).listeners.len()
    }

    /// Removes a listener by id. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        lock(&self.inner).remove(id)
    }

    /// Calls every listener registered at the time of the call.
    ///
    /// Listeners run outside the registry lock, so they may subscribe or unsubscribe.
    pub fn emit(&self, event: &E) -> usize {
        let snapshot: Vec<Listener<E>> = lock(&self.inner)
            .listeners
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in &snapshot {
            listener(event);
        }
        snapshot.len()
    }
}

impl<E: 'static> EventHub<E> {
    /// Registers `f` and returns a guard that deregisters it on drop.
    pub fn subscribe(&self, f: impl Fn(&E) + Send + Sync + 'static) -> Subscription {
        let id = {
            let mut registry = lock(&self.inner);
            let id = ListenerId(registry.next_id);
            registry.next_id += 1;
            registry.listeners.push((id, Arc::new(f)));
            id
        };
        atrace!(id = id.0, "EventHub::subscribe");

        let weak: Weak<Mutex<Registry<E>>> = Arc::downgrade(&self.inner);
        Subscription {
            id,
            release: Some(Box::new(move |id| {
                if let Some(inner) = weak.upgrade() {
                    lock(&inner).remove(id);
                }
            })),
        }
    }
}

/// Keeps a listener registered for as long as it lives.
///
/// Dropping the guard deregisters the listener. If the hub is gone first, dropping is a no-op.
#[must_use = "dropping a Subscription deregisters its listener"]
pub struct Subscription {
    id: ListenerId,
    release: Option<Box<dyn FnOnce(ListenerId) + Send + Sync>>,
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            atrace!(id = self.id.0, "Subscription released");
            release(self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.release.is_some())
            .finish()
    }
}
