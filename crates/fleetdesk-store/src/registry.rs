//! # Subscriber Registry
//!
//! Ordered list of observers per store instance. Insertion order is
//! notification order. Delivery iterates over a point-in-time copy of the
//! list, so an observer may unregister itself (or any other observer) during
//! notification without skipping or double-invoking unaffected observers.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use tracing::debug;

/// Observer callback, handed the full post-mutation snapshot.
pub type Observer<T> = Arc<dyn Fn(Arc<[T]>) + Send + Sync>;

struct RegistryInner<T> {
    observers: Mutex<Vec<(u64, Observer<T>)>>,
    next_id: AtomicU64,
}

/// Registry of observers for one entity store.
pub struct SubscriberRegistry<T> {
    inner: Arc<RegistryInner<T>>,
}

impl<T> SubscriberRegistry<T> {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                observers: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Register an observer at the end of the notification order.
    ///
    /// Returns a disposer handle; dropping the handle also unregisters.
    #[must_use]
    pub fn subscribe(&self, observer: Observer<T>) -> SubscriptionHandle<T> {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.observers.lock().push((id, observer));
        debug!(subscriber = id, "Observer registered");
        SubscriptionHandle {
            id,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver a snapshot to every observer, synchronously, in registration
    /// order. The observer list is copied before delivery; registrations and
    /// removals made by observers apply to subsequent notifications.
    pub fn notify(&self, snapshot: Arc<[T]>) {
        let observers: Vec<Observer<T>> = self
            .inner
            .observers
            .lock()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();

        for observer in observers {
            observer(Arc::clone(&snapshot));
        }
    }

    /// Number of currently registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.observers.lock().len()
    }

    /// Whether no observers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for SubscriberRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Disposer for one registered observer.
///
/// `unsubscribe` is idempotent and removes exactly this observer; dropping
/// the handle has the same effect.
pub struct SubscriptionHandle<T> {
    id: u64,
    registry: Weak<RegistryInner<T>>,
}

impl<T> SubscriptionHandle<T> {
    /// Remove this observer from the registry. Safe to call repeatedly,
    /// including from inside a notification.
    pub fn unsubscribe(&self) {
        if let Some(inner) = self.registry.upgrade() {
            let mut observers = inner.observers.lock();
            let before = observers.len();
            observers.retain(|(id, _)| *id != self.id);
            if observers.len() < before {
                debug!(subscriber = self.id, "Observer unregistered");
            }
        }
    }
}

impl<T> Drop for SubscriptionHandle<T> {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
