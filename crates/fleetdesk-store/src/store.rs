//! # Entity Store
//!
//! Single source of truth for one entity type's list view. Serves reads
//! from the in-memory collection, applies mutations only after the remote
//! call succeeds, and fans each post-mutation snapshot out to subscribers.
//!
//! ## Concurrency
//!
//! Overlapping calls into the same store interleave at suspension points
//! only: every read-modify-write of the collection is a single critical
//! section, and the lock is never held across an await. The loading flag
//! guards only against duplicate fetch-all triggers; a create/update/remove
//! racing a fetch-all is possible and the last completed operation wins.
//! There is no transactional isolation, no retry, and no rollback (mutations
//! are never optimistic).

use crate::cache::CacheState;
use crate::registry::{Observer, SubscriberRegistry, SubscriptionHandle};
use crate::resource::EntityResource;
use parking_lot::Mutex;
use shared_types::{Entity, StoreError};
use std::sync::Arc;
use tracing::{debug, warn};

/// In-memory cache plus subscriber fan-out for one entity type.
pub struct EntityStore<R: EntityResource> {
    resource: Arc<R>,
    state: Mutex<CacheState<R::Record>>,
    registry: SubscriberRegistry<R::Record>,
}

impl<R: EntityResource> EntityStore<R> {
    /// Wire a store over its remote resource.
    ///
    /// Instances are explicitly owned by the composition root; construct one
    /// per entity type and inject it into consumers.
    pub fn new(resource: Arc<R>) -> Self {
        Self {
            resource,
            state: Mutex::new(CacheState::new()),
            registry: SubscriberRegistry::new(),
        }
    }

    /// Current snapshot without touching the network. `None` until the
    /// first successful fetch-all.
    #[must_use]
    pub fn cached(&self) -> Option<Arc<[R::Record]>> {
        self.state.lock().snapshot()
    }

    /// Number of registered observers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.registry.len()
    }

    /// Register an observer for post-mutation snapshots.
    ///
    /// If the cache is already loaded the observer is invoked once,
    /// immediately, with the current snapshot; observers must not assume
    /// their first invocation follows an explicit mutation. The returned
    /// handle unsubscribes idempotently (also on drop).
    #[must_use]
    pub fn subscribe(
        &self,
        observer: impl Fn(Arc<[R::Record]>) + Send + Sync + 'static,
    ) -> SubscriptionHandle<R::Record> {
        let observer: Observer<R::Record> = Arc::new(observer);
        let snapshot = self.state.lock().snapshot();
        let handle = self.registry.subscribe(Arc::clone(&observer));
        if let Some(snapshot) = snapshot {
            observer(snapshot);
        }
        handle
    }

    /// Return the collection, fetching it when unset or when `force` is set.
    ///
    /// De-duplication is best effort, not a correctness guarantee: while a
    /// fetch-all is in flight any call — forced or not — coalesces into it
    /// and returns the current (possibly stale or empty) snapshot rather
    /// than issuing a second request. Callers needing the freshest value
    /// must observe completion through the subscription mechanism, not the
    /// return value, when overlap is possible.
    pub async fn get_all(&self, force: bool) -> Result<Arc<[R::Record]>, StoreError> {
        {
            let mut state = self.state.lock();
            if state.is_loading() {
                debug!("Fetch-all already in flight, returning current snapshot");
                return Ok(state.snapshot().unwrap_or_else(|| Vec::new().into()));
            }
            if !force {
                if let Some(snapshot) = state.snapshot() {
                    return Ok(snapshot);
                }
            }
            state.set_loading(true);
        }

        // Lock released across the await; the loading flag keeps a second
        // fetch-all from being triggered meanwhile.
        let fetched = self.resource.fetch_all().await;

        let snapshot = {
            let mut state = self.state.lock();
            state.set_loading(false);
            match fetched {
                Ok(records) => state.replace_all(records),
                Err(e) => return Err(e.into()),
            }
        };

        debug!(records = snapshot.len(), "Collection replaced from fetch-all");
        self.registry.notify(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Fetch a single record remotely. Deliberately bypasses the cache in
    /// both directions: single-entity views are not cached.
    pub async fn get_by_id(&self, id: &str) -> Result<R::Record, StoreError> {
        self.resource.fetch_one(id).await.map_err(Into::into)
    }

    /// Create a record remotely and append it to the loaded collection,
    /// preserving prior order.
    ///
    /// On an unset cache the collection stays unset (and no notification is
    /// delivered): one record must not masquerade as the full server state.
    pub async fn create(&self, input: R::CreateInput) -> Result<R::Record, StoreError> {
        let record = self.resource.create(input).await?;

        let snapshot = self.state.lock().append(record.clone());
        match snapshot {
            Some(snapshot) => self.registry.notify(snapshot),
            None => debug!("Created before first load; cache left unset"),
        }
        Ok(record)
    }

    /// Update a record remotely and replace it in place, preserving its
    /// position.
    ///
    /// Fails fast with [`StoreError::NotLoaded`] when the cache is unset;
    /// the network is not touched in that case.
    pub async fn update(&self, id: &str, input: R::UpdateInput) -> Result<R::Record, StoreError> {
        if !self.state.lock().is_loaded() {
            return Err(StoreError::NotLoaded {
                operation: "update",
            });
        }

        let record = self.resource.update(id, input).await?;

        let snapshot = {
            let mut state = self.state.lock();
            if !state.contains(record.id()) {
                warn!(id = record.id(), "Updated record absent from collection");
            }
            state.replace(record.clone())
        };
        if let Some(snapshot) = snapshot {
            self.registry.notify(snapshot);
        }
        Ok(record)
    }

    /// Delete a record remotely and drop it from the collection.
    ///
    /// Fails fast with [`StoreError::NotLoaded`] when the cache is unset;
    /// the network is not touched in that case.
    pub async fn remove(&self, id: &str) -> Result<(), StoreError> {
        if !self.state.lock().is_loaded() {
            return Err(StoreError::NotLoaded {
                operation: "remove",
            });
        }

        self.resource.remove(id).await?;

        let snapshot = self.state.lock().remove(id);
        if let Some(snapshot) = snapshot {
            self.registry.notify(snapshot);
        }
        Ok(())
    }
}
