//! # Cache State
//!
//! The in-memory collection behind an entity store: an ordered sequence of
//! entities, unique by identifier, or an explicit "not yet loaded" sentinel
//! distinct from "loaded but empty", plus the fetch-all in-flight flag.
//!
//! Snapshots are `Arc<[T]>` and immutable after handoff: every mutation
//! builds a fresh snapshot instead of touching one already given to
//! observers (copy-on-notify).

use shared_types::Entity;
use std::sync::Arc;

/// Collection state for one entity type.
#[derive(Debug)]
pub struct CacheState<T> {
    /// `None` until the first successful fetch-all.
    collection: Option<Arc<[T]>>,
    /// True while a fetch-all is in flight.
    loading: bool,
}

impl<T: Entity> CacheState<T> {
    /// Fresh, unset cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            collection: None,
            loading: false,
        }
    }

    /// Current snapshot, `None` while unset.
    #[must_use]
    pub fn snapshot(&self) -> Option<Arc<[T]>> {
        self.collection.clone()
    }

    /// Whether the first fetch-all has completed.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.collection.is_some()
    }

    /// Whether a fetch-all is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Flip the fetch-all guard.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Whether the loaded collection contains `id`. False while unset.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.collection
            .as_deref()
            .is_some_and(|records| records.iter().any(|r| r.id() == id))
    }

    /// Replace the collection wholesale with a fetch-all result.
    pub fn replace_all(&mut self, records: Vec<T>) -> Arc<[T]> {
        let snapshot: Arc<[T]> = records.into();
        self.collection = Some(snapshot.clone());
        snapshot
    }

    /// Append a created record, preserving prior order.
    ///
    /// Returns `None` when the cache is unset: a create without a prior load
    /// must not initialize the collection from a single record.
    pub fn append(&mut self, record: T) -> Option<Arc<[T]>> {
        let current = self.collection.as_deref()?;
        let mut next: Vec<T> = current.to_vec();
        next.push(record);
        Some(self.replace_all(next))
    }

    /// Replace the record with a matching identifier in place, preserving
    /// its position. A record whose identifier is absent leaves the
    /// collection unchanged.
    ///
    /// Returns `None` when the cache is unset.
    pub fn replace(&mut self, record: T) -> Option<Arc<[T]>> {
        let current = self.collection.as_deref()?;
        let mut next: Vec<T> = current.to_vec();
        if let Some(slot) = next.iter_mut().find(|r| r.id() == record.id()) {
            *slot = record;
        }
        Some(self.replace_all(next))
    }

    /// Drop the record with a matching identifier.
    ///
    /// Returns `None` when the cache is unset.
    pub fn remove(&mut self, id: &str) -> Option<Arc<[T]>> {
        let current = self.collection.as_deref()?;
        let next: Vec<T> = current.iter().filter(|r| r.id() != id).cloned().collect();
        Some(self.replace_all(next))
    }
}

impl<T: Entity> Default for CacheState<T> {
    fn default() -> Self {
        Self::new()
    }
}
