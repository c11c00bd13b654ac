//! Identity cache for materialized entities.
//!
//! Collection fetches route every element through
//! [`Entity::fetch_or_construct`](crate::traits::Entity::fetch_or_construct), which
//! returns a previously seen instance for the same `(type, id)` pair when one
//! is cached. The cache is bounded (LRU) and shared by clones of a client.

use lru::LruCache;
use std::any::{Any, TypeId};
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::Result;

type Slot = Arc<dyn Any + Send + Sync>;

/// Bounded `(type, id) -> entity` map.
pub struct IdentityCache {
    inner: Option<Mutex<LruCache<(TypeId, u64), Slot>>>,
}

impl IdentityCache {
    /// A cache holding up to `capacity` entities. `0` disables caching.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap))),
        }
    }

    /// A cache that never stores anything.
    pub fn disabled() -> Self {
        Self { inner: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    fn lock(&self) -> Option<MutexGuard<'_, LruCache<(TypeId, u64), Slot>>> {
        self.inner
            .as_ref()
            .map(|m| m.lock().unwrap_or_else(|poisoned| poisoned.into_inner()))
    }

    pub fn get<T: Any + Clone + Send + Sync>(&self, id: u64) -> Option<T> {
        let mut guard = self.lock()?;
        guard
            .get(&(TypeId::of::<T>(), id))
            .and_then(|slot| slot.downcast_ref::<T>())
            .cloned()
    }

    pub fn insert<T: Any + Clone + Send + Sync>(&self, id: u64, entity: &T) {
        if let Some(mut guard) = self.lock() {
            guard.put((TypeId::of::<T>(), id), Arc::new(entity.clone()));
        }
    }

    /// Return the cached entity for `id`, or build, store, and return a new one.
    pub fn fetch_or_insert_with<T, F>(&self, id: u64, build: F) -> Result<T>
    where
        T: Any + Clone + Send + Sync,
        F: FnOnce() -> Result<T>,
    {
        if let Some(hit) = self.get::<T>(id) {
            return Ok(hit);
        }
        let entity = build()?;
        self.insert(id, &entity);
        Ok(entity)
    }

    pub fn len(&self) -> usize {
        self.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for IdentityCache {
    fn default() -> Self {
        Self::new(crate::defaults::cache::IDENTITY_CAPACITY)
    }
}

impl std::fmt::Debug for IdentityCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityCache")
            .field("enabled", &self.is_enabled())
            .field("len", &self.len())
            .finish()
    }
}
