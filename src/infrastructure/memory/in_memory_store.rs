//! In-memory implementation of the mapping store.

use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

use crate::domain::entities::{Entry, Identifier, Slot};
use crate::domain::repositories::{MappingStore, StoreStats};
use crate::error::AppError;

#[derive(Debug, Default)]
struct Inner {
    slots: HashMap<Identifier, Slot>,
    by_url: HashMap<String, Identifier>,
    reserved: usize,
}

impl Inner {
    fn drop_reservation(&mut self, id: &Identifier) -> bool {
        if matches!(self.slots.get(id), Some(Slot::Reserved)) {
            self.slots.remove(id);
            self.reserved -= 1;
            true
        } else {
            false
        }
    }
}

/// Mapping store that lives for the lifetime of the process.
///
/// Both indexes sit behind one [`RwLock`]: lookups share the read lock, while
/// `reserve`, `put`, and `release` take the write lock, so the two views are
/// never observed out of sync.
#[derive(Debug, Default)]
pub struct InMemoryMappingStore {
    inner: RwLock<Inner>,
}

impl InMemoryMappingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bound entries.
    pub fn len(&self) -> usize {
        self.inner.read().by_url.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the committed entry for `id`.
    pub fn entry(&self, id: &Identifier) -> Option<Entry> {
        self.inner.read().slots.get(id).and_then(Slot::entry).cloned()
    }
}

impl MappingStore for InMemoryMappingStore {
    fn get(&self, id: &Identifier) -> Result<Option<String>, AppError> {
        let inner = self.inner.read();
        Ok(inner
            .slots
            .get(id)
            .and_then(Slot::entry)
            .map(|entry| entry.url.clone()))
    }

    fn put(&self, id: &Identifier, url: &str) -> Result<Identifier, AppError> {
        let mut inner = self.inner.write();

        if let Some(Slot::Bound(_)) = inner.slots.get(id) {
            return Err(AppError::DuplicateId { id: id.to_string() });
        }

        if let Some(existing) = inner.by_url.get(url).cloned() {
            inner.drop_reservation(id);
            debug!(id = %id, existing = %existing, "URL already bound, reservation dropped");
            return Ok(existing);
        }

        let previous = inner
            .slots
            .insert(id.clone(), Slot::Bound(Entry::new(id.clone(), url.to_string())));
        if matches!(previous, Some(Slot::Reserved)) {
            inner.reserved -= 1;
        }
        inner.by_url.insert(url.to_string(), id.clone());

        Ok(id.clone())
    }

    fn find_id_for_url(&self, url: &str) -> Result<Option<Identifier>, AppError> {
        Ok(self.inner.read().by_url.get(url).cloned())
    }

    fn contains(&self, id: &Identifier) -> Result<bool, AppError> {
        Ok(self.inner.read().slots.contains_key(id))
    }

    fn reserve(&self, id: &Identifier) -> Result<bool, AppError> {
        let mut inner = self.inner.write();

        if inner.slots.contains_key(id) {
            return Ok(false);
        }

        inner.slots.insert(id.clone(), Slot::Reserved);
        inner.reserved += 1;
        Ok(true)
    }

    fn release(&self, id: &Identifier) -> Result<(), AppError> {
        if self.inner.write().drop_reservation(id) {
            debug!(id = %id, "Reservation released");
        }
        Ok(())
    }

    fn stats(&self) -> Result<StoreStats, AppError> {
        let inner = self.inner.read();
        Ok(StoreStats {
            entries: inner.by_url.len(),
            reserved: inner.reserved,
        })
    }
}
