//! Concurrently shared registry configuration.

use std::sync::Arc;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use parking_lot::RwLock;

use crate::error::RegistryError;
use crate::resource::{Resource, ResourceId};

/// Registry safe to mutate and query from multiple threads of control.
///
/// Same lookup contract as [`Registry`](super::Registry) — shared `Arc`
/// handles that outlive removal of their entry — with every operation
/// taking `&self` behind an internal [`RwLock`].
///
/// # Concurrency guarantees
///
/// - **Per-operation atomicity**: each operation runs under the lock, so
///   no caller ever observes a partially inserted or partially removed
///   entry.
/// - **Same-id linearization**: the lock serializes all operations, so a
///   `remove` that completes before a `get` begins guarantees the `get`
///   reports absence, and an `insert` that completes before a `get` begins
///   guarantees the `get` finds the entry. Operations on different ids
///   carry no ordering relative to each other.
/// - **Handle construction cannot race destruction**: [`get`](Self::get)
///   clones the `Arc` while holding the read guard, so a concurrent
///   `remove` cannot drop the last reference mid-lookup; once the clone
///   exists it keeps the resource alive on its own.
///
/// The lock is held only for the duration of a single map operation. No
/// guard escapes this module and no caller code runs under the lock, so
/// every operation is bounded by registry size.
pub struct SharedRegistry<R: Resource> {
    entries: RwLock<HashMap<ResourceId, Arc<R>>>,
}

impl<R: Resource> SharedRegistry<R> {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Inserts a resource, keyed by the id it reports at this moment.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateId`] if an entry with the same id already
    /// exists. The existing entry is left untouched and the rejected
    /// resource is dropped. Under concurrent inserts of the same id,
    /// exactly one caller succeeds.
    pub fn insert(&self, resource: impl Into<Arc<R>>) -> Result<(), RegistryError> {
        let resource = resource.into();
        let id = resource.id();
        match self.entries.write().entry(id) {
            Entry::Occupied(_) => return Err(RegistryError::DuplicateId(id)),
            Entry::Vacant(slot) => {
                slot.insert(resource);
            }
        }
        tracing::debug!(id = %id, "resource inserted");
        Ok(())
    }

    /// Inserts a resource, displacing any existing entry with the same id.
    ///
    /// The explicit last-write-wins alternative to [`insert`](Self::insert);
    /// returns the displaced handle.
    pub fn replace(&self, resource: impl Into<Arc<R>>) -> Option<Arc<R>> {
        let resource = resource.into();
        let id = resource.id();
        let displaced = self.entries.write().insert(id, resource);
        tracing::debug!(id = %id, displaced = displaced.is_some(), "resource replaced");
        displaced
    }

    /// Removes the entry with the given id, returning the registry's
    /// handle to it.
    ///
    /// Handles already held by other callers stay valid; only the
    /// registry's own reference is detached. Removing an absent id is a
    /// no-op reported as `None`.
    pub fn remove(&self, id: ResourceId) -> Option<Arc<R>> {
        let removed = self.entries.write().remove(&id);
        if removed.is_some() {
            tracing::debug!(id = %id, "resource removed");
        }
        removed
    }

    /// Returns a shared handle to the resource with the given id, or
    /// `None` if absent.
    #[must_use]
    pub fn get(&self, id: ResourceId) -> Option<Arc<R>> {
        self.entries.read().get(&id).cloned()
    }

    /// Like [`get`](Self::get), for call sites that treat absence as a
    /// hard error rather than a branchable case.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] carrying the queried id.
    pub fn require(&self, id: ResourceId) -> Result<Arc<R>, RegistryError> {
        self.get(id).ok_or(RegistryError::NotFound(id))
    }

    /// Returns `true` if an entry with the given id exists.
    ///
    /// The answer may be stale by the time the caller acts on it; use the
    /// returned handle from [`get`](Self::get) when the resource itself is
    /// needed.
    #[must_use]
    pub fn contains(&self, id: ResourceId) -> bool {
        self.entries.read().contains_key(&id)
    }

    /// Returns the number of entries held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` if the registry holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Detaches the registry from every entry.
    ///
    /// Resources with outstanding caller handles stay alive under those
    /// handles; the rest are destroyed.
    pub fn clear(&self) {
        let count = {
            let mut entries = self.entries.write();
            let count = entries.len();
            entries.clear();
            count
        };
        tracing::debug!(count, "registry cleared");
    }

    /// Returns the ids of all held entries, in no particular order.
    #[must_use]
    pub fn ids(&self) -> Vec<ResourceId> {
        self.entries.read().keys().copied().collect()
    }

    /// Returns a point-in-time handle to every held resource.
    ///
    /// The snapshot is consistent (taken under one read guard) but not
    /// live: entries inserted or removed afterwards are not reflected.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Arc<R>> {
        self.entries.read().values().cloned().collect()
    }
}

impl<R: Resource> Default for SharedRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> core::fmt::Debug for SharedRegistry<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedRegistry")
            .field("ids", &self.ids())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Channel {
        id: u64,
        topic: &'static str,
    }

    impl Channel {
        fn new(id: u64, topic: &'static str) -> Self {
            Self { id, topic }
        }
    }

    impl Resource for Channel {
        fn id(&self) -> ResourceId {
            ResourceId::new(self.id)
        }
    }

    #[test]
    fn operations_work_through_shared_reference() {
        let registry = SharedRegistry::new();
        registry.insert(Channel::new(1, "general")).unwrap();

        assert!(registry.contains(ResourceId::new(1)));
        assert_eq!(registry.get(ResourceId::new(1)).unwrap().topic, "general");

        let removed = registry.remove(ResourceId::new(1)).unwrap();
        assert_eq!(removed.topic, "general");
        assert!(registry.is_empty());
    }

    #[test]
    fn duplicate_insert_rejected() {
        let registry = SharedRegistry::new();
        registry.insert(Channel::new(5, "first")).unwrap();

        let result = registry.insert(Channel::new(5, "second"));
        assert_eq!(result, Err(RegistryError::DuplicateId(ResourceId::new(5))));
        assert_eq!(registry.get(ResourceId::new(5)).unwrap().topic, "first");
    }

    #[test]
    fn require_reports_not_found() {
        let registry = SharedRegistry::<Channel>::new();
        assert_eq!(
            registry.require(ResourceId::new(2)),
            Err(RegistryError::NotFound(ResourceId::new(2)))
        );
    }

    #[test]
    fn replace_displaces_existing_entry() {
        let registry = SharedRegistry::new();
        registry.insert(Channel::new(4, "old")).unwrap();

        let displaced = registry.replace(Channel::new(4, "new")).unwrap();
        assert_eq!(displaced.topic, "old");
        assert_eq!(registry.get(ResourceId::new(4)).unwrap().topic, "new");
    }

    #[test]
    fn snapshot_is_point_in_time() {
        let registry = SharedRegistry::new();
        registry.insert(Channel::new(1, "a")).unwrap();
        registry.insert(Channel::new(2, "b")).unwrap();

        let snapshot = registry.snapshot();
        assert!(registry.remove(ResourceId::new(1)).is_some());

        assert_eq!(snapshot.len(), 2);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn handle_outlives_removal() {
        let registry = SharedRegistry::new();
        registry.insert(Channel::new(1, "durable")).unwrap();

        let handle = registry.get(ResourceId::new(1)).unwrap();
        assert!(registry.remove(ResourceId::new(1)).is_some());

        assert!(registry.get(ResourceId::new(1)).is_none());
        assert_eq!(handle.topic, "durable");
    }
}
