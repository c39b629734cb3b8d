//! Single-owner registry configuration.

use std::sync::Arc;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::error::RegistryError;
use crate::resource::{Resource, ResourceId};

/// Registry for resources mutated and queried from one logical thread of
/// control at a time.
///
/// The registry is the long-term owner of every resource it holds. Lookup
/// hands out shared handles: [`get`](Self::get) returns a cloned [`Arc`],
/// so a caller's handle keeps the resource alive independently of a later
/// [`remove`](Self::remove) — removing an entry only detaches the
/// registry's own reference, and the resource is destroyed when the last
/// handle anywhere is released.
///
/// Mutating operations take `&mut self`; there is no internal locking. For
/// a registry accessed from multiple threads, use
/// [`SharedRegistry`](super::SharedRegistry) instead — the lookup contract
/// is identical.
///
/// At most one resource per id is present at any time. A duplicate insert
/// is rejected via [`RegistryError::DuplicateId`]; overwriting is only
/// possible through the explicitly named [`replace`](Self::replace).
///
/// # Example
///
/// ```
/// use tessera_registry::registry::Registry;
/// use tessera_registry::resource::{Resource, ResourceId};
///
/// struct Session {
///     id: ResourceId,
///     user: String,
/// }
///
/// impl Resource for Session {
///     fn id(&self) -> ResourceId {
///         self.id
///     }
/// }
///
/// let mut registry = Registry::new();
/// registry.insert(Session {
///     id: ResourceId::new(1),
///     user: "ada".into(),
/// })?;
///
/// let session = registry.require(ResourceId::new(1))?;
/// assert_eq!(session.user, "ada");
///
/// // The handle outlives the entry.
/// assert!(registry.remove(ResourceId::new(1)).is_some());
/// assert_eq!(session.user, "ada");
/// # Ok::<(), tessera_registry::error::RegistryError>(())
/// ```
pub struct Registry<R: Resource> {
    entries: HashMap<ResourceId, Arc<R>>,
}

impl<R: Resource> Registry<R> {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Creates a new empty registry with space for at least `capacity`
    /// entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts a resource, keyed by the id it reports at this moment.
    ///
    /// Accepts either a bare resource or a pre-shared `Arc` handle; in the
    /// latter case the registry becomes one more holder alongside the
    /// caller's existing handles.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateId`] if an entry with the same id already
    /// exists. The existing entry is left untouched and the rejected
    /// resource is dropped.
    pub fn insert(&mut self, resource: impl Into<Arc<R>>) -> Result<(), RegistryError> {
        let resource = resource.into();
        let id = resource.id();
        match self.entries.entry(id) {
            Entry::Occupied(_) => Err(RegistryError::DuplicateId(id)),
            Entry::Vacant(slot) => {
                slot.insert(resource);
                tracing::debug!(id = %id, "resource inserted");
                Ok(())
            }
        }
    }

    /// Inserts a resource, displacing any existing entry with the same id.
    ///
    /// This is the explicit last-write-wins alternative to
    /// [`insert`](Self::insert). The displaced handle is returned so the
    /// caller decides whether the old resource's lifetime ends here.
    pub fn replace(&mut self, resource: impl Into<Arc<R>>) -> Option<Arc<R>> {
        let resource = resource.into();
        let id = resource.id();
        let displaced = self.entries.insert(id, resource);
        tracing::debug!(id = %id, displaced = displaced.is_some(), "resource replaced");
        displaced
    }

    /// Removes the entry with the given id, returning the registry's
    /// handle to it.
    ///
    /// If no other handle is outstanding, dropping the returned value ends
    /// the resource's lifetime. Removing an absent id is a no-op reported
    /// as `None`, not an error.
    pub fn remove(&mut self, id: ResourceId) -> Option<Arc<R>> {
        let removed = self.entries.remove(&id);
        if removed.is_some() {
            tracing::debug!(id = %id, "resource removed");
        }
        removed
    }

    /// Returns a shared handle to the resource with the given id, or
    /// `None` if absent.
    ///
    /// The handle keeps the resource alive independently of subsequent
    /// [`remove`](Self::remove) calls. Multiple callers may hold handles to
    /// the same resource simultaneously; none may assume exclusive access.
    #[must_use]
    pub fn get(&self, id: ResourceId) -> Option<Arc<R>> {
        self.entries.get(&id).cloned()
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
    #[must_use]
    pub fn contains(&self, id: ResourceId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Returns the number of entries held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the registry holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Detaches the registry from every entry.
    ///
    /// Resources with outstanding caller handles stay alive under those
    /// handles; the rest are destroyed.
    pub fn clear(&mut self) {
        tracing::debug!(count = self.entries.len(), "registry cleared");
        self.entries.clear();
    }

    /// Returns the ids of all held entries, in no particular order.
    #[must_use]
    pub fn ids(&self) -> Vec<ResourceId> {
        self.entries.keys().copied().collect()
    }

    /// Iterates over `(id, handle)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceId, &Arc<R>)> {
        self.entries.iter().map(|(id, resource)| (*id, resource))
    }
}

impl<R: Resource> Default for Registry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> core::fmt::Debug for Registry<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Registry").field("ids", &self.ids()).finish()
    }
}
