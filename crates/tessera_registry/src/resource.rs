//! Resource identity.
//!
//! A registry places exactly one obligation on the values it stores: expose
//! a stable, comparable identifier. This module provides the [`ResourceId`]
//! newtype for that identifier and the [`Resource`] trait carrying the
//! accessor.

use std::sync::Arc;

/// Unique identifier for a resource held in a registry.
///
/// Ids are caller-assigned integers. The registry defines equality and
/// lookup solely on this value; it attaches no meaning to its magnitude or
/// to the order ids were assigned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(u64);

impl ResourceId {
    /// Creates a `ResourceId` from its integer value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying integer value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ResourceId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A value that can be stored in a registry.
///
/// [`id()`](Resource::id) must return the same value for as long as the
/// resource lives. The registry keys its storage on the id observed at
/// insertion and never re-reads it for bookkeeping, so an unstable id
/// makes the entry unreachable rather than corrupting the container.
///
/// The `Send + Sync + 'static` bound lets handles returned by lookup cross
/// thread boundaries.
///
/// # Example
///
/// ```
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
/// ```
pub trait Resource: Send + Sync + 'static {
    /// Returns the resource's identifier.
    fn id(&self) -> ResourceId;
}

impl<R: Resource + ?Sized> Resource for Box<R> {
    fn id(&self) -> ResourceId {
        (**self).id()
    }
}

impl<R: Resource + ?Sized> Resource for Arc<R> {
    fn id(&self) -> ResourceId {
        (**self).id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tagged(u64);

    impl Resource for Tagged {
        fn id(&self) -> ResourceId {
            ResourceId::new(self.0)
        }
    }

    #[test]
    fn id_round_trips_through_new_and_get() {
        let id = ResourceId::new(17);
        assert_eq!(id.get(), 17);
        assert_eq!(ResourceId::from(17), id);
    }

    #[test]
    fn display_shows_integer_value() {
        assert_eq!(ResourceId::new(42).to_string(), "42");
    }

    #[test]
    fn boxed_trait_object_forwards_id() {
        let boxed: Box<dyn Resource> = Box::new(Tagged(7));
        assert_eq!(boxed.id(), ResourceId::new(7));

        let shared: Arc<dyn Resource> = Arc::new(Tagged(9));
        assert_eq!(shared.id(), ResourceId::new(9));
    }
}
