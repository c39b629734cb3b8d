//! Keyed resource registry containers for Tessera.
//!
//! `tessera_registry` provides containers that own a collection of
//! resources, each carrying a stable integer identifier, and answer
//! "does a resource with id X exist, and if so, give me access to it"
//! without exposing internal storage layout:
//!
//! - [`resource`] - The [`Resource`](resource::Resource) trait and
//!   [`ResourceId`](resource::ResourceId) identifier
//! - [`error`] - Error taxonomy for registry operations
//! - [`registry`] - The [`Registry`](registry::Registry) and
//!   [`SharedRegistry`](registry::SharedRegistry) containers
//!
//! # Ownership contract
//!
//! The registry is the long-term owner of every resource it holds, but
//! lookup hands out *shared* handles: a successful `get` returns a cloned
//! [`Arc`](std::sync::Arc) that keeps the resource alive on its own.
//! Removing an entry detaches only the registry's reference — the resource
//! is destroyed when the last handle anywhere is released. This lets a
//! background task keep using a resource after it has been evicted from
//! the registry.
//!
//! # Example
//!
//! ```
//! use tessera_registry::prelude::*;
//!
//! struct Buffer {
//!     id: ResourceId,
//!     bytes: Vec<u8>,
//! }
//!
//! impl Resource for Buffer {
//!     fn id(&self) -> ResourceId {
//!         self.id
//!     }
//! }
//!
//! let mut registry = Registry::new();
//! registry.insert(Buffer {
//!     id: ResourceId::new(1),
//!     bytes: vec![0xca, 0xfe],
//! })?;
//!
//! let buffer = registry.require(ResourceId::new(1))?;
//!
//! // The handle survives eviction.
//! assert!(registry.remove(ResourceId::new(1)).is_some());
//! assert_eq!(buffer.bytes.len(), 2);
//! # Ok::<(), RegistryError>(())
//! ```

/// Error taxonomy for registry operations.
pub mod error;

/// Registry containers.
pub mod registry;

/// Resource identity.
pub mod resource;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::error::*;
    pub use crate::registry::*;
    pub use crate::resource::*;
}
